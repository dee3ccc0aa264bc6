//! Run-driver state for pathviz.
//!
//! [`Simulation`] is the explicit state a presentation shell drives: the
//! grid being edited, start and end cells, the selected algorithm and maze
//! strategy, the in-progress search and the latest step to display. Any
//! edit invalidates the current run.

pub mod config;
pub mod error;
pub mod history;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, EditError};
pub use history::{RunHistory, RunRecord};
pub use sim::{RunStatus, Simulation};
