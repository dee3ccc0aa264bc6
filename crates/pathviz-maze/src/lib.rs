//! Maze generation for pathviz grids.
//!
//! Three strategies, all mutating a [`Grid`](pathviz_core::Grid) in place and
//! always leaving `start` and `end` open:
//! - **Winding path**: one carved start→end corridor, then random openings
//!   until walls cover 50–60% of the grid.
//! - **Biased random**: independent random walls, denser on odd columns,
//!   plus two carved start→end corridors.
//! - **Perfect maze**: recursive backtracker on the odd-coordinate lattice;
//!   every open cell is connected by exactly one simple path.

mod biased;
mod carve;
mod mapgen;
mod perfect;
mod winding;

pub use carve::carve_winding_path;
pub use mapgen::{MazeGen, MazeKind, ParseMazeKindError};
