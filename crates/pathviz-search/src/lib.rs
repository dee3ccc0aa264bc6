//! Stepwise pathfinding engines for 2D occupancy grids.
//!
//! Each engine is a resumable search that produces one [`Step`] snapshot per
//! call instead of running to completion, so a driver can animate the
//! search as it unfolds:
//!
//! - **Dijkstra** ([`dijkstra`]): unit-cost uniform-cost search
//! - **A\*** ([`astar`]): Manhattan-guided best-first search
//! - **BFS** ([`bfs`]): FIFO flood, shortest path by edge count
//! - **DFS** ([`dfs`]): LIFO exploration, *not* shortest
//!
//! All engines implement [`StepSearch`] (and therefore `Iterator<Item = Step>`).
//! Consuming every step is equivalent to running the classical algorithm;
//! the last step carries the reconstructed path.
//!
//! ```
//! use pathviz_core::{Grid, Point};
//! use pathviz_search::bfs;
//!
//! let grid = Grid::new(5, 5);
//! let last = bfs(Point::new(0, 0), Point::new(4, 4), &grid).last().unwrap();
//! assert_eq!(last.path_len(), 9);
//! ```

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod predecessor;
mod state;
mod step;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::{AstarSearch, astar};
pub use bfs::{BfsSearch, bfs};
pub use dfs::{DfsSearch, dfs};
pub use dijkstra::{DijkstraSearch, dijkstra};
pub use distance::manhattan;
pub use predecessor::{PredecessorMap, reconstruct};
pub use state::UNREACHABLE;
pub use step::Step;
pub use traits::StepSearch;

#[cfg(test)]
pub(crate) mod testutil;
