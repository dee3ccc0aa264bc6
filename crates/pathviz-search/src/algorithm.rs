use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};

use crate::traits::StepSearch;
use crate::{astar, bfs, dfs, dijkstra};

/// The four interchangeable stepwise search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Astar,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Dijkstra, Self::Astar, Self::Bfs, Self::Dfs];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::Astar => "A*",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// The following algorithm in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Whether the final path is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Start a new search with this algorithm.
    pub fn search(self, start: Point, end: Point, grid: &Grid) -> Box<dyn StepSearch> {
        match self {
            Self::Dijkstra => Box::new(dijkstra(start, end, grid)),
            Self::Astar => Box::new(astar(start, end, grid)),
            Self::Bfs => Box::new(bfs(start, end, grid)),
            Self::Dfs => Box::new(dfs(start, end, grid)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::Astar),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Returned when a string names no known [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected dijkstra, astar, bfs or dfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
