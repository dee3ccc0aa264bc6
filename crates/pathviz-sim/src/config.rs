//! Simulation configuration.

use pathviz_core::{Bounds, Point};
use pathviz_maze::MazeKind;
use pathviz_search::Algorithm;

use crate::error::ConfigError;

/// Configuration for creating a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
    pub start: Point,
    pub end: Point,
    pub algorithm: Algorithm,
    pub maze: MazeKind,
    /// Seed for maze generation; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Steps advanced per [`Simulation::tick`](crate::Simulation::tick).
    pub steps_per_tick: usize,
    /// Number of completed runs kept in the history.
    pub history_len: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 45,
            height: 30,
            start: Point::new(0, 0),
            end: Point::new(44, 29),
            algorithm: Algorithm::Dijkstra,
            maze: MazeKind::Perfect,
            seed: None,
            steps_per_tick: 1,
            history_len: 4,
        }
    }
}

impl SimConfig {
    /// Check that the grid is non-empty and both endpoints are distinct
    /// cells inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        let bounds = Bounds::new(self.width, self.height);
        for p in [self.start, self.end] {
            if !bounds.contains(p) {
                return Err(ConfigError::OutOfBounds(p));
            }
        }
        if self.start == self.end {
            return Err(ConfigError::SameEndpoints(self.start));
        }
        if self.steps_per_tick == 0 {
            return Err(ConfigError::ZeroStepsPerTick);
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{"width": 10, "height": 8, "end": {"x": 9, "y": 7}}"#).unwrap();
        assert_eq!(cfg.width, 10);
        assert_eq!(cfg.algorithm, Algorithm::Dijkstra);
        assert_eq!(cfg.validate(), Ok(()));
    }
}
