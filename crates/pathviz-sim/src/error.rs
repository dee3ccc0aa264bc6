//! Errors raised at the configuration and editing surfaces.

use std::fmt;

use pathviz_core::Point;

/// An invalid [`SimConfig`](crate::SimConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is not positive.
    EmptyGrid { width: i32, height: i32 },
    /// Start or end lies outside the grid.
    OutOfBounds(Point),
    /// Start and end are the same cell.
    SameEndpoints(Point),
    /// `steps_per_tick` is zero.
    ZeroStepsPerTick,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "config: grid size {width}x{height} is empty")
            }
            Self::OutOfBounds(p) => write!(f, "config: endpoint {p} is outside the grid"),
            Self::SameEndpoints(p) => write!(f, "config: start and end are both {p}"),
            Self::ZeroStepsPerTick => write!(f, "config: steps_per_tick must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A rejected grid edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The cell lies outside the grid.
    OutOfBounds(Point),
    /// Walls cannot be placed on the start or end cell.
    Endpoint(Point),
    /// Start and end cannot share a cell.
    Overlap(Point),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "edit: {p} is outside the grid"),
            Self::Endpoint(p) => write!(f, "edit: {p} is the start or end cell"),
            Self::Overlap(p) => write!(f, "edit: start and end cannot both be {p}"),
        }
    }
}

impl std::error::Error for EditError {}
