//! **pathviz-core**: grid model shared by the pathviz search and maze crates.
//!
//! This crate provides the coordinate space ([`Point`], [`Bounds`]) and the
//! occupancy data ([`Tile`], [`Grid`]) that search engines read and maze
//! generators write.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Cells, Point};
pub use grid::{Grid, GridError, ParsedGrid, Tile};
