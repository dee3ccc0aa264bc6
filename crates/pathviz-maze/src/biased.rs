use log::debug;
use pathviz_core::{Grid, Point, Tile};
use rand::Rng;

use crate::carve::carve_winding_path;
use crate::mapgen::MazeGen;

/// Base probability of a wall on even columns.
const WALL_PROB: f64 = 0.3;
/// Extra wall probability on odd columns, producing vertical corridors.
const ODD_COLUMN_BIAS: f64 = 0.3;

impl<R: Rng> MazeGen<R> {
    /// Biased-random maze.
    ///
    /// Every cell is independently a wall with probability 0.3 (0.6 on odd
    /// columns), then two independent winding corridors from `start` to
    /// `end` are forced open. Connectivity is best effort only.
    pub fn biased_random(&mut self, grid: &mut Grid, start: Point, end: Point) {
        for p in grid.bounds() {
            let prob = if p.x % 2 == 1 {
                WALL_PROB + ODD_COLUMN_BIAS
            } else {
                WALL_PROB
            };
            let tile = if self.rng.random_bool(prob) {
                Tile::Wall
            } else {
                Tile::Open
            };
            grid.set(p, tile);
        }

        let bounds = grid.bounds();
        let first = carve_winding_path(&mut self.rng, bounds, start, end);
        let second = carve_winding_path(&mut self.rng, bounds, start, end);
        for &p in first.iter().chain(second.iter()) {
            grid.set(p, Tile::Open);
        }

        grid.set(start, Tile::Open);
        grid.set(end, Tile::Open);
        debug!(
            "biased random maze: corridors of {} and {} cells, wall ratio {:.3}",
            first.len(),
            second.len(),
            grid.wall_ratio()
        );
    }
}
