use log::debug;
use pathviz_core::{Grid, Point, Tile};
use rand::Rng;

use crate::carve::carve_winding_path;
use crate::mapgen::MazeGen;

/// Target wall share after carving, as a `[min, max]` fraction of all cells.
const WALL_RATIO_MIN: f64 = 0.5;
const WALL_RATIO_MAX: f64 = 0.6;
/// Random openings are attempted at most this many times per cell.
const ATTEMPTS_PER_CELL: usize = 5;

impl<R: Rng> MazeGen<R> {
    /// Winding-path maze.
    ///
    /// 1. Fill the grid with walls and carve one weighted random walk from
    ///    `start` to `end`.
    /// 2. Open random wall cells until walls make up a random share in
    ///    `[50%, 60%]` of the grid, giving up after `5 × cells` attempts.
    pub fn winding_path(&mut self, grid: &mut Grid, start: Point, end: Point) {
        if grid.is_empty() {
            return;
        }
        grid.fill(Tile::Wall);
        for p in carve_winding_path(&mut self.rng, grid.bounds(), start, end) {
            grid.set(p, Tile::Open);
        }

        let total = grid.len();
        let min_walls = (total as f64 * WALL_RATIO_MIN) as usize;
        let max_walls = (total as f64 * WALL_RATIO_MAX) as usize;
        let target_walls = self.rng.random_range(min_walls..=max_walls);
        let target_open = total - target_walls;
        let extra = target_open.saturating_sub(grid.count(Tile::Open));

        let (w, h) = (grid.width(), grid.height());
        let mut opened = 0;
        let mut attempts = 0;
        while opened < extra && attempts < total * ATTEMPTS_PER_CELL {
            let p = Point::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
            if grid.at(p) == Some(Tile::Wall) && p != start && p != end {
                grid.set(p, Tile::Open);
                opened += 1;
            }
            attempts += 1;
        }

        grid.set(start, Tile::Open);
        grid.set(end, Tile::Open);
        debug!(
            "winding path maze: opened {opened}/{extra} extra cells in {attempts} attempts, wall ratio {:.3}",
            grid.wall_ratio()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_search::bfs;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn wall_ratio_within_target_band() {
        let (start, end) = (Point::new(0, 0), Point::new(44, 29));
        for seed in 0..10 {
            let mut grid = Grid::new(45, 30);
            MazeGen::new(StdRng::seed_from_u64(seed)).winding_path(&mut grid, start, end);
            let ratio = grid.wall_ratio();
            assert!(
                (0.49..=0.61).contains(&ratio),
                "seed {seed}: wall ratio {ratio}"
            );
        }
    }

    #[test]
    fn carved_corridor_connects_endpoints() {
        let (start, end) = (Point::new(3, 2), Point::new(17, 12));
        for seed in 0..10 {
            let mut grid = Grid::new(20, 15);
            MazeGen::new(StdRng::seed_from_u64(seed)).winding_path(&mut grid, start, end);
            let last = bfs(start, end, &grid).last().unwrap();
            assert!(last.path_len() > 0, "seed {seed}");
        }
    }

    #[test]
    fn tiny_grid_terminates() {
        let mut grid = Grid::new(2, 1);
        MazeGen::new(StdRng::seed_from_u64(0)).winding_path(
            &mut grid,
            Point::new(0, 0),
            Point::new(1, 0),
        );
        assert_eq!(grid.count(Tile::Open), 2);
    }
}
