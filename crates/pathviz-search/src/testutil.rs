//! Shared fixtures for the engine tests.

use pathviz_core::{Grid, Point, Tile};

pub(crate) fn open_grid(width: i32, height: i32) -> Grid {
    Grid::new(width, height)
}

/// Parse a layout that must contain both `S` and `E`.
pub(crate) fn parse(layout: &str) -> (Grid, Point, Point) {
    let parsed = Grid::parse(layout).unwrap();
    (parsed.grid, parsed.start.unwrap(), parsed.end.unwrap())
}

/// A 5×5 open grid whose start (2,2) is boxed in by four walls.
pub(crate) fn walled_in_start() -> (Grid, Point, Point) {
    let mut grid = Grid::new(5, 5);
    let start = Point::new(2, 2);
    for n in start.neighbors_4() {
        grid.set(n, Tile::Wall);
    }
    (grid, start, Point::new(4, 4))
}

/// Assert `path` runs from `start` to `end` over open, 4-adjacent cells
/// without repeating a cell.
pub(crate) fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for w in path.windows(2) {
        assert!(w[0].is_adjacent_4(w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    for &p in path {
        assert!(grid.is_open(p), "{p} is not open");
    }
    let mut sorted = path.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), path.len(), "path repeats a cell");
}
