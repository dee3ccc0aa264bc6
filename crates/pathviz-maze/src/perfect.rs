use log::debug;
use pathviz_core::{Bounds, Grid, Point, Tile};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::mapgen::MazeGen;

/// Carving state of a cell while the perfect maze is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Carve {
    /// Odd-lattice cell not reached yet.
    Unvisited,
    /// Part of the carved maze.
    Passage,
    Wall,
}

/// 2-step moves on the odd lattice (up, right, down, left).
const LATTICE_STEPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
];

#[inline]
fn is_lattice(p: Point) -> bool {
    p.x % 2 == 1 && p.y % 2 == 1
}

/// The odd-aligned cell nearest to `p`, if it lies inside `bounds`.
fn lattice_seed(p: Point, bounds: Bounds) -> Option<Point> {
    let snap = |v: i32| {
        if v % 2 == 1 {
            v
        } else if v > 0 {
            v - 1
        } else {
            v + 1
        }
    };
    let q = Point::new(snap(p.x), snap(p.y));
    (bounds.contains(q) && is_lattice(q)).then_some(q)
}

impl<R: Rng> MazeGen<R> {
    /// Perfect maze via an iterative recursive backtracker.
    ///
    /// Corridors are carved on the odd-coordinate lattice so walls remain
    /// between them; the result has exactly one simple path between any
    /// two carved cells. `start` and `end` are then forced open and, if
    /// either has no open neighbour, one random neighbour is opened so it
    /// joins the maze.
    pub fn perfect(&mut self, grid: &mut Grid, start: Point, end: Point) {
        let bounds = grid.bounds();
        let w = grid.width().max(0) as usize;
        let idx = |p: Point| p.y as usize * w + p.x as usize;

        let mut tags = vec![Carve::Wall; grid.len()];
        for p in bounds {
            if is_lattice(p) {
                tags[idx(p)] = Carve::Unvisited;
            }
        }

        let mut carved = 0usize;
        if let Some(seed) = lattice_seed(start, bounds) {
            tags[idx(seed)] = Carve::Passage;
            carved += 1;
            let mut stack = vec![seed];
            let mut options: Vec<Point> = Vec::with_capacity(4);

            while let Some(&cur) = stack.last() {
                options.clear();
                for d in LATTICE_STEPS {
                    let n = cur + d;
                    if bounds.contains(n) && tags[idx(n)] == Carve::Unvisited {
                        options.push(n);
                    }
                }
                match options.choose(&mut self.rng) {
                    Some(&next) => {
                        let mid = Point::new((cur.x + next.x) / 2, (cur.y + next.y) / 2);
                        tags[idx(mid)] = Carve::Passage;
                        tags[idx(next)] = Carve::Passage;
                        carved += 2;
                        stack.push(next);
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        for p in bounds {
            let tile = match tags[idx(p)] {
                Carve::Passage => Tile::Open,
                Carve::Unvisited | Carve::Wall => Tile::Wall,
            };
            grid.set(p, tile);
        }

        grid.set(start, Tile::Open);
        grid.set(end, Tile::Open);
        self.ensure_exit(grid, start);
        self.ensure_exit(grid, end);
        debug!(
            "perfect maze: carved {carved} cells, wall ratio {:.3}",
            grid.wall_ratio()
        );
    }

    /// Open one random in-bounds neighbour of `p` if none is open.
    fn ensure_exit(&mut self, grid: &mut Grid, p: Point) {
        if !grid.contains(p) {
            return;
        }
        let mut around = p.neighbors_4();
        if around.iter().any(|&n| grid.is_open(n)) {
            return;
        }
        around.shuffle(&mut self.rng);
        if let Some(&n) = around.iter().find(|&&n| grid.contains(n)) {
            debug!("perfect maze: opening {n} so {p} can escape");
            grid.set(n, Tile::Open);
        }
    }
}
