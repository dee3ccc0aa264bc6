use std::collections::VecDeque;
use std::iter::FusedIterator;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::predecessor::PredecessorMap;
use crate::state::SearchState;
use crate::step::Step;
use crate::traits::StepSearch;

/// Start a stepwise breadth-first search from `start` to `end` over `grid`.
pub fn bfs(start: Point, end: Point, grid: &Grid) -> BfsSearch {
    BfsSearch::new(start, end, grid)
}

/// Stepwise breadth-first search.
///
/// A cell is enqueued and given a predecessor only the first time it is
/// discovered; FIFO order makes that the shortest path by edge count.
pub struct BfsSearch {
    state: SearchState,
    queue: VecDeque<Point>,
    discovered: Vec<bool>,
}

impl BfsSearch {
    /// Initialise the search. No work happens until the first step is
    /// requested.
    pub fn new(start: Point, end: Point, grid: &Grid) -> Self {
        let mut discovered = vec![false; grid.len()];
        if let Some(si) = grid.index(start) {
            discovered[si] = true;
        }
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self {
            state: SearchState::new("bfs", start, end, grid),
            queue,
            discovered,
        }
    }
}

impl Iterator for BfsSearch {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.state.is_finished() {
            return None;
        }

        while let Some(cp) = self.queue.pop_front() {
            if self.state.is_visited(cp) {
                continue;
            }
            let step = self.state.visit(cp);
            if cp == self.state.end {
                self.queue.clear();
                return Some(step);
            }

            let mut nbuf = std::mem::take(&mut self.state.nbuf);
            nbuf.clear();
            self.state.grid.open_neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.state.grid.index(np) else {
                    continue;
                };
                if self.discovered[ni] {
                    continue;
                }
                self.discovered[ni] = true;
                self.state.prev.set(np, cp);
                self.state.discover(np);
                self.queue.push_back(np);
            }

            self.state.nbuf = nbuf;
            return Some(step);
        }

        Some(self.state.finish())
    }
}

impl FusedIterator for BfsSearch {}

impl StepSearch for BfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn steps_emitted(&self) -> usize {
        self.state.steps()
    }

    fn predecessors(&self) -> &PredecessorMap {
        &self.state.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_valid_path, open_grid, parse, walled_in_start};

    #[test]
    fn open_grid_shortest_path() {
        let grid = open_grid(5, 5);
        let (start, end) = (Point::new(0, 0), Point::new(4, 4));
        let path = bfs(start, end, &grid).last().unwrap().path.unwrap();
        assert_eq!(path.len(), 9);
        assert_valid_path(&grid, &path, start, end);
    }

    #[test]
    fn visits_in_layers() {
        let grid = open_grid(5, 5);
        let start = Point::new(2, 2);
        let mut last_dist = 0;
        for step in bfs(start, Point::new(4, 4), &grid) {
            let Some(c) = step.current else { break };
            let d = crate::manhattan(start, c);
            assert!(d >= last_dist, "BFS visited {c} out of layer order");
            last_dist = d;
        }
    }

    #[test]
    fn frontier_never_contains_visited() {
        let (grid, start, end) = parse(
            "
            S..#..
            .#.#.#
            .#...E
            ",
        );
        for step in bfs(start, end, &grid) {
            assert!(step.frontier.is_disjoint(&step.visited));
        }
    }

    #[test]
    fn start_equals_end() {
        let grid = open_grid(3, 3);
        let p = Point::new(1, 1);
        let steps: Vec<Step> = bfs(p, p, &grid).collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].current, Some(p));
        assert_eq!(steps[1].path, Some(vec![p]));
    }

    #[test]
    fn walled_in_start_has_no_path() {
        let (grid, start, end) = walled_in_start();
        let last = bfs(start, end, &grid).last().unwrap();
        assert_eq!(last.path, Some(Vec::new()));
        assert_eq!(last.visited.len(), 1);
    }
}
