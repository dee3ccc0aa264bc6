use std::collections::BinaryHeap;
use std::iter::FusedIterator;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::predecessor::PredecessorMap;
use crate::state::{OpenNode, SearchState, UNREACHABLE};
use crate::step::Step;
use crate::traits::StepSearch;

/// Start a stepwise Dijkstra search from `start` to `end` over `grid`.
pub fn dijkstra(start: Point, end: Point, grid: &Grid) -> DijkstraSearch {
    DijkstraSearch::new(start, end, grid)
}

/// Stepwise Dijkstra search with unit edge costs.
///
/// Cells are re-pushed on every strict improvement; outdated heap entries
/// are discarded lazily when popped.
pub struct DijkstraSearch {
    state: SearchState,
    dist: Vec<i32>,
    open: BinaryHeap<OpenNode>,
    seq: u64,
}

impl DijkstraSearch {
    /// Initialise the search. No work happens until the first step is
    /// requested.
    pub fn new(start: Point, end: Point, grid: &Grid) -> Self {
        let mut dist = vec![UNREACHABLE; grid.len()];
        if let Some(si) = grid.index(start) {
            dist[si] = 0;
        }
        let mut search = Self {
            state: SearchState::new("dijkstra", start, end, grid),
            dist,
            open: BinaryHeap::new(),
            seq: 0,
        };
        search.push(start, 0);
        search
    }

    /// Best known distance from the start to `p`, or [`UNREACHABLE`].
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.state.grid.index(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    fn push(&mut self, pos: Point, cost: i32) {
        self.open.push(OpenNode {
            pos,
            g: cost,
            key: cost,
            seq: self.seq,
        });
        self.seq += 1;
    }
}

impl Iterator for DijkstraSearch {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.state.is_finished() {
            return None;
        }

        while let Some(current) = self.open.pop() {
            let cp = current.pos;
            if self.state.is_visited(cp) {
                continue;
            }
            let step = self.state.visit(cp);
            if cp == self.state.end {
                self.open.clear();
                return Some(step);
            }

            let mut nbuf = std::mem::take(&mut self.state.nbuf);
            nbuf.clear();
            self.state.grid.open_neighbors(cp, &mut nbuf);

            let tentative = current.g + 1;
            for &np in nbuf.iter() {
                let Some(ni) = self.state.grid.index(np) else {
                    continue;
                };
                if tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                self.state.prev.set(np, cp);
                self.state.discover(np);
                self.push(np, tentative);
            }

            self.state.nbuf = nbuf;
            return Some(step);
        }

        Some(self.state.finish())
    }
}

impl FusedIterator for DijkstraSearch {}

impl StepSearch for DijkstraSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
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
    use crate::testutil::{assert_valid_path, open_grid, walled_in_start};

    #[test]
    fn first_step_is_start() {
        let grid = open_grid(5, 5);
        let mut s = dijkstra(Point::new(0, 0), Point::new(4, 4), &grid);
        let first = s.next_step().unwrap();
        assert_eq!(first.current, Some(Point::new(0, 0)));
        assert_eq!(first.visited.len(), 1);
        assert_eq!(first.frontier.len(), 0);
    }

    #[test]
    fn open_grid_shortest_path() {
        let grid = open_grid(5, 5);
        let (start, end) = (Point::new(0, 0), Point::new(4, 4));
        let last = dijkstra(start, end, &grid).last().unwrap();
        let path = last.path.unwrap();
        assert_eq!(path.len(), 9);
        assert_valid_path(&grid, &path, start, end);
        assert!(last.frontier.is_empty());
        assert_eq!(last.current, None);
    }

    #[test]
    fn distances_match_manhattan_on_open_grid() {
        let grid = open_grid(6, 4);
        let start = Point::new(0, 0);
        let mut s = dijkstra(start, Point::new(5, 3), &grid);
        while s.next_step().is_some() {}
        assert_eq!(s.distance_at(start), 0);
        assert_eq!(s.distance_at(Point::new(5, 3)), 8);
        assert_eq!(s.distance_at(Point::new(2, 1)), 3);
        assert_eq!(s.distance_at(Point::new(9, 9)), UNREACHABLE);
    }

    #[test]
    fn walled_in_start_has_no_path() {
        let (grid, start, end) = walled_in_start();
        let mut s = dijkstra(start, end, &grid);
        let steps: Vec<Step> = s.by_ref().collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].current, Some(start));
        assert_eq!(steps[1].path, Some(Vec::new()));
        assert!(s.is_finished());
        assert_eq!(s.next_step(), None);
    }

    #[test]
    fn stops_when_end_is_reached() {
        let grid = open_grid(10, 1);
        let steps: Vec<Step> = dijkstra(Point::new(0, 0), Point::new(3, 0), &grid).collect();
        // Four visits (0..=3) plus the final step; cells beyond the end are
        // never finalized.
        assert_eq!(steps.len(), 5);
        let last = steps.last().unwrap();
        assert!(!last.visited.contains(&Point::new(4, 0)));
    }
}
