use std::iter::FusedIterator;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::predecessor::PredecessorMap;
use crate::state::SearchState;
use crate::step::Step;
use crate::traits::StepSearch;

/// Start a stepwise depth-first search from `start` to `end` over `grid`.
pub fn dfs(start: Point, end: Point, grid: &Grid) -> DfsSearch {
    DfsSearch::new(start, end, grid)
}

/// Stepwise depth-first search.
///
/// Every unvisited open neighbour is pushed, so the most recently seen
/// branch is always explored next; a cell's predecessor is fixed on first
/// discovery. The resulting path is valid but usually not the shortest.
pub struct DfsSearch {
    state: SearchState,
    stack: Vec<Point>,
    discovered: Vec<bool>,
}

impl DfsSearch {
    /// Initialise the search. No work happens until the first step is
    /// requested.
    pub fn new(start: Point, end: Point, grid: &Grid) -> Self {
        let mut discovered = vec![false; grid.len()];
        if let Some(si) = grid.index(start) {
            discovered[si] = true;
        }
        Self {
            state: SearchState::new("dfs", start, end, grid),
            stack: vec![start],
            discovered,
        }
    }
}

impl Iterator for DfsSearch {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.state.is_finished() {
            return None;
        }

        while let Some(cp) = self.stack.pop() {
            if self.state.is_visited(cp) {
                continue;
            }
            let step = self.state.visit(cp);
            if cp == self.state.end {
                self.stack.clear();
                return Some(step);
            }

            let mut nbuf = std::mem::take(&mut self.state.nbuf);
            nbuf.clear();
            self.state.grid.open_neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.state.grid.index(np) else {
                    continue;
                };
                if self.state.is_visited(np) {
                    continue;
                }
                if !self.discovered[ni] {
                    self.discovered[ni] = true;
                    self.state.prev.set(np, cp);
                }
                self.state.discover(np);
                self.stack.push(np);
            }

            self.state.nbuf = nbuf;
            return Some(step);
        }

        Some(self.state.finish())
    }
}

impl FusedIterator for DfsSearch {}

impl StepSearch for DfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
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
