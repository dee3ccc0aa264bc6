use std::collections::BinaryHeap;
use std::iter::FusedIterator;

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::predecessor::PredecessorMap;
use crate::state::{OpenNode, SearchState, UNREACHABLE};
use crate::step::Step;
use crate::traits::StepSearch;

/// Start a stepwise A* search from `start` to `end` over `grid`.
pub fn astar(start: Point, end: Point, grid: &Grid) -> AstarSearch {
    AstarSearch::new(start, end, grid)
}

/// Stepwise A* search with a Manhattan-distance heuristic.
///
/// The open set is ordered by `f = g + h`; `g` is the unit-cost distance
/// from the start.
pub struct AstarSearch {
    state: SearchState,
    g: Vec<i32>,
    open: BinaryHeap<OpenNode>,
    seq: u64,
}

impl AstarSearch {
    /// Initialise the search. No work happens until the first step is
    /// requested.
    pub fn new(start: Point, end: Point, grid: &Grid) -> Self {
        let mut g = vec![UNREACHABLE; grid.len()];
        if let Some(si) = grid.index(start) {
            g[si] = 0;
        }
        let mut search = Self {
            state: SearchState::new("astar", start, end, grid),
            g,
            open: BinaryHeap::new(),
            seq: 0,
        };
        search.push(start, 0);
        search
    }

    /// Best known cost from the start to `p`, or [`UNREACHABLE`].
    pub fn g_at(&self, p: Point) -> i32 {
        match self.state.grid.index(p) {
            Some(i) => self.g[i],
            None => UNREACHABLE,
        }
    }

    fn push(&mut self, pos: Point, g: i32) {
        self.open.push(OpenNode {
            pos,
            g,
            key: g + manhattan(pos, self.state.end),
            seq: self.seq,
        });
        self.seq += 1;
    }
}

impl Iterator for AstarSearch {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.state.is_finished() {
            return None;
        }

        while let Some(current) = self.open.pop() {
            let cp = current.pos;
            // Skip stale entries.
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

            let tentative_g = current.g + 1;
            for &np in nbuf.iter() {
                let Some(ni) = self.state.grid.index(np) else {
                    continue;
                };
                if tentative_g >= self.g[ni] {
                    continue;
                }
                self.g[ni] = tentative_g;
                self.state.prev.set(np, cp);
                self.state.discover(np);
                self.push(np, tentative_g);
            }

            self.state.nbuf = nbuf;
            return Some(step);
        }

        Some(self.state.finish())
    }
}

impl FusedIterator for AstarSearch {}

impl StepSearch for AstarSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Astar
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
