use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::{debug, trace};
use pathviz_core::{Grid, Point};

use crate::predecessor::{PredecessorMap, reconstruct};
use crate::step::Step;

/// Sentinel cost meaning "not reached yet" in distance tables.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Priority-queue entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Open-set entry ordered by `key`, then by insertion order.
///
/// Stale entries are never removed from the heap; they are skipped when
/// popped because their cell is already visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenNode {
    pub(crate) pos: Point,
    pub(crate) g: i32,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest insertion among equal keys.
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Loop-local state shared by every engine: the grid snapshot, visited and
/// frontier sets, predecessor links and step bookkeeping.
pub(crate) struct SearchState {
    name: &'static str,
    pub(crate) grid: Grid,
    pub(crate) start: Point,
    pub(crate) end: Point,
    visited: BTreeSet<Point>,
    frontier: BTreeSet<Point>,
    pub(crate) prev: PredecessorMap,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    steps: usize,
    finished: bool,
}

impl SearchState {
    pub(crate) fn new(name: &'static str, start: Point, end: Point, grid: &Grid) -> Self {
        let mut frontier = BTreeSet::new();
        frontier.insert(start);
        Self {
            name,
            grid: grid.clone(),
            start,
            end,
            visited: BTreeSet::new(),
            frontier,
            prev: PredecessorMap::for_grid(grid),
            nbuf: Vec::with_capacity(4),
            steps: 0,
            finished: false,
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, p: Point) -> bool {
        self.visited.contains(&p)
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    /// Add `p` to the frontier.
    #[inline]
    pub(crate) fn discover(&mut self, p: Point) {
        self.frontier.insert(p);
    }

    /// Finalize `p` and return the snapshot for it.
    pub(crate) fn visit(&mut self, p: Point) -> Step {
        self.visited.insert(p);
        self.frontier.remove(&p);
        self.steps += 1;
        trace!(
            "{}: visit {p} ({} visited, {} in frontier)",
            self.name,
            self.visited.len(),
            self.frontier.len()
        );
        Step {
            visited: self.visited.clone(),
            frontier: self.frontier.clone(),
            current: Some(p),
            path: None,
        }
    }

    /// Reconstruct the path and return the terminal step.
    pub(crate) fn finish(&mut self) -> Step {
        let path = reconstruct(&self.prev, self.start, self.end);
        self.finished = true;
        self.steps += 1;
        self.frontier.clear();
        debug!(
            "{}: finished {} -> {} after {} steps, {} visited, path length {}",
            self.name,
            self.start,
            self.end,
            self.steps,
            self.visited.len(),
            path.len()
        );
        Step {
            visited: std::mem::take(&mut self.visited),
            frontier: BTreeSet::new(),
            current: None,
            path: Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn node(key: i32, seq: u64) -> OpenNode {
        OpenNode {
            pos: Point::new(seq as i32, 0),
            g: key,
            key,
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_key_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(node(3, 0));
        heap.push(node(1, 1));
        heap.push(node(1, 2));
        heap.push(node(2, 3));
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.seq)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn visit_snapshots_are_independent() {
        let grid = Grid::new(3, 3);
        let mut st = SearchState::new("test", Point::new(0, 0), Point::new(2, 2), &grid);
        let first = st.visit(Point::new(0, 0));
        st.discover(Point::new(1, 0));
        let second = st.visit(Point::new(1, 0));
        assert_eq!(first.visited.len(), 1);
        assert!(first.frontier.is_empty());
        assert_eq!(second.visited.len(), 2);
        assert_eq!(st.steps(), 2);
    }
}
