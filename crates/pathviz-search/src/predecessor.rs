use pathviz_core::{Bounds, Grid, Point};

/// For every cell of a grid, the cell it was reached from (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    bounds: Bounds,
    prev: Vec<Option<Point>>,
}

impl PredecessorMap {
    /// An empty map for a `width × height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            bounds,
            prev: vec![None; bounds.len()],
        }
    }

    /// An empty map with the dimensions of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Number of cells covered by the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    /// Whether the map covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Predecessor of `p`, or `None` if undiscovered or out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Point> {
        self.bounds.index(p).and_then(|i| self.prev[i])
    }

    /// Record `from` as the predecessor of `p`. Ignored out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, from: Point) {
        if let Some(i) = self.bounds.index(p) {
            self.prev[i] = Some(from);
        }
    }
}

/// Walk `prev` backward from `end` and return the `start..=end` path.
///
/// Returns an empty vector when the walk does not end exactly at `start`
/// (unreached `end` or broken chain). The walk is capped at the number of
/// cells in the map, so cyclic input terminates too.
pub fn reconstruct(prev: &PredecessorMap, start: Point, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = end;
    for _ in 0..=prev.len() {
        path.push(cur);
        if cur == start {
            path.reverse();
            return path;
        }
        match prev.get(cur) {
            Some(p) => cur = p,
            None => return Vec::new(),
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_straight_chain() {
        let mut prev = PredecessorMap::new(4, 1);
        prev.set(Point::new(1, 0), Point::new(0, 0));
        prev.set(Point::new(2, 0), Point::new(1, 0));
        prev.set(Point::new(3, 0), Point::new(2, 0));
        let path = reconstruct(&prev, Point::new(0, 0), Point::new(3, 0));
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn reconstruct_start_equals_end() {
        let prev = PredecessorMap::new(3, 3);
        let p = Point::new(1, 1);
        assert_eq!(reconstruct(&prev, p, p), vec![p]);
    }

    #[test]
    fn reconstruct_undiscovered_end_is_empty() {
        let mut prev = PredecessorMap::new(3, 3);
        prev.set(Point::new(1, 0), Point::new(0, 0));
        assert!(reconstruct(&prev, Point::new(0, 0), Point::new(2, 2)).is_empty());
    }

    #[test]
    fn reconstruct_broken_chain_is_empty() {
        // (2,0) -> (1,0) -> nothing; never reaches (0,0).
        let mut prev = PredecessorMap::new(3, 1);
        prev.set(Point::new(2, 0), Point::new(1, 0));
        assert!(reconstruct(&prev, Point::new(0, 0), Point::new(2, 0)).is_empty());
    }

    #[test]
    fn reconstruct_cycle_terminates() {
        let mut prev = PredecessorMap::new(2, 2);
        prev.set(Point::new(1, 1), Point::new(1, 0));
        prev.set(Point::new(1, 0), Point::new(1, 1));
        assert!(reconstruct(&prev, Point::new(0, 0), Point::new(1, 1)).is_empty());
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut prev = PredecessorMap::new(2, 2);
        prev.set(Point::new(5, 5), Point::new(0, 0));
        assert_eq!(prev.get(Point::new(5, 5)), None);
        assert_eq!(prev.len(), 4);
    }
}
