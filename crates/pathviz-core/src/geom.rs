//! Cell coordinates ([`Point`]) and grid extents ([`Bounds`]).
//!
//! `x` is the column and `y` is the row, so a `(row, col)` cell is
//! `Point::new(col, row)` (or [`Point::rc`]).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate. X grows right, Y grows down.
///
/// Points order row-major (by `y`, then `x`), which is the order search
/// snapshots list their cells in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point for the cell at `row`, `col`.
    pub const fn rc(row: i32, col: i32) -> Self {
        Self::new(col, row)
    }

    pub const fn row(self) -> i32 {
        self.y
    }

    pub const fn col(self) -> i32 {
        self.x
    }

    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Up, right, down, left: the fixed neighbour order of every search.
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(-1, 0),
        ]
    }

    pub fn is_adjacent_4(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.shift(-rhs.x, -rhs.y)
    }
}

/// The cells `[0, width) × [0, height)` of a grid, with the row-major flat
/// indexing every per-cell table in the workspace uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BoundsRepr", into = "BoundsRepr"))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn height(self) -> i32 {
        self.height
    }

    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Flat index of `p`, or `None` outside the bounds.
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index). `i` must be below [`len`](Self::len).
    pub fn point(self, i: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Every cell, row by row.
    pub fn iter(self) -> Cells {
        Cells {
            bounds: self,
            next: 0,
        }
    }
}

/// Serialized form of [`Bounds`]; sizes are clamped through [`Bounds::new`]
/// on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
pub(crate) struct BoundsRepr {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

#[cfg(feature = "serde")]
impl From<BoundsRepr> for Bounds {
    fn from(r: BoundsRepr) -> Self {
        Bounds::new(r.width, r.height)
    }
}

#[cfg(feature = "serde")]
impl From<Bounds> for BoundsRepr {
    fn from(b: Bounds) -> Self {
        BoundsRepr {
            width: b.width,
            height: b.height,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct Cells {
    bounds: Bounds,
    next: usize,
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_maps_row_to_y() {
        let p = Point::rc(3, 7);
        assert_eq!(p, Point::new(7, 3));
        assert_eq!((p.row(), p.col()), (3, 7));
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn sorts_row_major() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 2), Point::new(1, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1), Point::new(0, 2)]);
    }

    #[test]
    fn neighbour_order() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [Point::new(5, 4), Point::new(6, 5), Point::new(5, 6), Point::new(4, 5)]
        );
        assert!(p.neighbors_4().iter().all(|&q| p.is_adjacent_4(q)));
        assert!(!p.is_adjacent_4(Point::new(6, 6)));
        assert!(!p.is_adjacent_4(p));
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(3, 2);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Point::new(2, 1)));
        assert!(!b.contains(Point::new(3, 0)));
        assert!(!b.contains(Point::new(0, -1)));
        assert_eq!(b.index(Point::new(1, 1)), Some(4));
        assert_eq!(b.index(Point::new(3, 1)), None);
        assert_eq!(b.point(4), Point::new(1, 1));
    }

    #[test]
    fn negative_size_is_empty() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.iter().next(), None);
    }

    #[test]
    fn cells_are_row_major() {
        let b = Bounds::new(3, 2);
        let pts: Vec<Point> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        let mut it = b.iter();
        it.next();
        assert_eq!(it.len(), 5);
        for (i, p) in b.iter().enumerate() {
            assert_eq!(b.index(p), Some(i));
        }
    }
}
