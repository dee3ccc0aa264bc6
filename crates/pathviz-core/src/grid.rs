//! Occupancy grid: every cell is either [`Tile::Open`] or [`Tile::Wall`].
//!
//! A [`Grid`] owns its buffer and is cheap to clone, which is how search
//! engines take an immutable snapshot of the grid they run over.

use std::fmt;

#[cfg(feature = "serde")]
use crate::geom::BoundsRepr;
use crate::geom::{Bounds, Point};

/// Occupancy of a single cell (`0` = open, `1` = wall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// The opposite tile.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Wall,
            Self::Wall => Self::Open,
        }
    }

    /// ASCII representation used by [`Grid::parse`] and `Display`.
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }
}

impl From<u8> for Tile {
    fn from(v: u8) -> Self {
        if v == 0 { Self::Open } else { Self::Wall }
    }
}

impl From<Tile> for u8 {
    fn from(t: Tile) -> Self {
        match t {
            Tile::Open => 0,
            Tile::Wall => 1,
        }
    }
}

/// A `width × height` grid of [`Tile`] values, addressed by [`Point`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    bounds: Bounds,
    tiles: Vec<Tile>,
}

/// Serialized form of [`Grid`], checked against the tile count when read
/// back.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    bounds: BoundsRepr,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        let BoundsRepr { width, height } = r.bounds;
        if width < 0 || height < 0 {
            return Err(GridError::NegativeSize { width, height });
        }
        let bounds = Bounds::new(width, height);
        if r.tiles.len() != bounds.len() {
            return Err(GridError::TileCount {
                expected: bounds.len(),
                found: r.tiles.len(),
            });
        }
        Ok(Grid {
            bounds,
            tiles: r.tiles,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        GridRepr {
            bounds: g.bounds.into(),
            tiles: g.tiles,
        }
    }
}

impl Grid {
    /// Create a new all-open grid. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::Open)
    }

    /// Create a new grid with every cell set to `tile`.
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            bounds,
            tiles: vec![tile; bounds.len()],
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The cells `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Total number of cells (`rows × cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Point at a flat row-major index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Flip the tile at a point, returning the new value.
    pub fn toggle(&mut self, p: Point) -> Option<Tile> {
        let i = self.index(p)?;
        self.tiles[i] = self.tiles[i].toggled();
        Some(self.tiles[i])
    }

    /// Set every cell to `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Fraction of cells that are walls (0.0 for an empty grid).
    pub fn wall_ratio(&self) -> f64 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        self.count(Tile::Wall) as f64 / self.tiles.len() as f64
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (self.point(i), t))
    }

    /// In-bounds, open, 4-directional neighbours of `p` (up, right, down,
    /// left), appended to `buf`. The caller clears `buf`.
    pub fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    /// Parse an ASCII layout: `#` is a wall, `.` is open, `S` and `E` are
    /// open cells recorded as start and end.
    ///
    /// Surrounding whitespace of the whole layout and of each line is
    /// ignored, so layouts can be indented in source code.
    pub fn parse(s: &str) -> Result<ParsedGrid, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = Grid::new(width as i32, lines.len() as i32);
        let mut start = None;
        let mut end = None;

        for (y, line) in lines.iter().enumerate() {
            let n = line.chars().count();
            if n != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found: n,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    'S' => {
                        start = Some(p);
                        Tile::Open
                    }
                    'E' => {
                        end = Some(p);
                        Tile::Open
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                };
                grid.set(p, tile);
            }
        }

        Ok(ParsedGrid { grid, start, end })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds.width().max(1) as usize;
        for (y, row) in self.tiles.chunks(w).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
        }
        Ok(())
    }
}

/// Result of [`Grid::parse`]: the grid plus the `S`/`E` markers, if any.
#[derive(Debug, Clone)]
pub struct ParsedGrid {
    pub grid: Grid,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

/// Errors that can occur when parsing an ASCII grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The layout contains no cells.
    Empty,
    /// A line is not as wide as the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.`, `S` or `E`.
    InvalidChar { ch: char, pos: Point },
    /// A serialized grid with a negative dimension.
    NegativeSize { width: i32, height: i32 },
    /// A serialized grid whose tile list does not cover `width × height`.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty layout"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NegativeSize { width, height } => {
                write!(f, "grid: negative size {width}x{height}")
            }
            Self::TileCount { expected, found } => {
                write!(f, "grid: {found} tiles for {expected} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 1), Tile::Wall);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn rejects_inconsistent_payloads() {
        let err = serde_json::from_str::<Grid>(r#"{"bounds":{"width":3,"height":3},"tiles":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("0 tiles for 9 cells"), "{err}");

        let err = serde_json::from_str::<Grid>(r#"{"bounds":{"width":-1,"height":2},"tiles":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("negative size"), "{err}");

        let ok: Grid =
            serde_json::from_str(r#"{"bounds":{"width":2,"height":1},"tiles":["Open","Wall"]}"#)
                .unwrap();
        assert_eq!(ok.at(Point::new(1, 0)), Some(Tile::Wall));
    }

    #[test]
    fn negative_bounds_are_clamped() {
        let b: Bounds = serde_json::from_str(r#"{"width":-4,"height":3}"#).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(serde_json::to_string(&Bounds::new(2, 3)).unwrap(), r#"{"width":2,"height":3}"#);
    }
}
