use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};
use rand::Rng;

/// The available maze generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    WindingPath,
    BiasedRandom,
    #[default]
    Perfect,
}

impl MazeKind {
    /// Every strategy, in menu order.
    pub const ALL: [MazeKind; 3] = [Self::WindingPath, Self::BiasedRandom, Self::Perfect];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WindingPath => "winding path",
            Self::BiasedRandom => "biased random",
            Self::Perfect => "perfect maze",
        }
    }

    /// The following strategy in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MazeKind {
    type Err = ParseMazeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winding" | "winding path" | "winding-path" => Ok(Self::WindingPath),
            "biased" | "biased random" | "biased-random" => Ok(Self::BiasedRandom),
            "perfect" | "perfect maze" | "perfect-maze" => Ok(Self::Perfect),
            _ => Err(ParseMazeKindError(s.to_string())),
        }
    }
}

/// Returned when a string names no known [`MazeKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMazeKindError(pub String);

impl fmt::Display for ParseMazeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maze kind “{}”", self.0)
    }
}

impl std::error::Error for ParseMazeKindError {}

/// Maze generator owning its random source.
///
/// Seed the generator (e.g. with `StdRng::seed_from_u64`) for reproducible
/// mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run the strategy `kind` over `grid`.
    pub fn generate(&mut self, kind: MazeKind, grid: &mut Grid, start: Point, end: Point) {
        match kind {
            MazeKind::WindingPath => self.winding_path(grid, start, end),
            MazeKind::BiasedRandom => self.biased_random(grid, start, end),
            MazeKind::Perfect => self.perfect(grid, start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Tile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn kind_cycles() {
        assert_eq!(MazeKind::Perfect.next(), MazeKind::WindingPath);
        assert_eq!(MazeKind::WindingPath.next(), MazeKind::BiasedRandom);
        assert_eq!(MazeKind::default(), MazeKind::Perfect);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("Perfect".parse(), Ok(MazeKind::Perfect));
        assert_eq!("biased-random".parse(), Ok(MazeKind::BiasedRandom));
        assert_eq!(" winding ".parse(), Ok(MazeKind::WindingPath));
        for kind in MazeKind::ALL {
            assert_eq!(kind.label().parse(), Ok(kind));
        }
        assert_eq!(
            "prim".parse::<MazeKind>(),
            Err(ParseMazeKindError("prim".into()))
        );
    }

    #[test]
    fn every_kind_leaves_endpoints_open() {
        let (start, end) = (Point::new(0, 0), Point::new(19, 11));
        for kind in MazeKind::ALL {
            for seed in 0..5 {
                let mut grid = Grid::new(20, 12);
                let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
                mg.generate(kind, &mut grid, start, end);
                assert_eq!(grid.at(start), Some(Tile::Open), "{kind}");
                assert_eq!(grid.at(end), Some(Tile::Open), "{kind}");
                assert!(grid.count(Tile::Wall) > 0, "{kind}");
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let (start, end) = (Point::new(2, 3), Point::new(14, 9));
        for kind in MazeKind::ALL {
            let mut a = Grid::new(16, 11);
            let mut b = Grid::new(16, 11);
            MazeGen::new(StdRng::seed_from_u64(99)).generate(kind, &mut a, start, end);
            MazeGen::new(StdRng::seed_from_u64(99)).generate(kind, &mut b, start, end);
            assert_eq!(a, b, "{kind}");
        }
    }

    #[test]
    fn empty_grid_is_left_alone() {
        for kind in MazeKind::ALL {
            let mut grid = Grid::new(0, 0);
            MazeGen::new(StdRng::seed_from_u64(3)).generate(
                kind,
                &mut grid,
                Point::ZERO,
                Point::ZERO,
            );
            assert!(grid.is_empty());
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in MazeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: MazeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
        assert_eq!(serde_json::to_string(&MazeKind::Perfect).unwrap(), "\"Perfect\"");
    }
}
