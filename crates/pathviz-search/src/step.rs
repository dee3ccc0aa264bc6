use std::collections::BTreeSet;

use pathviz_core::Point;

/// One snapshot of a search's progress.
///
/// Every `Step` owns copies of the engine's sets; later progress of the
/// engine never changes a step already handed out. `path` is `Some` only on
/// the final step of a run (empty when `end` was unreachable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub visited: BTreeSet<Point>,
    pub frontier: BTreeSet<Point>,
    pub current: Option<Point>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub path: Option<Vec<Point>>,
}

impl Step {
    /// Whether this is the terminal step carrying the path.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path (0 for non-final steps or no path).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}
