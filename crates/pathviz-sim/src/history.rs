//! Bounded history of completed runs.

use std::collections::VecDeque;
use std::time::Duration;

use pathviz_search::Algorithm;

/// Summary of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub algorithm: Algorithm,
    /// Steps produced, including the final one.
    pub steps: usize,
    /// Cells finalized by the search.
    pub visited: usize,
    /// Path length in cells (0 when no path was found).
    pub path_len: usize,
    /// Wall-clock time from run start to the final step.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub elapsed: Duration,
}

/// The most recent completed runs, oldest dropped first.
#[derive(Debug, Clone)]
pub struct RunHistory {
    records: VecDeque<RunRecord>,
    capacity: usize,
}

impl RunHistory {
    /// Create a history keeping at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest if full.
    pub fn push(&mut self, record: RunRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Records from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter().rev()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&RunRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
