use crate::algorithm::Algorithm;
use crate::predecessor::PredecessorMap;
use crate::step::Step;

/// A resumable, non-restartable grid search producing one [`Step`] per call.
///
/// The sequence is finite and fused: once the final step (the one carrying
/// the path) has been returned, every further call returns `None`.
pub trait StepSearch: Iterator<Item = Step> {
    /// Which algorithm drives this search.
    fn algorithm(&self) -> Algorithm;

    /// Whether the final step has already been produced.
    fn is_finished(&self) -> bool;

    /// Number of steps produced so far, including the final one.
    fn steps_emitted(&self) -> usize;

    /// Predecessor links recorded so far.
    fn predecessors(&self) -> &PredecessorMap;

    /// Produce the next step, or `None` once the search is finished.
    fn next_step(&mut self) -> Option<Step> {
        self.next()
    }
}
