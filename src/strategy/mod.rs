//! Interchangeable sort strategies, each a resumable state machine over an owned buffer
//!
//! A strategy never holds the data itself. Every call to [`Strategy::advance`]
//! applies at most one mutation to the buffer it is handed and reports what it
//! did, so a caller can stop between any two mutations.

/// Adjacent-swap bubble sort
pub mod bubble;
/// Shift-and-write insertion sort
pub mod insertion;
/// Top-down merge sort with in-place rotation writes
pub mod merge;
/// Lomuto quick sort
pub mod quick;
/// Minimum-swap selection sort
pub mod selection;

use crate::engine::algorithm::Algorithm;
use crate::engine::step::Mutation;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// One sorting algorithm decomposed into single-mutation steps
pub trait Strategy<T> {
    /// Apply the next mutation to `buf`
    ///
    /// Returns `None` once the buffer is sorted. The buffer must be the same
    /// one, unmodified by anyone else, across successive calls.
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation>;

    /// Whether the next [`Strategy::advance`] on `buf` would return `None`
    ///
    /// Reads state only, so a run can report completion together with its
    /// final step.
    fn is_finished(&self, buf: &[T]) -> bool;
}

/// Build the strategy for `algorithm`, sized for a buffer of `len` elements
pub fn for_algorithm<T: PartialOrd>(algorithm: Algorithm, len: usize) -> Box<dyn Strategy<T>> {
    match algorithm {
        Algorithm::Bubble => Box::new(BubbleSort::new()),
        Algorithm::Selection => Box::new(SelectionSort::new()),
        Algorithm::Insertion => Box::new(InsertionSort::new()),
        Algorithm::Merge => Box::new(MergeSort::new(len)),
        Algorithm::Quick => Box::new(QuickSort::new(len)),
    }
}

/// `buf[a] > buf[b]`, false when either index is out of range
pub(crate) fn greater<T: PartialOrd>(buf: &[T], a: usize, b: usize) -> bool {
    matches!((buf.get(a), buf.get(b)), (Some(x), Some(y)) if x > y)
}

/// `buf[a] < buf[b]`, false when either index is out of range
pub(crate) fn less<T: PartialOrd>(buf: &[T], a: usize, b: usize) -> bool {
    greater(buf, b, a)
}
