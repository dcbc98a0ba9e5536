use crate::engine::step::Mutation;
use crate::strategy::{Strategy, less};

/// Selection sort emitting one swap per index
///
/// The swap is emitted even when the minimum already sits at the current
/// index, so a run always has exactly `len` steps.
#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    index: usize,
}

impl SelectionSort {
    /// Start at index zero
    pub const fn new() -> Self {
        Self { index: 0 }
    }
}

// First minimum wins: only a strictly smaller element replaces the candidate
fn position_of_minimum<T: PartialOrd>(buf: &[T], start: usize) -> usize {
    (start + 1..buf.len()).fold(start, |min_idx, j| {
        if less(buf, j, min_idx) { j } else { min_idx }
    })
}

impl<T: PartialOrd> Strategy<T> for SelectionSort {
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation> {
        if self.index >= buf.len() {
            return None;
        }

        let index = self.index;
        let min_idx = position_of_minimum(buf, index);
        buf.swap(index, min_idx);
        self.index += 1;

        Some(Mutation::Swap { a: index, b: min_idx })
    }

    fn is_finished(&self, buf: &[T]) -> bool {
        self.index >= buf.len()
    }
}
