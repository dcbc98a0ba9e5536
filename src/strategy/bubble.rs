use crate::engine::step::Mutation;
use crate::strategy::{Strategy, greater};

/// Bubble sort emitting one step per adjacent swap
///
/// Pass `pass` compares `buf[j]` against `buf[j + 1]` for
/// `j < len - pass - 1`; only a strictly greater left element swaps.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    pass: usize,
    j: usize,
}

impl BubbleSort {
    /// Start before the first comparison of the first pass
    pub const fn new() -> Self {
        Self { pass: 0, j: 0 }
    }
}

impl<T: PartialOrd> Strategy<T> for BubbleSort {
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation> {
        let len = buf.len();

        while self.pass < len {
            let pass_end = len - self.pass - 1;
            if self.j >= pass_end {
                self.pass += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            self.j += 1;
            if greater(buf, j, j + 1) {
                buf.swap(j, j + 1);
                return Some(Mutation::Swap { a: j, b: j + 1 });
            }
        }

        None
    }

    // The rest of this pass and the whole next pass compare in place; with no
    // inversion among them every later pass is a subset and swaps nothing
    fn is_finished(&self, buf: &[T]) -> bool {
        let len = buf.len();
        if self.pass >= len {
            return true;
        }

        let pass_end = len - self.pass - 1;
        let in_order = |j: usize| !greater(buf, j, j + 1);
        (self.j..pass_end).all(in_order) && (0..pass_end.saturating_sub(1)).all(in_order)
    }
}
