use crate::engine::step::Mutation;
use crate::strategy::{Strategy, greater};

/// Insertion sort emitting one step per shift plus one for the key write
///
/// The key travels left with each shift instead of being held aside, so every
/// snapshot is a permutation of the input. The closing
/// [`Mutation::Overwrite`] marks where the key settled, including when it
/// never moved.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    next_key: usize,
    key_at: Option<usize>,
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertionSort {
    /// Start with the second element as the first key
    pub const fn new() -> Self {
        Self {
            next_key: 1,
            key_at: None,
        }
    }
}

impl<T: PartialOrd> Strategy<T> for InsertionSort {
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation> {
        let key_at = match self.key_at {
            Some(position) => position,
            None => {
                if self.next_key >= buf.len() {
                    return None;
                }
                self.next_key
            }
        };

        // Stops at the first preceding element that is not strictly greater
        if key_at > 0 && greater(buf, key_at - 1, key_at) {
            buf.swap(key_at - 1, key_at);
            self.key_at = Some(key_at - 1);
            return Some(Mutation::Shift {
                from: key_at - 1,
                to: key_at,
            });
        }

        self.key_at = None;
        self.next_key += 1;
        Some(Mutation::Overwrite { index: key_at })
    }

    // A travelling key always has its closing write left
    fn is_finished(&self, buf: &[T]) -> bool {
        self.key_at.is_none() && self.next_key >= buf.len()
    }
}
