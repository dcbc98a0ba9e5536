use crate::engine::step::Mutation;
use crate::strategy::{Strategy, greater};

/// Pending unit of work on the explicit recursion stack (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { low: usize, high: usize },
    Merge { low: usize, mid: usize, high: usize },
}

/// Merge in progress over `[out, high]`
///
/// The unmerged left run is `[out, right - 1]` and the unmerged right run is
/// `[right, high]`; both stay contiguous because each right-head write rotates
/// the left run one slot to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveMerge {
    out: usize,
    right: usize,
    high: usize,
}

/// Top-down merge sort emitting one step per merged element
///
/// Halves split at the floor midpoint and are sorted left first, matching the
/// recursive formulation. On equal heads the left element is written first,
/// which keeps the sort stable.
#[derive(Debug, Clone)]
pub struct MergeSort {
    stack: Vec<Task>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    /// Plan a sort over a buffer of `len` elements
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len > 1 {
            stack.push(Task::Sort {
                low: 0,
                high: len - 1,
            });
        }
        Self {
            stack,
            active: None,
        }
    }

    // Unfold sort tasks until a merge is ready to start
    fn next_merge(&mut self) -> Option<ActiveMerge> {
        while let Some(task) = self.stack.pop() {
            match task {
                Task::Sort { low, high } => {
                    if low >= high {
                        continue;
                    }
                    let mid = low + (high - low) / 2;
                    self.stack.push(Task::Merge { low, mid, high });
                    self.stack.push(Task::Sort {
                        low: mid + 1,
                        high,
                    });
                    self.stack.push(Task::Sort { low, high: mid });
                }
                Task::Merge { low, mid, high } => {
                    return Some(ActiveMerge {
                        out: low,
                        right: mid + 1,
                        high,
                    });
                }
            }
        }
        None
    }
}

impl<T: PartialOrd> Strategy<T> for MergeSort {
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation> {
        let mut merge = match self.active.take() {
            Some(merge) => merge,
            None => self.next_merge()?,
        };

        let index = merge.out;
        let left_exhausted = merge.out >= merge.right;
        let right_exhausted = merge.right > merge.high;

        let from = if !left_exhausted && (right_exhausted || !greater(buf, merge.out, merge.right))
        {
            merge.out
        } else {
            if let Some(window) = buf.get_mut(merge.out..=merge.right) {
                window.rotate_right(1);
            }
            let from = merge.right;
            merge.right += 1;
            from
        };
        merge.out += 1;

        if merge.out <= merge.high {
            self.active = Some(merge);
        }

        Some(Mutation::MergeWrite { index, from })
    }

    // Any non-trivial sort task still unfolds into a merge
    fn is_finished(&self, _buf: &[T]) -> bool {
        self.active.is_none()
            && self.stack.iter().all(|task| match *task {
                Task::Sort { low, high } => low >= high,
                Task::Merge { .. } => false,
            })
    }
}
