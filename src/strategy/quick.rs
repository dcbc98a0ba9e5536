use crate::engine::step::Mutation;
use crate::strategy::{Strategy, less};

/// Lomuto partition in progress over `[low, high]`, pivot at `high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot for an element strictly less than the pivot
    boundary: usize,
    /// Next element to compare against the pivot
    scan: usize,
}

/// Quick sort with the last element of each subrange as pivot
///
/// Every swap of a smaller element toward the boundary is a step, including
/// swaps of an element with itself, and so is the closing pivot swap of each
/// partition. The left subrange is finished before the right one.
#[derive(Debug, Clone)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    /// Plan a sort over a buffer of `len` elements
    pub fn new(len: usize) -> Self {
        let mut ranges = Vec::new();
        if len > 1 {
            ranges.push((0, len - 1));
        }
        Self {
            ranges,
            active: None,
        }
    }

    fn next_partition(&mut self) -> Option<Partition> {
        while let Some((low, high)) = self.ranges.pop() {
            if low < high {
                return Some(Partition {
                    low,
                    high,
                    boundary: low,
                    scan: low,
                });
            }
        }
        None
    }
}

impl<T: PartialOrd> Strategy<T> for QuickSort {
    fn advance(&mut self, buf: &mut [T]) -> Option<Mutation> {
        let mut partition = match self.active.take() {
            Some(partition) => partition,
            None => self.next_partition()?,
        };

        while partition.scan < partition.high {
            let scan = partition.scan;
            partition.scan += 1;
            if less(buf, scan, partition.high) {
                let boundary = partition.boundary;
                buf.swap(boundary, scan);
                partition.boundary += 1;
                self.active = Some(partition);
                return Some(Mutation::Swap {
                    a: boundary,
                    b: scan,
                });
            }
        }

        let pivot = partition.boundary;
        buf.swap(pivot, partition.high);

        // Pushed right first so the left subrange is popped next
        self.ranges.push((pivot + 1, partition.high));
        if pivot > partition.low {
            self.ranges.push((partition.low, pivot - 1));
        }

        Some(Mutation::Swap {
            a: pivot,
            b: partition.high,
        })
    }

    // An open partition always ends with its pivot swap
    fn is_finished(&self, _buf: &[T]) -> bool {
        self.active.is_none() && self.ranges.iter().all(|&(low, high)| low >= high)
    }
}
