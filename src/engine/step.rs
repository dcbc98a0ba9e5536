//! Step events emitted by a run and the lifecycle states a run moves through

/// Single atomic change applied to the working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// Two positions exchanged (`a == b` is an in-place swap)
    Swap {
        /// First swapped index
        a: usize,
        /// Second swapped index
        b: usize,
    },
    /// A greater element moved one slot right, the key moving into `from`
    Shift {
        /// Index the shifted element left
        from: usize,
        /// Index the shifted element now occupies
        to: usize,
    },
    /// The insertion key written to its final slot
    Overwrite {
        /// Index written
        index: usize,
    },
    /// The next merged element written at `index`, taken from `from`
    MergeWrite {
        /// Output index of the merge
        index: usize,
        /// Index the written element came from
        from: usize,
    },
}

impl Mutation {
    /// Indices touched by this mutation, for highlighting
    pub fn indices(&self) -> Vec<usize> {
        let (first, second) = match *self {
            Self::Swap { a, b } => (a, b),
            Self::Shift { from, to } => (from, to),
            Self::Overwrite { index } => (index, index),
            Self::MergeWrite { index, from } => (index, from),
        };

        if first == second {
            vec![first]
        } else {
            vec![first.min(second), first.max(second)]
        }
    }
}

/// Immutable snapshot of the sequence after one mutation
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvent<T> {
    /// 1-based position of this event within its run
    pub step: usize,
    /// Full copy of the sequence after the mutation
    pub snapshot: Vec<T>,
    /// The mutation that produced this snapshot
    pub mutation: Mutation,
}

impl<T> StepEvent<T> {
    /// Indices worth highlighting when rendering this event
    pub fn highlighted(&self) -> Vec<usize> {
        self.mutation.indices()
    }
}

/// Lifecycle position of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// Created but not yet pulled
    #[default]
    Idle,
    /// At least one pull made and no terminal state reached
    Running,
    /// Stopped by cancellation before the sort finished
    Cancelled,
    /// The final mutation has been emitted
    Completed,
}

impl RunState {
    /// Whether the run can emit no further events
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}
