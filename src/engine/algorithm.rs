//! Algorithm selector and the human-readable description attached to each choice

use crate::io::error::{StepsortError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Comparison sort driving a run
///
/// Fixed for the lifetime of a run; a different choice needs a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Adjacent swaps of out-of-order neighbours
    Bubble,
    /// Swap each index with the minimum of the remaining suffix
    Selection,
    /// Shift greater elements right, then write the key
    Insertion,
    /// Top-down merge of floor-midpoint halves
    Merge,
    /// Lomuto partitioning around the last element
    Quick,
}

impl Algorithm {
    /// Every selector, in menu order
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    /// Lowercase identifier accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Static text shown alongside a running sort
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble Sort: Repeatedly steps through the list, compares adjacent items and swaps them if they are in the wrong order."
            }
            Self::Selection => {
                "Selection Sort: Finds the minimum element and puts it at the beginning, repeating for each index."
            }
            Self::Insertion => {
                "Insertion Sort: Builds the sorted array one item at a time by comparing and inserting elements."
            }
            Self::Merge => {
                "Merge Sort: Divides the array into halves, sorts them recursively, and merges the sorted halves."
            }
            Self::Quick => {
                "Quick Sort: Selects a pivot and partitions the array around the pivot, recursively sorting the subarrays."
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = StepsortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                invalid_parameter(
                    "algorithm",
                    &wanted,
                    &"expected one of bubble, selection, insertion, merge, quick",
                )
            })
    }
}
