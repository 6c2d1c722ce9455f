//! Quick sort stepping
//!
//! Two strategies are available:
//!
//! - [`QuickSortStrategy::BubbleSteps`] replays Bubble Sort steps. This is how
//!   the visualizer's "Quick Sort" has always behaved and remains the default.
//! - [`QuickSortStrategy::Partition`] is a real Lomuto quicksort. Recursion
//!   cannot be suspended between frames, so pending sub-ranges live on an
//!   explicit stack and the machine moves between two phases:
//!
//! ```text
//!                pop range (len >= 2)
//!  SelectingPivot ─────────────────────▶ Partitioning
//!        ▲                                   │
//!        └──── push sub-ranges, pivot placed ┘
//! ```
//!
//! The run is complete once the stack is empty while selecting a pivot.

use super::bubble::BubbleState;
use crate::engine::outcome::{HighlightSet, StepOutcome};
use crate::metrics::MetricsDelta;
use std::fmt;
use std::str::FromStr;

/// How the Quick Sort algorithm kind is stepped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuickSortStrategy {
    /// One Bubble Sort step per call
    #[default]
    BubbleSteps,
    /// Partition-based quicksort with an explicit range stack
    Partition,
}

impl fmt::Display for QuickSortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickSortStrategy::BubbleSteps => write!(f, "bubble"),
            QuickSortStrategy::Partition => write!(f, "partition"),
        }
    }
}

impl FromStr for QuickSortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(QuickSortStrategy::BubbleSteps),
            "partition" => Ok(QuickSortStrategy::Partition),
            other => Err(format!(
                "unknown quicksort strategy '{}' (expected bubble or partition)",
                other
            )),
        }
    }
}

/// Inclusive index range still waiting to be partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub lo: usize,
    pub hi: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionPhase {
    SelectingPivot,
    Partitioning {
        range: Range,
        pivot: i32,
        /// Next slot for an element smaller than the pivot
        store: usize,
        /// Scan cursor
        j: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionState {
    pub stack: Vec<Range>,
    pub phase: PartitionPhase,
}

impl PartitionState {
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len >= 2 {
            stack.push(Range { lo: 0, hi: len - 1 });
        }
        PartitionState {
            stack,
            phase: PartitionPhase::SelectingPivot,
        }
    }

    fn is_complete(&self) -> bool {
        self.stack.is_empty() && self.phase == PartitionPhase::SelectingPivot
    }

    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        match self.phase {
            PartitionPhase::SelectingPivot => {
                let Some(range) = self.stack.pop() else {
                    return StepOutcome::done();
                };
                self.phase = PartitionPhase::Partitioning {
                    range,
                    pivot: data[range.hi],
                    store: range.lo,
                    j: range.lo,
                };
                StepOutcome::progress(HighlightSet::single(range.hi), MetricsDelta::NONE)
            }
            PartitionPhase::Partitioning {
                range,
                pivot,
                store,
                j,
            } if j < range.hi => {
                let highlight = HighlightSet::pair(j, range.hi);
                let mut delta = MetricsDelta::COMPARISON;
                let mut next_store = store;
                if data[j] < pivot {
                    if store != j {
                        data.swap(store, j);
                        delta = MetricsDelta::COMPARE_AND_SWAP;
                    }
                    next_store += 1;
                }
                self.phase = PartitionPhase::Partitioning {
                    range,
                    pivot,
                    store: next_store,
                    j: j + 1,
                };
                StepOutcome::progress(highlight, delta)
            }
            PartitionPhase::Partitioning { range, store, .. } => {
                let delta = if store != range.hi {
                    data.swap(store, range.hi);
                    MetricsDelta::SWAP
                } else {
                    MetricsDelta::NONE
                };

                // Upper half is pushed first so the lower half is sorted first
                if range.hi - store >= 2 {
                    self.stack.push(Range {
                        lo: store + 1,
                        hi: range.hi,
                    });
                }
                if store - range.lo >= 2 {
                    self.stack.push(Range {
                        lo: range.lo,
                        hi: store - 1,
                    });
                }
                self.phase = PartitionPhase::SelectingPivot;

                StepOutcome::progress(HighlightSet::pair(store, range.hi), delta)
                    .finished_if(self.is_complete())
            }
        }
    }
}

/// Cursor state for the Quick Sort algorithm kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickState {
    BubbleSteps(BubbleState),
    Partition(PartitionState),
}

impl QuickState {
    pub fn new(strategy: QuickSortStrategy, len: usize) -> Self {
        match strategy {
            QuickSortStrategy::BubbleSteps => QuickState::BubbleSteps(BubbleState::default()),
            QuickSortStrategy::Partition => QuickState::Partition(PartitionState::new(len)),
        }
    }

    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        match self {
            QuickState::BubbleSteps(state) => state.step(data),
            QuickState::Partition(state) => state.step(data),
        }
    }
}
