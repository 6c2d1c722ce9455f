// Algorithm kinds and their per-run cursor state

use super::algorithms::{
    BubbleState, InsertionState, QuickSortStrategy, QuickState, SelectionState,
};
use super::outcome::StepOutcome;
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms the engine can step through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::BubbleSort,
        AlgorithmKind::SelectionSort,
        AlgorithmKind::InsertionSort,
        AlgorithmKind::QuickSort,
    ];

    /// Human-readable name used in status messages
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "Bubble Sort",
            AlgorithmKind::SelectionSort => "Selection Sort",
            AlgorithmKind::InsertionSort => "Insertion Sort",
            AlgorithmKind::QuickSort => "Quick Sort",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" => Ok(AlgorithmKind::BubbleSort),
            "selection" | "selection-sort" => Ok(AlgorithmKind::SelectionSort),
            "insertion" | "insertion-sort" => Ok(AlgorithmKind::InsertionSort),
            "quick" | "quick-sort" | "quicksort" => Ok(AlgorithmKind::QuickSort),
            other => Err(format!(
                "unknown algorithm '{}' (expected bubble, selection, insertion or quick)",
                other
            )),
        }
    }
}

/// Cursor state of one run, one variant per algorithm kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepState {
    Bubble(BubbleState),
    Selection(SelectionState),
    Insertion(InsertionState),
    Quick(QuickState),
}

impl StepState {
    /// Fresh cursors for a run of `kind` over `len` elements
    pub fn initial(kind: AlgorithmKind, strategy: QuickSortStrategy, len: usize) -> Self {
        match kind {
            AlgorithmKind::BubbleSort => StepState::Bubble(BubbleState::default()),
            AlgorithmKind::SelectionSort => StepState::Selection(SelectionState::default()),
            AlgorithmKind::InsertionSort => StepState::Insertion(InsertionState::default()),
            AlgorithmKind::QuickSort => StepState::Quick(QuickState::new(strategy, len)),
        }
    }

    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        match self {
            StepState::Bubble(state) => state.step(data),
            StepState::Selection(state) => state.step(data),
            StepState::Insertion(state) => state.step(data),
            StepState::Quick(state) => state.step(data),
        }
    }
}
