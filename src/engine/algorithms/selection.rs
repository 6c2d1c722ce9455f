// Selection sort, one scan comparison per step

use crate::engine::outcome::{HighlightSet, StepOutcome};
use crate::metrics::MetricsDelta;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Slot being filled with the minimum of `i..n`
    pub i: usize,
    /// Scan cursor, starts at `i`
    pub j: usize,
    /// Index of the smallest value seen in the current scan
    pub min_idx: usize,
}

impl SelectionState {
    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        let n = data.len();
        if n == 0 || self.i >= n - 1 {
            return StepOutcome::done();
        }

        if self.j == self.i {
            self.min_idx = self.i;
        }

        if self.j >= n {
            let (i, min_idx) = (self.i, self.min_idx);
            let delta = if min_idx != i {
                data.swap(i, min_idx);
                MetricsDelta::SWAP
            } else {
                MetricsDelta::NONE
            };
            self.i += 1;
            self.j = self.i;
            return StepOutcome::progress(HighlightSet::pair(i, min_idx), delta)
                .finished_if(self.i >= n - 1);
        }

        let highlight = HighlightSet::pair(self.min_idx, self.j);
        // Strict comparison: ties keep the earlier minimum
        if data[self.j] < data[self.min_idx] {
            self.min_idx = self.j;
        }
        self.j += 1;

        StepOutcome::progress(highlight, MetricsDelta::COMPARISON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(data: &mut [i32]) -> (u64, u64) {
        let mut state = SelectionState::default();
        let (mut comparisons, mut swaps) = (0, 0);
        loop {
            let outcome = state.step(data);
            comparisons += outcome.delta.comparisons;
            swaps += outcome.delta.swaps;
            if outcome.finished {
                return (comparisons, swaps);
            }
        }
    }

    #[test]
    fn test_equal_values_never_swap() {
        let mut data = [5, 5, 5];
        let (comparisons, swaps) = run(&mut data);

        assert_eq!(data, [5, 5, 5]);
        assert_eq!(swaps, 0);
        // each pass scans i..n, including the slot itself
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn test_scan_tracks_minimum() {
        let mut data = [3, 1, 2];
        let mut state = SelectionState::default();

        let first = state.step(&mut data);
        assert_eq!(first.highlight, HighlightSet::pair(0, 0));
        let second = state.step(&mut data);
        assert_eq!(second.highlight, HighlightSet::pair(0, 1));
        assert_eq!(state.min_idx, 1);
        let third = state.step(&mut data);
        assert_eq!(third.highlight, HighlightSet::pair(1, 2));

        // end of scan swaps the minimum into place
        let swap = state.step(&mut data);
        assert_eq!(swap.delta, MetricsDelta::SWAP);
        assert_eq!(swap.highlight, HighlightSet::pair(0, 1));
        assert_eq!(data, [1, 3, 2]);
        assert_eq!((state.i, state.j), (1, 1));
    }

    #[test]
    fn test_sorts_and_counts() {
        let mut data = [64, 25, 12, 22, 11];
        let (comparisons, swaps) = run(&mut data);

        assert_eq!(data, [11, 12, 22, 25, 64]);
        assert_eq!(comparisons, 5 + 4 + 3 + 2);
        assert_eq!(swaps, 3);
    }

    #[test]
    fn test_single_element_is_already_done() {
        let mut data = [9];
        let mut state = SelectionState::default();
        assert!(state.step(&mut data).finished);
    }
}
