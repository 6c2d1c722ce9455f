// Bubble sort, one adjacent comparison per step

use crate::engine::outcome::{HighlightSet, StepOutcome};
use crate::metrics::MetricsDelta;

/// Cursors for an in-progress bubble sort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleState {
    /// Completed passes; the last `i` elements are in final position
    pub i: usize,
    /// Left element of the pair compared next
    pub j: usize,
}

impl BubbleState {
    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        let n = data.len();
        if self.i >= n {
            return StepOutcome::done();
        }

        // End of a pass is its own step
        if self.j >= n - self.i - 1 {
            self.i += 1;
            self.j = 0;
            return StepOutcome::progress(HighlightSet::NONE, MetricsDelta::NONE)
                .finished_if(self.i >= n);
        }

        let j = self.j;
        let highlight = HighlightSet::pair(j, j + 1);
        let delta = if data[j] > data[j + 1] {
            data.swap(j, j + 1);
            MetricsDelta::COMPARE_AND_SWAP
        } else {
            MetricsDelta::COMPARISON
        };
        self.j += 1;

        StepOutcome::progress(highlight, delta)
    }
}
