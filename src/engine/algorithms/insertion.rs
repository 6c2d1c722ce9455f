// Insertion sort, one shift per step

use crate::engine::outcome::{HighlightSet, StepOutcome};
use crate::metrics::MetricsDelta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionState {
    /// Index of the element being inserted
    pub i: usize,
    /// Value lifted out of slot `i`
    pub key: i32,
    /// Shift cursor; -1 once the scan has passed the front
    pub k: isize,
    /// Set when the next step must lift a new key
    pub needs_key: bool,
}

impl Default for InsertionState {
    fn default() -> Self {
        InsertionState {
            i: 0,
            key: 0,
            k: -1,
            needs_key: true,
        }
    }
}

impl InsertionState {
    pub fn step(&mut self, data: &mut [i32]) -> StepOutcome {
        let n = data.len();
        if self.i >= n {
            return StepOutcome::done();
        }

        if self.needs_key {
            self.key = data[self.i];
            self.k = self.i as isize - 1;
            self.needs_key = false;
        }

        let highlight = HighlightSet {
            primary: Some(self.i),
            secondary: usize::try_from(self.k).ok(),
        };

        match usize::try_from(self.k) {
            Ok(k) if data[k] > self.key => {
                // A shift counts as one comparison and one swap
                data[k + 1] = data[k];
                self.k -= 1;
                StepOutcome::progress(highlight, MetricsDelta::COMPARE_AND_SWAP)
            }
            _ => {
                let slot = (self.k + 1) as usize;
                data[slot] = self.key;
                self.i += 1;
                self.needs_key = true;
                StepOutcome::progress(highlight, MetricsDelta::NONE).finished_if(self.i >= n)
            }
        }
    }
}
