//! Run metrics: comparison and swap counters plus run timing
//!
//! A [`MetricsRecorder`] lives for the whole session and is re-armed by
//! [`MetricsRecorder::start`] at the beginning of every run. Counters only grow
//! between `start()` and `finish()`; after `finish()` the recorded values are
//! frozen until the next `start()`.

use std::time::{Duration, Instant};

/// Counter increments produced by a single engine step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsDelta {
    pub comparisons: u64,
    pub swaps: u64,
}

impl MetricsDelta {
    pub const NONE: MetricsDelta = MetricsDelta {
        comparisons: 0,
        swaps: 0,
    };

    pub const COMPARISON: MetricsDelta = MetricsDelta {
        comparisons: 1,
        swaps: 0,
    };

    pub const SWAP: MetricsDelta = MetricsDelta {
        comparisons: 0,
        swaps: 1,
    };

    /// A comparison that resulted in a swap (or a shift counted as both)
    pub const COMPARE_AND_SWAP: MetricsDelta = MetricsDelta {
        comparisons: 1,
        swaps: 1,
    };

    pub fn is_empty(&self) -> bool {
        self.comparisons == 0 && self.swaps == 0
    }
}

/// Point-in-time copy of the recorder state, handed to the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetrics {
    pub comparisons: u64,
    pub swaps: u64,
    pub started_at: Option<Instant>,
    /// Set once the run has finished
    pub duration: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct MetricsRecorder {
    comparisons: u64,
    swaps: u64,
    started_at: Option<Instant>,
    duration: Option<Duration>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the counters and stamp the start of a new run
    pub fn start(&mut self, ts: Instant) {
        self.comparisons = 0;
        self.swaps = 0;
        self.started_at = Some(ts);
        self.duration = None;
    }

    pub fn record_comparison(&mut self) {
        if self.duration.is_none() {
            self.comparisons += 1;
        }
    }

    pub fn record_swap(&mut self) {
        if self.duration.is_none() {
            self.swaps += 1;
        }
    }

    /// Forward the counters of one engine step
    pub fn apply(&mut self, delta: MetricsDelta) {
        if self.duration.is_none() {
            self.comparisons += delta.comparisons;
            self.swaps += delta.swaps;
        }
    }

    /// Freeze the run and return its duration.
    ///
    /// A second call returns the duration recorded by the first one.
    /// Precondition: `start()` has been called; otherwise `Duration::ZERO`
    /// is returned and nothing is recorded.
    pub fn finish(&mut self, ts: Instant) -> Duration {
        if let Some(duration) = self.duration {
            return duration;
        }
        let Some(started_at) = self.started_at else {
            return Duration::ZERO;
        };
        let duration = ts.saturating_duration_since(started_at);
        self.duration = Some(duration);
        duration
    }

    pub fn is_finished(&self) -> bool {
        self.duration.is_some()
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn snapshot(&self) -> RunMetrics {
        RunMetrics {
            comparisons: self.comparisons,
            swaps: self.swaps,
            started_at: self.started_at,
            duration: self.duration,
        }
    }
}
