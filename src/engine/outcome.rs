// Per-step results reported by the engine

use crate::metrics::MetricsDelta;

/// Indices the renderer should draw as active.
///
/// `primary` is the element being placed or compared, `secondary` the element
/// it is compared against. Both are always valid indices into the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightSet {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl HighlightSet {
    pub const NONE: HighlightSet = HighlightSet {
        primary: None,
        secondary: None,
    };

    pub fn pair(primary: usize, secondary: usize) -> Self {
        HighlightSet {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    pub fn single(primary: usize) -> Self {
        HighlightSet {
            primary: Some(primary),
            secondary: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Iterate the highlighted indices (at most two)
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.primary.into_iter().chain(self.secondary)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.primary == Some(index) || self.secondary == Some(index)
    }
}

/// Result of a single call to [`StepEngine::step`](super::step_engine::StepEngine::step)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub highlight: HighlightSet,
    pub delta: MetricsDelta,
    pub finished: bool,
}

impl StepOutcome {
    pub(crate) fn progress(highlight: HighlightSet, delta: MetricsDelta) -> Self {
        StepOutcome {
            highlight,
            delta,
            finished: false,
        }
    }

    /// Terminal outcome: nothing changed, nothing to highlight
    pub(crate) fn done() -> Self {
        StepOutcome {
            highlight: HighlightSet::NONE,
            delta: MetricsDelta::NONE,
            finished: true,
        }
    }

    pub(crate) fn finished_if(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }
}
