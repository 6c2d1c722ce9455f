// Resumable step engine

use super::algorithms::QuickSortStrategy;
use super::errors::EngineError;
use super::outcome::StepOutcome;
use super::state::{AlgorithmKind, StepState};
use tracing::trace;

/// Lifecycle of a [`StepEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Not started; `step()` is rejected
    Idle,
    /// Between steps of a run
    Running,
    /// Completion predicate held; `step()` is a no-op
    Done,
}

/// Drives one sorting algorithm one primitive operation at a time.
///
/// The engine never owns the data: every [`step`](StepEngine::step) borrows the
/// working array, performs a single comparison, swap, shift or index advance on
/// it and returns. All progress lives in the [`StepState`] cursors, so a run
/// can be suspended between any two calls for as long as the caller likes.
#[derive(Debug, Clone)]
pub struct StepEngine {
    kind: AlgorithmKind,
    quick_sort: QuickSortStrategy,
    phase: EnginePhase,
    state: StepState,
    /// Dataset length the cursors were created for
    len: usize,
    steps: u64,
}

impl StepEngine {
    pub fn new(kind: AlgorithmKind, quick_sort: QuickSortStrategy) -> Self {
        StepEngine {
            kind,
            quick_sort,
            phase: EnginePhase::Idle,
            state: StepState::initial(kind, quick_sort, 0),
            len: 0,
            steps: 0,
        }
    }

    /// Begin a run over a dataset of `len` elements
    pub fn start(&mut self, len: usize) -> Result<(), EngineError> {
        if self.phase == EnginePhase::Running {
            return Err(EngineError::invalid_operation(format!(
                "{} is already running",
                self.kind
            )));
        }

        self.state = StepState::initial(self.kind, self.quick_sort, len);
        self.len = len;
        self.steps = 0;
        self.phase = EnginePhase::Running;
        Ok(())
    }

    /// Perform exactly one primitive operation on `data`.
    ///
    /// Once the run is complete further calls leave `data` untouched and keep
    /// reporting `finished`.
    pub fn step(&mut self, data: &mut [i32]) -> Result<StepOutcome, EngineError> {
        match self.phase {
            EnginePhase::Idle => {
                return Err(EngineError::invalid_operation(
                    "step() called before start()",
                ))
            }
            EnginePhase::Done => return Ok(StepOutcome::done()),
            EnginePhase::Running => {}
        }

        if data.len() != self.len {
            return Err(EngineError::invalid_operation(format!(
                "dataset length changed from {} to {} during a run",
                self.len,
                data.len()
            )));
        }

        if self.len == 0 {
            self.phase = EnginePhase::Done;
            return Ok(StepOutcome::done());
        }

        let outcome = self.state.step(data);
        self.steps += 1;
        if outcome.finished {
            self.phase = EnginePhase::Done;
        }

        trace!(
            algorithm = %self.kind,
            step = self.steps,
            primary = ?outcome.highlight.primary,
            secondary = ?outcome.highlight.secondary,
            finished = outcome.finished,
            "step"
        );
        Ok(outcome)
    }

    /// Return to `Idle` bound to `kind`, dropping all cursors
    pub fn reset_to(&mut self, kind: AlgorithmKind) {
        self.kind = kind;
        self.phase = EnginePhase::Idle;
        self.state = StepState::initial(kind, self.quick_sort, 0);
        self.len = 0;
        self.steps = 0;
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn quick_sort_strategy(&self) -> QuickSortStrategy {
        self.quick_sort
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == EnginePhase::Done
    }

    /// Number of steps executed in the current run
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> &StepState {
        &self.state
    }
}
