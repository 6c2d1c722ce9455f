//! Playback controller: run lifecycle and frame pacing
//!
//! The controller is the only entry point the host loop needs. It owns the
//! dataset, the step engine of the current run and the metrics recorder, and
//! turns frame ticks into engine steps:
//!
//! ```text
//! host frame ─▶ tick(dt) ─▶ delay elapsed? ─▶ StepEngine::step ─▶ MetricsRecorder
//!                                                   │
//!                                                   └─▶ HighlightSet ─▶ renderer
//! ```
//!
//! Everything runs on the caller's thread. Waiting is implemented by declining
//! to step on a tick, so pausing is just "don't step": the engine cursors stay
//! exactly where they were.

use crate::config::VisualizerConfig;
use crate::dataset::DatasetManager;
use crate::engine::{AlgorithmKind, EngineError, HighlightSet, QuickSortStrategy, StepEngine};
use crate::metrics::{MetricsRecorder, RunMetrics};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Inter-step delay presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelayTier {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl DelayTier {
    pub fn duration(self) -> Duration {
        match self {
            DelayTier::Slow => Duration::from_millis(100),
            DelayTier::Medium => Duration::from_millis(50),
            DelayTier::Fast => Duration::from_millis(10),
        }
    }

    /// Next tier in the Slow → Medium → Fast cycle
    pub fn next(self) -> Self {
        match self {
            DelayTier::Slow => DelayTier::Medium,
            DelayTier::Medium => DelayTier::Fast,
            DelayTier::Fast => DelayTier::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DelayTier::Slow => "Slow",
            DelayTier::Medium => "Med",
            DelayTier::Fast => "Fast",
        }
    }
}

impl FromStr for DelayTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(DelayTier::Slow),
            "medium" | "med" => Ok(DelayTier::Medium),
            "fast" => Ok(DelayTier::Fast),
            other => Err(format!(
                "unknown speed '{}' (expected slow, medium or fast)",
                other
            )),
        }
    }
}

/// Totals of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: AlgorithmKind,
    pub duration: Duration,
    pub comparisons: u64,
    pub swaps: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} completed in {}ms | {} comparisons | {} swaps",
            self.algorithm,
            self.duration.as_millis(),
            self.comparisons,
            self.swaps
        )
    }
}

/// What a call to [`PlaybackController::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run in progress (or paused)
    Idle,
    /// Running, but the delay has not elapsed yet
    Waiting,
    /// One step was executed
    Stepped(HighlightSet),
    /// The step completed the run
    Finished(RunSummary),
}

/// Owns the run lifecycle and paces engine steps against frame time
#[derive(Debug)]
pub struct PlaybackController {
    dataset: DatasetManager,
    /// Engine of the current (running or paused) run
    engine: Option<StepEngine>,
    metrics: MetricsRecorder,
    quick_sort: QuickSortStrategy,
    delay: DelayTier,
    running: bool,
    /// Time accumulated since the last executed step
    since_last_step: Duration,
    highlight: HighlightSet,
    algorithm_label: String,
    status: String,
    last_summary: Option<RunSummary>,
}

impl PlaybackController {
    /// Create a controller with an empty dataset
    pub fn new(config: &VisualizerConfig) -> Result<Self, EngineError> {
        Ok(PlaybackController {
            dataset: DatasetManager::new(config.value_range.clone())?,
            engine: None,
            metrics: MetricsRecorder::new(),
            quick_sort: config.quick_sort,
            delay: config.delay,
            running: false,
            since_last_step: Duration::ZERO,
            highlight: HighlightSet::NONE,
            algorithm_label: String::from("Ready"),
            status: String::from("Select an algorithm to begin"),
            last_summary: None,
        })
    }

    /// Replace the dataset with `size` random values
    pub fn generate(&mut self, size: usize) -> Result<(), EngineError> {
        self.ensure_stopped("generate a dataset")?;
        self.dataset.generate(size)?;
        self.discard_run();
        self.status = format!("Generated {} random elements", size);
        Ok(())
    }

    /// Replace the dataset with values drawn from a caller-supplied generator
    pub fn generate_with<R: rand::Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.ensure_stopped("generate a dataset")?;
        self.dataset.generate_with(size, rng)?;
        self.discard_run();
        self.status = format!("Generated {} random elements", size);
        Ok(())
    }

    /// Replace the dataset with explicit values
    pub fn load(&mut self, values: Vec<i32>) -> Result<(), EngineError> {
        self.ensure_stopped("load a dataset")?;
        let len = values.len();
        self.dataset.load(values)?;
        self.discard_run();
        self.status = format!("Loaded {} elements", len);
        Ok(())
    }

    /// Restore the data captured at the last generate/load
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.ensure_stopped("reset")?;
        self.dataset.reset();
        self.discard_run();
        self.status = String::from("Reset to original data");
        info!("dataset reset");
        Ok(())
    }

    /// Start a run of `kind` over the current dataset, timestamped now
    pub fn start(&mut self, kind: AlgorithmKind) -> Result<(), EngineError> {
        self.start_at(kind, Instant::now())
    }

    pub fn start_at(&mut self, kind: AlgorithmKind, now: Instant) -> Result<(), EngineError> {
        self.ensure_stopped("start a new run")?;

        let mut engine = StepEngine::new(kind, self.quick_sort);
        engine.start(self.dataset.len())?;
        self.engine = Some(engine);
        self.metrics.start(now);
        self.running = true;
        // First tick of a run steps immediately
        self.since_last_step = self.delay.duration();
        self.highlight = HighlightSet::NONE;
        self.algorithm_label = kind.name().to_string();
        self.status = format!("{} started...", kind);
        info!(algorithm = %kind, size = self.dataset.len(), "run started");
        Ok(())
    }

    /// Advance the current run by at most one step
    pub fn tick(&mut self, elapsed: Duration) -> Result<TickOutcome, EngineError> {
        self.tick_at(elapsed, Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit wall-clock time for run timing
    pub fn tick_at(&mut self, elapsed: Duration, now: Instant) -> Result<TickOutcome, EngineError> {
        if !self.running {
            return Ok(TickOutcome::Idle);
        }
        let Some(engine) = self.engine.as_mut() else {
            self.running = false;
            return Ok(TickOutcome::Idle);
        };

        self.since_last_step = self.since_last_step.saturating_add(elapsed);
        if self.since_last_step < self.delay.duration() {
            return Ok(TickOutcome::Waiting);
        }
        self.since_last_step = Duration::ZERO;

        let outcome = engine.step(self.dataset.working_mut())?;
        self.metrics.apply(outcome.delta);
        self.highlight = outcome.highlight;

        if !outcome.finished {
            return Ok(TickOutcome::Stepped(outcome.highlight));
        }

        let kind = engine.kind();
        let summary = RunSummary {
            algorithm: kind,
            duration: self.metrics.finish(now),
            comparisons: self.metrics.comparisons(),
            swaps: self.metrics.swaps(),
        };
        self.running = false;
        self.engine = None;
        self.highlight = HighlightSet::NONE;
        self.algorithm_label = String::from("Completed");
        self.status = summary.to_string();
        self.last_summary = Some(summary);
        info!(
            algorithm = %kind,
            duration_ms = summary.duration.as_millis() as u64,
            comparisons = summary.comparisons,
            swaps = summary.swaps,
            "run completed"
        );
        Ok(TickOutcome::Finished(summary))
    }

    /// End the current run without touching the dataset
    pub fn stop(&mut self) {
        let had_run = self.engine.is_some();
        self.running = false;
        self.engine = None;
        self.highlight = HighlightSet::NONE;
        if had_run {
            self.algorithm_label = String::from("Ready");
            self.status = String::from("Stopped");
            info!("run stopped");
        }
    }

    /// Suspend stepping; the engine keeps its cursors
    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.engine.is_none() {
            debug!("pause refused: no run in progress");
            return Err(EngineError::invalid_operation("no run in progress to pause"));
        }
        if self.running {
            self.running = false;
            self.status = String::from("Paused");
            debug!("paused");
        }
        Ok(())
    }

    /// Continue a paused run exactly where it stopped
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.engine.is_none() {
            debug!("resume refused: no paused run");
            return Err(EngineError::invalid_operation("no paused run to resume"));
        }
        if !self.running {
            self.running = true;
            self.status = format!("{} resumed...", self.algorithm_label);
            debug!("resumed");
        }
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<(), EngineError> {
        if self.running {
            self.pause()
        } else {
            self.resume()
        }
    }

    pub fn set_delay(&mut self, delay: DelayTier) {
        self.delay = delay;
        debug!(delay_ms = delay.duration().as_millis() as u64, "delay changed");
    }

    pub fn set_quick_sort_strategy(&mut self, strategy: QuickSortStrategy) {
        self.quick_sort = strategy;
    }

    fn ensure_stopped(&self, action: &str) -> Result<(), EngineError> {
        if self.running {
            debug!(action, "refused while running");
            return Err(EngineError::invalid_operation(format!(
                "cannot {} while a sort is running",
                action
            )));
        }
        Ok(())
    }

    /// Drop a paused run whose cursors no longer match the data
    fn discard_run(&mut self) {
        if self.engine.take().is_some() {
            self.algorithm_label = String::from("Ready");
        }
        self.highlight = HighlightSet::NONE;
    }

    // ========== Getter methods for UI ==========

    pub fn working(&self) -> &[i32] {
        self.dataset.working()
    }

    pub fn original(&self) -> &[i32] {
        self.dataset.original()
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn max_value(&self) -> i32 {
        self.dataset.max_value()
    }

    pub fn highlight(&self) -> HighlightSet {
        self.highlight
    }

    pub fn metrics(&self) -> RunMetrics {
        self.metrics.snapshot()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// "Ready", the running algorithm's name, or "Completed"
    pub fn algorithm_label(&self) -> &str {
        &self.algorithm_label
    }

    pub fn algorithm(&self) -> Option<AlgorithmKind> {
        self.engine.as_ref().map(StepEngine::kind)
    }

    /// Steps executed by the current run, `None` when there is no run
    pub fn steps(&self) -> Option<u64> {
        self.engine.as_ref().map(StepEngine::steps)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A run exists but is not currently stepping
    pub fn is_paused(&self) -> bool {
        !self.running && self.engine.is_some()
    }

    pub fn delay(&self) -> DelayTier {
        self.delay
    }

    pub fn quick_sort_strategy(&self) -> QuickSortStrategy {
        self.quick_sort
    }

    pub fn last_summary(&self) -> Option<&RunSummary> {
        self.last_summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(values: Vec<i32>) -> PlaybackController {
        let mut controller = PlaybackController::new(&VisualizerConfig::default()).unwrap();
        controller.load(values).unwrap();
        controller
    }

    #[test]
    fn test_delay_tiers() {
        assert_eq!(DelayTier::Slow.duration(), Duration::from_millis(100));
        assert_eq!(DelayTier::Medium.duration(), Duration::from_millis(50));
        assert_eq!(DelayTier::Fast.duration(), Duration::from_millis(10));
        assert_eq!(DelayTier::Fast.next(), DelayTier::Slow);
        assert_eq!("med".parse(), Ok(DelayTier::Medium));
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut controller = controller(vec![3, 2, 1]);
        controller.set_delay(DelayTier::Medium);
        controller.start(AlgorithmKind::BubbleSort).unwrap();

        // first tick of a run steps straight away
        let first = controller.tick(Duration::ZERO).unwrap();
        assert_eq!(first, TickOutcome::Stepped(HighlightSet::pair(0, 1)));

        let ms = Duration::from_millis;
        assert_eq!(controller.tick(ms(20)).unwrap(), TickOutcome::Waiting);
        assert_eq!(controller.tick(ms(20)).unwrap(), TickOutcome::Waiting);
        assert!(matches!(
            controller.tick(ms(10)).unwrap(),
            TickOutcome::Stepped(_)
        ));
        assert_eq!(controller.metrics().comparisons, 2);
    }

    #[test]
    fn test_tick_without_run_is_idle() {
        let mut controller = controller(vec![1, 2]);
        assert_eq!(
            controller.tick(Duration::from_secs(1)).unwrap(),
            TickOutcome::Idle
        );
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut controller = controller(vec![2, 1]);
        controller.start(AlgorithmKind::BubbleSort).unwrap();
        let err = controller.start(AlgorithmKind::QuickSort).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOperation { .. }));
        assert_eq!(controller.algorithm(), Some(AlgorithmKind::BubbleSort));
    }

    #[test]
    fn test_generate_and_reset_refused_while_running() {
        let mut controller = controller(vec![2, 1]);
        controller.start(AlgorithmKind::SelectionSort).unwrap();
        assert!(controller.generate(10).is_err());
        assert!(controller.reset().is_err());
        assert_eq!(controller.working(), &[2, 1]);
    }

    #[test]
    fn test_completion_sets_summary_status() {
        let mut controller = controller(vec![2, 1]);
        let t0 = Instant::now();
        controller.start_at(AlgorithmKind::BubbleSort, t0).unwrap();

        let mut outcome = TickOutcome::Idle;
        for _ in 0..10 {
            outcome = controller
                .tick_at(Duration::from_millis(50), t0 + Duration::from_millis(42))
                .unwrap();
            if matches!(outcome, TickOutcome::Finished(_)) {
                break;
            }
        }

        let TickOutcome::Finished(summary) = outcome else {
            panic!("run did not finish: {:?}", outcome);
        };
        assert_eq!(summary.comparisons, 1);
        assert_eq!(summary.swaps, 1);
        assert_eq!(
            controller.status(),
            "Bubble Sort completed in 42ms | 1 comparisons | 1 swaps"
        );
        assert_eq!(controller.algorithm_label(), "Completed");
        assert!(!controller.is_running());
        assert!(controller.highlight().is_empty());
        assert_eq!(controller.metrics().duration, Some(Duration::from_millis(42)));
    }

    #[test]
    fn test_stop_keeps_dataset() {
        let mut controller = controller(vec![3, 1, 2]);
        controller.start(AlgorithmKind::BubbleSort).unwrap();
        controller.tick(Duration::ZERO).unwrap();
        controller.stop();

        assert!(!controller.is_running());
        assert!(!controller.is_paused());
        assert_eq!(controller.working(), &[1, 3, 2]);
        assert_eq!(controller.status(), "Stopped");
        assert!(controller.resume().is_err());
    }

    #[test]
    fn test_pause_without_run_is_rejected() {
        let mut controller = controller(vec![1]);
        assert!(controller.pause().is_err());
        assert!(controller.toggle_pause().is_err());
    }

    #[test]
    fn test_paused_run_is_discarded_by_generate() {
        let mut controller = controller(vec![5, 4, 3, 2, 1]);
        controller.start(AlgorithmKind::InsertionSort).unwrap();
        controller.tick(Duration::ZERO).unwrap();
        controller.pause().unwrap();
        assert!(controller.is_paused());

        controller.generate(3).unwrap();
        assert!(!controller.is_paused());
        assert_eq!(controller.algorithm(), None);
        assert_eq!(controller.dataset_len(), 3);
    }
}
