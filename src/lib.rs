//! # Introduction
//!
//! sortty animates classic sorting algorithms in the terminal, one primitive
//! operation per frame. Each algorithm is a resumable state machine: a call to
//! [`engine::StepEngine::step`] performs a single comparison, swap, shift or
//! index advance and returns, leaving all progress in explicit cursor state.
//! Pausing, resuming and pacing therefore cost nothing.
//!
//! ## Pipeline
//!
//! ```text
//! frame loop → PlaybackController::tick → StepEngine::step → MetricsRecorder
//!                                               ↓
//!                                         HighlightSet → TUI
//! ```
//!
//! 1. [`dataset`] — working array plus the snapshot used by reset.
//! 2. [`engine`] — [`engine::AlgorithmKind`], per-run [`engine::StepState`]
//!    and the `Idle → Running → Done` [`engine::StepEngine`].
//! 3. [`metrics`] — comparison/swap counters and run timing.
//! 4. [`playback`] — run lifecycle, pause/resume and delay pacing.
//! 5. [`config`] and [`cli`] — defaults and command-line options.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, Selection, Insertion and Quick Sort. Quick Sort replays Bubble Sort
//! steps by default; [`engine::QuickSortStrategy::Partition`] switches it to a
//! partition-based quicksort driven by an explicit range stack.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod metrics;
pub mod playback;
pub mod ui;
