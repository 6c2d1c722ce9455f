//! Resumable sorting step engine
//!
//! This module provides the core stepping logic:
//! - [`step_engine`]: [`StepEngine`], the `Idle → Running → Done` state machine
//! - [`state`]: [`AlgorithmKind`] and the tagged per-run [`StepState`]
//! - [`algorithms`]: cursor structs and step functions for each algorithm
//! - [`outcome`]: [`StepOutcome`] and [`HighlightSet`] returned by each step
//! - [`errors`]: [`EngineError`]
//!
//! # Step Granularity
//!
//! One call to [`StepEngine::step`] performs exactly one primitive operation:
//!
//! | Algorithm | Primitive                                          |
//! |-----------|----------------------------------------------------|
//! | Bubble    | compare an adjacent pair (swap if out of order)    |
//! | Selection | compare against the running minimum                |
//! | Insertion | shift one element right, or drop the key in place  |
//! | Quick     | bubble step, or one partition comparison           |
//!
//! Moving an outer cursor (end of a pass, end of a scan) is a step of its own.

pub mod algorithms;
pub mod errors;
pub mod outcome;
pub mod state;
pub mod step_engine;

pub use algorithms::QuickSortStrategy;
pub use errors::EngineError;
pub use outcome::{HighlightSet, StepOutcome};
pub use state::{AlgorithmKind, StepState};
pub use step_engine::{EnginePhase, StepEngine};
