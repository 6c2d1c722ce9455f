//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the dataset as a bar chart with highlighted indices
//! - [`controls`]: sidebar listing commands and their keys
//! - [`stats`]: algorithm name, status message and live counters
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a `render_*` function that draws from borrowed state
//! and keeps nothing between frames.

pub mod bars;
pub mod controls;
pub mod stats;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, ControlsRenderData, ALGORITHM_KEYS};
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_status_bar, PlaybackIndicator};
