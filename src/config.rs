// Defaults and run configuration for the visualizer

use crate::engine::QuickSortStrategy;
use crate::playback::DelayTier;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Dataset sizes offered by the size controls
pub const DATASET_SIZES: [usize; 4] = [25, 50, 100, 200];

/// Size of the dataset generated at startup
pub const DEFAULT_DATASET_SIZE: usize = 50;

/// Inclusive range random values are drawn from
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i32> = 10..=200;

/// Target frame interval of the UI loop (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub initial_size: usize,
    pub value_range: RangeInclusive<i32>,
    pub delay: DelayTier,
    pub quick_sort: QuickSortStrategy,
    pub frame_interval: Duration,
    /// Seed for the startup dataset; `None` draws a fresh one
    pub seed: Option<u64>,
    /// Explicit startup dataset, overrides `initial_size` and `seed`
    pub data: Option<Vec<i32>>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            initial_size: DEFAULT_DATASET_SIZE,
            value_range: DEFAULT_VALUE_RANGE,
            delay: DelayTier::default(),
            quick_sort: QuickSortStrategy::default(),
            frame_interval: FRAME_INTERVAL,
            seed: None,
            data: None,
        }
    }
}

/// Next entry of [`DATASET_SIZES`] after `current`, wrapping around
pub fn next_size(current: usize) -> usize {
    DATASET_SIZES
        .iter()
        .copied()
        .find(|&size| size > current)
        .unwrap_or(DATASET_SIZES[0])
}

/// Previous entry of [`DATASET_SIZES`] before `current`, wrapping around
pub fn prev_size(current: usize) -> usize {
    DATASET_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .unwrap_or(DATASET_SIZES[DATASET_SIZES.len() - 1])
}
