// Integration tests for the playback controller and step engine

use sortty::config::VisualizerConfig;
use sortty::engine::{AlgorithmKind, QuickSortStrategy};
use sortty::playback::{DelayTier, PlaybackController, RunSummary, TickOutcome};
use std::time::Duration;

fn controller_with(values: &[i32], quick_sort: QuickSortStrategy) -> PlaybackController {
    let config = VisualizerConfig {
        quick_sort,
        delay: DelayTier::Fast,
        ..VisualizerConfig::default()
    };
    let mut controller = PlaybackController::new(&config).expect("Controller creation failed");
    controller.load(values.to_vec()).expect("Loading data failed");
    controller
}

/// Tick with a full delay each frame until the run finishes
fn run_to_completion(controller: &mut PlaybackController) -> RunSummary {
    let frame = controller.delay().duration();
    for _ in 0..1_000_000 {
        if let TickOutcome::Finished(summary) = controller.tick(frame).expect("Tick failed") {
            return summary;
        }
    }
    panic!("run did not finish");
}

#[test]
fn test_bubble_sort_example() {
    let mut controller = controller_with(&[40, 10, 30, 20, 50], QuickSortStrategy::default());

    controller.start(AlgorithmKind::BubbleSort).unwrap();
    assert_eq!(controller.status(), "Bubble Sort started...");
    let summary = run_to_completion(&mut controller);

    assert_eq!(controller.working(), &[10, 20, 30, 40, 50]);
    assert_eq!(summary.comparisons, 10);
    assert!(summary.swaps <= 10);
    assert_eq!(summary.swaps, 4);
    assert!(controller
        .status()
        .ends_with("| 10 comparisons | 4 swaps"));

    controller.reset().unwrap();
    assert_eq!(controller.working(), &[40, 10, 30, 20, 50]);
}

#[test]
fn test_selection_sort_on_equal_values() {
    let mut controller = controller_with(&[5, 5, 5], QuickSortStrategy::default());

    controller.start(AlgorithmKind::SelectionSort).unwrap();
    let summary = run_to_completion(&mut controller);

    assert_eq!(controller.working(), &[5, 5, 5]);
    assert_eq!(summary.swaps, 0);
    assert_eq!(summary.comparisons, 5);
    assert_eq!(controller.metrics().swaps, 0);
}

#[test]
fn test_every_algorithm_sorts() {
    let values = [88, 12, 57, 12, 193, 10, 45, 200, 67, 31, 99, 12];
    let mut expected = values.to_vec();
    expected.sort_unstable();

    for strategy in [QuickSortStrategy::BubbleSteps, QuickSortStrategy::Partition] {
        for kind in AlgorithmKind::ALL {
            let mut controller = controller_with(&values, strategy);
            controller.start(kind).unwrap();
            run_to_completion(&mut controller);
            assert_eq!(controller.working(), expected.as_slice(), "{} ({})", kind, strategy);
            assert!(!controller.is_running());
            assert_eq!(controller.algorithm_label(), "Completed");
        }
    }
}

#[test]
fn test_insertion_sort_counts_shifts_as_both() {
    let mut controller = controller_with(&[4, 3, 2, 1], QuickSortStrategy::default());
    controller.start(AlgorithmKind::InsertionSort).unwrap();
    let summary = run_to_completion(&mut controller);

    assert_eq!(summary.comparisons, 6);
    assert_eq!(summary.swaps, 6);
}

#[test]
fn test_pause_does_not_lose_progress() {
    let values = [9, 4, 7, 1, 8, 2];
    let frame = DelayTier::Fast.duration();

    let mut straight = controller_with(&values, QuickSortStrategy::default());
    straight.start(AlgorithmKind::InsertionSort).unwrap();
    for _ in 0..7 {
        straight.tick(frame).unwrap();
    }

    let mut paused = controller_with(&values, QuickSortStrategy::default());
    paused.start(AlgorithmKind::InsertionSort).unwrap();
    for step in 0..7 {
        paused.tick(frame).unwrap();
        if step % 2 == 0 {
            paused.pause().unwrap();
            // ticks while paused never step
            assert_eq!(paused.tick(frame).unwrap(), TickOutcome::Idle);
            assert_eq!(paused.tick(Duration::from_secs(5)).unwrap(), TickOutcome::Idle);
            paused.resume().unwrap();
        }
    }

    assert_eq!(paused.working(), straight.working());
    assert_eq!(paused.metrics().comparisons, straight.metrics().comparisons);
    assert_eq!(paused.metrics().swaps, straight.metrics().swaps);
    assert_eq!(paused.steps(), straight.steps());
}

#[test]
fn test_reset_after_partial_run() {
    let values = [30, 20, 10];
    let mut controller = controller_with(&values, QuickSortStrategy::default());
    controller.start(AlgorithmKind::SelectionSort).unwrap();
    for _ in 0..5 {
        controller.tick(DelayTier::Fast.duration()).unwrap();
    }

    // reset is refused mid-run, allowed once stopped
    assert!(controller.reset().is_err());
    controller.stop();
    controller.reset().unwrap();
    assert_eq!(controller.working(), &values);
    assert_eq!(controller.status(), "Reset to original data");
}

#[test]
fn test_slow_delay_spaces_out_steps() {
    let mut controller = controller_with(&[2, 1, 3], QuickSortStrategy::default());
    controller.set_delay(DelayTier::Slow);
    controller.start(AlgorithmKind::BubbleSort).unwrap();

    let frame = Duration::from_millis(16);
    let mut stepped = 0;
    for _ in 0..13 {
        if matches!(controller.tick(frame).unwrap(), TickOutcome::Stepped(_)) {
            stepped += 1;
        }
    }
    // immediate first step, then one per 7 frames (112ms >= 100ms)
    assert_eq!(stepped, 2);
}

#[test]
fn test_generate_zero_is_rejected() {
    let mut controller = controller_with(&[1, 2, 3], QuickSortStrategy::default());
    assert!(controller.generate(0).is_err());
    assert_eq!(controller.working(), &[1, 2, 3]);
}

#[test]
fn test_restart_after_completion() {
    let mut controller = controller_with(&[3, 1, 2], QuickSortStrategy::Partition);
    controller.start(AlgorithmKind::QuickSort).unwrap();
    run_to_completion(&mut controller);

    controller.reset().unwrap();
    controller.start(AlgorithmKind::QuickSort).unwrap();
    assert_eq!(controller.metrics().comparisons, 0);
    assert_eq!(controller.metrics().duration, None);
    run_to_completion(&mut controller);
    assert_eq!(controller.working(), &[1, 2, 3]);
}
