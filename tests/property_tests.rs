// Property tests for the step engine

use proptest::prelude::*;
use sortty::engine::{AlgorithmKind, QuickSortStrategy, StepEngine, StepOutcome};

fn kinds() -> impl Strategy<Value = (AlgorithmKind, QuickSortStrategy)> {
    (
        prop::sample::select(AlgorithmKind::ALL.to_vec()),
        prop::sample::select(vec![
            QuickSortStrategy::BubbleSteps,
            QuickSortStrategy::Partition,
        ]),
    )
}

/// Step to completion, checking per-step invariants along the way
fn run_checked(engine: &mut StepEngine, data: &mut [i32]) -> Result<(u64, u64), TestCaseError> {
    let (mut comparisons, mut swaps) = (0u64, 0u64);
    // quadratic algorithms need at most ~n^2 steps plus outer advances
    let limit = 4 * (data.len() + 1) * (data.len() + 1);
    for _ in 0..limit {
        let outcome = engine.step(data).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for index in outcome.highlight.indices() {
            prop_assert!(index < data.len(), "highlight {} out of range", index);
        }
        comparisons += outcome.delta.comparisons;
        swaps += outcome.delta.swaps;
        if outcome.finished {
            return Ok((comparisons, swaps));
        }
    }
    Err(TestCaseError::fail("run did not finish"))
}

proptest! {
    /// Completed runs leave a sorted permutation of the input.
    #[test]
    fn prop_sorts_to_permutation(
        values in prop::collection::vec(10i32..=200, 0..40),
        (kind, strategy) in kinds(),
    ) {
        let mut data = values.clone();
        let mut engine = StepEngine::new(kind, strategy);
        engine.start(data.len()).unwrap();
        run_checked(&mut engine, &mut data)?;

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(data, expected);
    }

    /// Stepping after completion changes nothing.
    #[test]
    fn prop_done_is_idempotent(
        values in prop::collection::vec(-50i32..50, 0..25),
        (kind, strategy) in kinds(),
        extra in 1usize..10,
    ) {
        let mut data = values;
        let mut engine = StepEngine::new(kind, strategy);
        engine.start(data.len()).unwrap();
        run_checked(&mut engine, &mut data)?;

        let sorted = data.clone();
        for _ in 0..extra {
            let outcome = engine.step(&mut data).unwrap();
            prop_assert_eq!(outcome, StepOutcome {
                highlight: Default::default(),
                delta: Default::default(),
                finished: true,
            });
        }
        prop_assert_eq!(data, sorted);
    }

    /// Bubble sort always takes n(n-1)/2 comparisons and never more swaps.
    #[test]
    fn prop_bubble_comparison_count(values in prop::collection::vec(0i32..1000, 1..40)) {
        let n = values.len() as u64;
        let mut data = values;
        let mut engine = StepEngine::new(AlgorithmKind::BubbleSort, QuickSortStrategy::default());
        engine.start(data.len()).unwrap();
        let (comparisons, swaps) = run_checked(&mut engine, &mut data)?;

        prop_assert_eq!(comparisons, n * (n - 1) / 2);
        prop_assert!(swaps <= comparisons);
    }

    /// Splitting a run at any point and continuing gives the same result.
    #[test]
    fn prop_suspension_is_transparent(
        values in prop::collection::vec(0i32..100, 1..30),
        (kind, strategy) in kinds(),
        split in 0usize..200,
    ) {
        let mut straight = values.clone();
        let mut engine = StepEngine::new(kind, strategy);
        engine.start(straight.len()).unwrap();
        let straight_totals = run_checked(&mut engine, &mut straight)?;

        let mut split_data = values;
        let mut first = StepEngine::new(kind, strategy);
        first.start(split_data.len()).unwrap();
        let (mut comparisons, mut swaps) = (0, 0);
        for _ in 0..split {
            let outcome = first.step(&mut split_data).unwrap();
            comparisons += outcome.delta.comparisons;
            swaps += outcome.delta.swaps;
        }
        // hand the suspended engine over as if it had been parked between frames
        let mut resumed = first.clone();
        let (rest_comparisons, rest_swaps) = run_checked(&mut resumed, &mut split_data)?;

        prop_assert_eq!(split_data, straight);
        prop_assert_eq!((comparisons + rest_comparisons, swaps + rest_swaps), straight_totals);
    }
}
