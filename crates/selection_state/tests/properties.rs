use proptest::prelude::*;
use selection_state::{MultiSelectState, OptionSet, RangeBounds, RangeState, SelectOption};

const VALUES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn option_set() -> OptionSet {
    OptionSet::new(
        VALUES
            .iter()
            .map(|value| SelectOption::new(*value, value.to_uppercase()))
            .collect(),
    )
    .expect("options")
}

const STEPS: [f64; 8] = [0.1, 0.25, 0.4, 0.5, 1.0, 2.5, 5.0, 10.0];
const SEPARATIONS: [f64; 9] = [0.0, 0.1, 0.25, 0.4, 0.7, 1.0, 1.5, 3.0, 7.5];

#[derive(Debug, Clone)]
enum RangeOp {
    Set(usize, f64),
    Step(usize, i32),
    Replace(Vec<f64>),
}

fn bounds_and_thumbs() -> impl Strategy<Value = (RangeBounds, Vec<f64>)> {
    (
        proptest::sample::select(STEPS.to_vec()),
        proptest::sample::select(SEPARATIONS.to_vec()),
        1usize..=4,
    )
        .prop_map(|(step, separation, count)| {
            let bounds = RangeBounds::new(0.0, 200.0, step, separation).expect("bounds");
            let spacing = separation.max(step);
            let thumbs = (0..count).map(|index| index as f64 * spacing).collect();
            (bounds, thumbs)
        })
}

fn range_op() -> impl Strategy<Value = RangeOp> {
    prop_oneof![
        (0usize..4, -50.0f64..250.0).prop_map(|(index, raw)| RangeOp::Set(index, raw)),
        (0usize..4, -12i32..12).prop_map(|(index, steps)| RangeOp::Step(index, steps)),
        proptest::collection::vec(-10.0f64..210.0, 0..=4).prop_map(|mut values| {
            values.sort_by(f64::total_cmp);
            RangeOp::Replace(values)
        }),
    ]
}

fn assert_range_invariants(range: &RangeState) {
    let bounds = range.bounds();
    let thumbs = range.value();
    assert!(
        RangeState::new(*bounds, thumbs.to_vec()).is_ok(),
        "reachable state {thumbs:?} fails validation"
    );
    assert!(thumbs.iter().all(|value| *value >= bounds.min() && *value <= bounds.max()));
    for pair in thumbs.windows(2) {
        assert!(
            pair[1] - pair[0] >= bounds.min_separation() - 1e-9,
            "thumbs {pair:?} closer than {}",
            bounds.min_separation()
        );
    }
}

proptest! {
    #[test]
    fn toggles_never_duplicate_and_keep_survivor_order(
        picks in proptest::collection::vec(0usize..VALUES.len(), 0..40)
    ) {
        let options = option_set();
        let mut state = MultiSelectState::default();
        for pick in picks {
            let before: Vec<String> = state.values().to_vec();
            let value = VALUES[pick];
            state.toggle(&options, value);

            let mut seen = std::collections::HashSet::new();
            prop_assert!(state.values().iter().all(|value| seen.insert(value.clone())));

            let survivors: Vec<&String> = before.iter().filter(|item| *item != value).collect();
            let after: Vec<&String> = state.values().iter().filter(|item| *item != value).collect();
            prop_assert_eq!(survivors, after);
        }
    }

    #[test]
    fn set_all_round_trips_unique_values(
        picks in proptest::sample::subsequence(VALUES.to_vec(), 0..=VALUES.len()).prop_shuffle()
    ) {
        let options = option_set();
        let mut state = MultiSelectState::default();
        state.set_all(&options, picks.clone());
        prop_assert_eq!(state.values().to_vec(), picks);
    }

    #[test]
    fn display_items_arithmetic(
        count in 0usize..=VALUES.len(),
        max_displayed in 0usize..10
    ) {
        let options = option_set();
        let state = MultiSelectState::new(&options, VALUES.iter().take(count).copied());
        let summary = state.display_items(max_displayed);
        prop_assert_eq!(summary.shown.len(), state.count().min(max_displayed));
        prop_assert_eq!(summary.overflow_count, state.count().saturating_sub(max_displayed));
    }

    #[test]
    fn set_thumb_is_idempotent(
        (bounds, thumbs) in bounds_and_thumbs(),
        index in 0usize..4,
        raw in -50.0f64..250.0
    ) {
        let mut range = RangeState::new(bounds, thumbs).expect("range");
        range.set_thumb(index, raw);
        let once = range.clone();
        range.set_thumb(index, raw);
        prop_assert_eq!(range, once);
    }

    #[test]
    fn separation_holds_after_any_operation_sequence(
        (bounds, thumbs) in bounds_and_thumbs(),
        ops in proptest::collection::vec(range_op(), 0..30)
    ) {
        let mut range = RangeState::new(bounds, thumbs).expect("range");
        for op in ops {
            match op {
                RangeOp::Set(index, raw) => range.set_thumb(index, raw),
                RangeOp::Step(index, steps) => range.step_thumb(index, steps),
                RangeOp::Replace(values) => range.set_all(values),
            };
            assert_range_invariants(&range);
        }
    }
}
