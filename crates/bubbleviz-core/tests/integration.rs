//! Integration tests for bubbleviz-core.
//!
//! These tests exercise the whole pipeline over many seeded random arrays:
//! model → timeline → player.

use std::time::Duration;

use bubbleviz_core::{
    BarColor, EventKind, Player, SortingModel, TimelineConfig, build_timeline, comparisons_for,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_arrays(count: usize, seed: u64) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..40);
            (0..len).map(|_| rng.random_range(1..=20)).collect()
        })
        .collect()
}

#[test]
fn sorted_output_is_ordered_permutation() {
    let config = TimelineConfig::default();
    for input in random_arrays(200, 1) {
        let timeline = build_timeline(&input, &config);
        let sorted = timeline.sorted();
        assert!(
            sorted.windows(2).all(|w| w[0] <= w[1]),
            "not sorted: {sorted:?}"
        );
        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected.as_slice());
    }
}

#[test]
fn comparison_count_is_fixed_by_length() {
    let config = TimelineConfig::default();
    for input in random_arrays(200, 2) {
        let timeline = build_timeline(&input, &config);
        let highlights = timeline
            .events()
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Highlight(_)))
            .count();
        let resets = timeline
            .events()
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Reset(_)))
            .count();
        assert_eq!(highlights, comparisons_for(input.len()));
        assert_eq!(resets, highlights);
        assert_eq!(timeline.comparisons(), highlights);
    }
}

#[test]
fn swap_emitted_iff_left_exceeds_right() {
    let config = TimelineConfig::default();
    for input in random_arrays(100, 3) {
        let timeline = build_timeline(&input, &config);
        // Replay the events against a shadow copy of the values.
        let mut shadow = input.clone();
        let events = timeline.events();
        let mut idx = 0;
        while idx < events.len() {
            match events[idx].kind {
                EventKind::Highlight(pair) => {
                    let out_of_order = shadow[pair.left] > shadow[pair.right];
                    let next = events[idx + 1].kind;
                    match next {
                        EventKind::Swap(swap) => {
                            assert!(out_of_order, "swap without inversion at {idx}");
                            assert_eq!(swap, pair);
                            shadow.swap(pair.left, pair.right);
                            assert!(matches!(events[idx + 2].kind, EventKind::Reset(_)));
                            idx += 3;
                        }
                        EventKind::Reset(reset) => {
                            assert!(!out_of_order, "inversion without swap at {idx}");
                            assert_eq!(reset, pair);
                            idx += 2;
                        }
                        other => panic!("unexpected {other:?} after highlight"),
                    }
                }
                EventKind::Complete => {
                    assert_eq!(idx, events.len() - 1, "complete must be last");
                    idx += 1;
                }
                other => panic!("unexpected {other:?} at start of a comparison"),
            }
        }
        assert_eq!(shadow.as_slice(), timeline.sorted());
    }
}

#[test]
fn offsets_strictly_increase_and_complete_is_last() {
    let config = TimelineConfig::from_millis(2, 9);
    for input in random_arrays(100, 4) {
        let timeline = build_timeline(&input, &config);
        let events = timeline.events();
        assert!(events.windows(2).all(|w| w[0].at < w[1].at));
        let last = events.last().expect("timeline always has a complete event");
        assert_eq!(last.kind, EventKind::Complete);
        assert_eq!(last.at, timeline.total());
        let steps = 2 * timeline.comparisons() + timeline.swaps();
        assert_eq!(
            timeline.total(),
            Duration::from_millis(2) * steps as u32 + Duration::from_millis(9)
        );
    }
}

#[test]
fn pair_events_reference_bars_in_their_slots() {
    let config = TimelineConfig::default();
    for input in random_arrays(100, 5) {
        let timeline = build_timeline(&input, &config);
        let mut bar_at: Vec<usize> = (0..input.len()).collect();
        for event in timeline.events() {
            if let Some(pair) = event.kind.pair() {
                assert_eq!(pair.left_bar, bar_at[pair.left]);
                assert_eq!(pair.right_bar, bar_at[pair.right]);
            }
            if let EventKind::Swap(pair) = event.kind {
                bar_at.swap(pair.left, pair.right);
            }
        }
    }
}

#[test]
fn full_playback_matches_sorted_values() {
    let config = TimelineConfig::default();
    for input in random_arrays(100, 6) {
        let timeline = build_timeline(&input, &config);
        let expected = timeline.sorted().to_vec();
        let total = timeline.total();
        let mut player = Player::new(timeline);

        // Advance in uneven frame-sized chunks.
        let mut now = Duration::ZERO;
        while !player.is_finished() {
            now += Duration::from_millis(7);
            player.advance_to(now);
            assert!(now <= total + Duration::from_millis(7));
        }

        assert_eq!(player.slot_values(), expected);
        assert!(player.bars().iter().all(|b| b.color == BarColor::Sorted));
        for (slot, &id) in player.slot_order().iter().enumerate() {
            assert_eq!(player.bars()[id].slot, slot);
            assert_eq!(player.bar_x(id), Some(slot as f64));
        }
    }
}

#[test]
fn model_feeds_sequencer() {
    let mut model = SortingModel::with_seed(50, 11);
    let timeline = build_timeline(model.snapshot(), &TimelineConfig::default());
    assert_eq!(timeline.comparisons(), 1225);
    assert_eq!(timeline.initial(), model.snapshot());

    assert!(model.replace_with_sorted(timeline.into_sorted()));
    let again = build_timeline(model.snapshot(), &TimelineConfig::default());
    assert_eq!(again.swaps(), 0);
    assert_eq!(again.comparisons(), 1225);
}

#[test]
fn regenerate_twice_gives_valid_arrays() {
    let mut model = SortingModel::new(50);
    model.regenerate();
    let a = model.snapshot().to_vec();
    model.regenerate();
    let b = model.snapshot().to_vec();
    for arr in [a, b] {
        assert_eq!(arr.len(), 50);
        assert!(arr.iter().all(|&v| (1..=50).contains(&v)));
    }
}

#[test]
fn summary_serializes_to_json() {
    let timeline = build_timeline(&[5, 3, 1], &TimelineConfig::default());
    let json = serde_json::to_value(timeline.summary()).unwrap();
    assert_eq!(json["comparisons"], 3);
    assert_eq!(json["swaps"], 3);
    assert_eq!(json["sorted"], serde_json::json!([1, 3, 5]));
    // 3 comparisons + 3 swaps = 9 steps of 15ms, then 50ms
    assert_eq!(json["total_us"], 185_000);
}
