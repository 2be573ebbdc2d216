//! Bubble Sort → timed visual events.
//!
//! [`build_timeline`] runs a classic ascending Bubble Sort (fixed outer/inner
//! loop, no early exit) over a private copy of the input and records every
//! step as a [`VisualEvent`] scheduled at an offset from playback start:
//!
//! ```text
//! t += step   Highlight(j, j+1)
//! t += step   Swap(j, j+1)        only if a[j] > a[j+1]
//! t += step   Reset(j, j+1)
//! ...
//! t += finish Complete
//! ```
//!
//! Bar identity is resolved while the sequence is built: the sequencer keeps
//! its own slot → bar map and swaps it alongside the values, so each pair
//! event names the bars that occupy the slots at that point of the sort.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::bar::BarId;

/// Delay between consecutive comparison events.
pub const DEFAULT_STEP: Duration = Duration::from_millis(15);

/// Gap between the last comparison event and `Complete`.
pub const DEFAULT_FINISH_DELAY: Duration = Duration::from_millis(50);

fn as_micros<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Two adjacent slots and the bars sitting in them when the event was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotPair {
    pub left: usize,
    pub right: usize,
    pub left_bar: BarId,
    pub right_bar: BarId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// Mark both slots as being compared.
    Highlight(SlotPair),
    /// Exchange the horizontal positions of both slots.
    Swap(SlotPair),
    /// Return both slots to neutral.
    Reset(SlotPair),
    /// Mark every slot sorted.
    Complete,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Highlight(_) => "highlight",
            Self::Swap(_) => "swap",
            Self::Reset(_) => "reset",
            Self::Complete => "complete",
        }
    }

    pub fn pair(&self) -> Option<&SlotPair> {
        match self {
            Self::Highlight(p) | Self::Swap(p) | Self::Reset(p) => Some(p),
            Self::Complete => None,
        }
    }
}

/// An instruction applied at `at` after playback starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisualEvent {
    #[serde(rename = "at_us", serialize_with = "as_micros")]
    pub at: Duration,
    #[serde(flatten)]
    pub kind: EventKind,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Pacing of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    pub step: Duration,
    pub finish_delay: Duration,
}

impl TimelineConfig {
    pub fn from_millis(step_ms: u64, finish_ms: u64) -> Self {
        Self {
            step: Duration::from_millis(step_ms),
            finish_delay: Duration::from_millis(finish_ms),
        }
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            finish_delay: DEFAULT_FINISH_DELAY,
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// The full, replayable result of one sort invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    initial: Vec<u32>,
    sorted: Vec<u32>,
    events: Vec<VisualEvent>,
    #[serde(rename = "total_us", serialize_with = "as_micros")]
    total: Duration,
    #[serde(rename = "step_us", serialize_with = "as_micros")]
    step: Duration,
    comparisons: usize,
    swaps: usize,
}

/// Headline numbers of a timeline, without the event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSummary {
    pub len: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub events: usize,
    #[serde(rename = "total_us", serialize_with = "as_micros")]
    pub total: Duration,
    pub sorted: Vec<u32>,
}

impl Timeline {
    /// Values as they were before sorting.
    pub fn initial(&self) -> &[u32] {
        &self.initial
    }

    /// Values after the sort (non-decreasing).
    pub fn sorted(&self) -> &[u32] {
        &self.sorted
    }

    pub fn into_sorted(self) -> Vec<u32> {
        self.sorted
    }

    pub fn events(&self) -> &[VisualEvent] {
        &self.events
    }

    /// Offset of the `Complete` event.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn summary(&self) -> TimelineSummary {
        TimelineSummary {
            len: self.initial.len(),
            comparisons: self.comparisons,
            swaps: self.swaps,
            events: self.events.len(),
            total: self.total,
            sorted: self.sorted.clone(),
        }
    }
}

/// Comparisons a fixed-iteration Bubble Sort performs on `n` values.
pub fn comparisons_for(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Sort a copy of `values` and record every step as a timed event.
///
/// Offsets saturate at `Duration::MAX`.
pub fn build_timeline(values: &[u32], config: &TimelineConfig) -> Timeline {
    let n = values.len();
    let mut data = values.to_vec();
    let mut bar_at: Vec<BarId> = (0..n).collect();
    let mut events = Vec::with_capacity(comparisons_for(n) * 3 + 1);
    let mut t = Duration::ZERO;
    let mut comparisons = 0;
    let mut swaps = 0;

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            let pair = SlotPair {
                left: j,
                right: j + 1,
                left_bar: bar_at[j],
                right_bar: bar_at[j + 1],
            };
            comparisons += 1;

            t = t.saturating_add(config.step);
            events.push(VisualEvent {
                at: t,
                kind: EventKind::Highlight(pair),
            });

            let after = if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                bar_at.swap(j, j + 1);
                swaps += 1;

                t = t.saturating_add(config.step);
                events.push(VisualEvent {
                    at: t,
                    kind: EventKind::Swap(pair),
                });

                SlotPair {
                    left_bar: pair.right_bar,
                    right_bar: pair.left_bar,
                    ..pair
                }
            } else {
                pair
            };

            t = t.saturating_add(config.step);
            events.push(VisualEvent {
                at: t,
                kind: EventKind::Reset(after),
            });
        }
    }

    t = t.saturating_add(config.finish_delay);
    events.push(VisualEvent {
        at: t,
        kind: EventKind::Complete,
    });

    log::debug!(
        "timeline for {n} values: {comparisons} comparisons, {swaps} swaps, {} events, {:?}",
        events.len(),
        t
    );

    Timeline {
        initial: values.to_vec(),
        sorted: data,
        events,
        total: t,
        step: config.step,
        comparisons,
        swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn kinds(t: &Timeline) -> Vec<&'static str> {
        t.events().iter().map(|e| e.kind.label()).collect()
    }

    #[test]
    fn test_five_three_one() {
        let t = build_timeline(&[5, 3, 1], &TimelineConfig::default());
        assert_eq!(t.sorted(), &[1, 3, 5]);
        assert_eq!(t.comparisons(), 3);
        assert_eq!(t.swaps(), 3);
        assert_eq!(
            kinds(&t),
            vec![
                "highlight", "swap", "reset", "highlight", "swap", "reset", "highlight", "swap",
                "reset", "complete",
            ]
        );
    }

    #[test]
    fn test_five_three_one_bar_identity() {
        let t = build_timeline(&[5, 3, 1], &TimelineConfig::default());
        let pairs: Vec<(usize, usize, usize, usize)> = t
            .events()
            .iter()
            .filter_map(|e| e.kind.pair())
            .map(|p| (p.left, p.right, p.left_bar, p.right_bar))
            .collect();
        assert_eq!(
            pairs,
            vec![
                // 5(bar 0) vs 3(bar 1), swapped
                (0, 1, 0, 1),
                (0, 1, 0, 1),
                (0, 1, 1, 0),
                // 5(bar 0) vs 1(bar 2), swapped
                (1, 2, 0, 2),
                (1, 2, 0, 2),
                (1, 2, 2, 0),
                // 3(bar 1) vs 1(bar 2), swapped
                (0, 1, 1, 2),
                (0, 1, 1, 2),
                (0, 1, 2, 1),
            ]
        );
    }

    #[test]
    fn test_already_sorted_has_no_swaps() {
        let t = build_timeline(&[1, 2, 3], &TimelineConfig::default());
        assert_eq!(t.sorted(), &[1, 2, 3]);
        assert_eq!(t.comparisons(), 3);
        assert_eq!(t.swaps(), 0);
        assert!(!kinds(&t).contains(&"swap"));
    }

    #[test]
    fn test_equal_values_never_swap() {
        let t = build_timeline(&[4, 4, 4, 4], &TimelineConfig::default());
        assert_eq!(t.swaps(), 0);
        assert_eq!(t.comparisons(), 6);
    }

    #[test]
    fn test_empty_and_single_only_complete() {
        let config = TimelineConfig::default();
        for input in [&[][..], &[7][..]] {
            let t = build_timeline(input, &config);
            assert_eq!(t.comparisons(), 0);
            assert_eq!(t.events().len(), 1);
            assert_eq!(t.events()[0].kind, EventKind::Complete);
            assert_eq!(t.total(), DEFAULT_FINISH_DELAY);
            assert_eq!(t.sorted(), input);
        }
    }

    #[test]
    fn test_offsets_advance_one_step_per_event() {
        let config = TimelineConfig::from_millis(10, 40);
        let t = build_timeline(&[2, 1], &config);
        let offsets: Vec<Duration> = t.events().iter().map(|e| e.at).collect();
        assert_eq!(offsets, vec![ms(10), ms(20), ms(30), ms(70)]);
        assert_eq!(t.total(), ms(70));
        assert_eq!(t.step(), ms(10));
    }

    #[test]
    fn test_total_matches_formula() {
        let config = TimelineConfig::from_millis(3, 11);
        let t = build_timeline(&[9, 1, 8, 2, 7, 3], &config);
        let steps = 2 * t.comparisons() + t.swaps();
        assert_eq!(t.total(), ms(3) * steps as u32 + ms(11));
    }

    #[test]
    fn test_comparisons_for() {
        assert_eq!(comparisons_for(0), 0);
        assert_eq!(comparisons_for(1), 0);
        assert_eq!(comparisons_for(3), 3);
        assert_eq!(comparisons_for(50), 1225);
    }

    #[test]
    fn test_summary() {
        let t = build_timeline(&[3, 1, 2], &TimelineConfig::default());
        let s = t.summary();
        assert_eq!(s.len, 3);
        assert_eq!(s.comparisons, 3);
        assert_eq!(s.swaps, 2);
        assert_eq!(s.events, t.events().len());
        assert_eq!(s.total, t.total());
        assert_eq!(s.sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_initial_preserved() {
        let input = [3, 1, 2];
        let t = build_timeline(&input, &TimelineConfig::default());
        assert_eq!(t.initial(), &input);
        assert_eq!(t.into_sorted(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_json_shape() {
        let t = build_timeline(&[2, 1], &TimelineConfig::from_millis(1, 5));
        let json = serde_json::to_value(t.events()).unwrap();
        assert_eq!(json[0]["kind"], "highlight");
        assert_eq!(json[0]["at_us"], 1000);
        assert_eq!(json[0]["left"], 0);
        assert_eq!(json[0]["right_bar"], 1);
        assert_eq!(json[2]["left_bar"], 1);
        assert_eq!(json[3]["kind"], "complete");
        assert_eq!(json[3]["at_us"], 8000);
    }

    #[test]
    fn test_huge_step_saturates() {
        let t = build_timeline(&[5, 3, 1, 4], &TimelineConfig::from_millis(u64::MAX, 50));
        assert_eq!(t.comparisons(), 6);
        assert_eq!(t.sorted(), &[1, 3, 4, 5]);
        assert_eq!(t.total(), Duration::MAX);
        assert!(t.events().windows(2).all(|w| w[0].at <= w[1].at));
    }
}
