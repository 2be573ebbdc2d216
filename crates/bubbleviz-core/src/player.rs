//! Index-driven playback of a [`Timeline`].
//!
//! The player owns every piece of mutable visual state for the duration of a
//! sort: bar colors, bar slots, in-flight motions and the slot → bar map.
//! Nothing else touches the bars while a timeline is playing. The caller
//! supplies the playback clock through [`Player::advance_to`]; the player
//! applies each due event exactly once, in index order.

use std::time::Duration;

use crate::bar::{Bar, BarColor, BarId, Motion};
use crate::sequencer::{EventKind, SlotPair, Timeline, VisualEvent};

/// Counters for the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub comparisons: usize,
    pub swaps: usize,
    pub applied: usize,
}

#[derive(Debug, Clone)]
pub struct Player {
    timeline: Timeline,
    bars: Vec<Bar>,
    slots: Vec<BarId>,
    cursor: usize,
    clock: Duration,
    progress: Progress,
    finished: bool,
}

impl Player {
    pub fn new(timeline: Timeline) -> Self {
        let bars = Bar::at_rest(timeline.initial());
        let slots = (0..bars.len()).collect();
        Self {
            timeline,
            bars,
            slots,
            cursor: 0,
            clock: Duration::ZERO,
            progress: Progress::default(),
            finished: false,
        }
    }

    /// Apply every pending event scheduled at or before `elapsed`.
    ///
    /// Returns the number of events applied. The clock never moves back.
    pub fn advance_to(&mut self, elapsed: Duration) -> usize {
        if elapsed > self.clock {
            self.clock = elapsed;
        }
        let mut applied = 0;
        while let Some(event) = self.timeline.events().get(self.cursor).copied() {
            if event.at > self.clock {
                break;
            }
            self.apply(&event);
            self.cursor += 1;
            applied += 1;
        }
        self.progress.applied += applied;
        applied
    }

    fn apply(&mut self, event: &VisualEvent) {
        log::trace!("{:?} {}", event.at, event.kind.label());
        match event.kind {
            EventKind::Highlight(pair) => {
                self.progress.comparisons += 1;
                self.color_pair(&pair, BarColor::Comparing);
            }
            EventKind::Swap(pair) => {
                self.progress.swaps += 1;
                self.swap_pair(&pair, event.at);
            }
            EventKind::Reset(pair) => self.color_pair(&pair, BarColor::Neutral),
            EventKind::Complete => {
                for bar in &mut self.bars {
                    bar.color = BarColor::Sorted;
                    bar.motion = None;
                }
                self.finished = true;
            }
        }
    }

    fn color_pair(&mut self, pair: &SlotPair, color: BarColor) {
        self.bars[pair.left_bar].color = color;
        self.bars[pair.right_bar].color = color;
    }

    fn swap_pair(&mut self, pair: &SlotPair, at: Duration) {
        let duration = self.timeline.step();
        for (id, from, to) in [
            (pair.left_bar, pair.left, pair.right),
            (pair.right_bar, pair.right, pair.left),
        ] {
            let bar = &mut self.bars[id];
            bar.slot = to;
            bar.motion = Some(Motion {
                from: from as f64,
                to: to as f64,
                start: at,
                duration,
            });
        }
        self.slots.swap(pair.left, pair.right);
    }

    /// Offset of the next pending event, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.events().get(self.cursor).map(|e| e.at)
    }

    /// True once `Complete` has been applied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Bars indexed by [`BarId`].
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Horizontal position of a bar, in slot units, at the current clock.
    /// `None` for an id outside this timeline.
    pub fn bar_x(&self, id: BarId) -> Option<f64> {
        self.bars.get(id).map(|bar| bar.x_at(self.clock))
    }

    /// Bar id resting in each slot, left to right.
    pub fn slot_order(&self) -> &[BarId] {
        &self.slots
    }

    /// Values in on-screen order.
    pub fn slot_values(&self) -> Vec<u32> {
        self.slots.iter().map(|&id| self.bars[id].value).collect()
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}
