//! Visual proxies for array slots.

use std::time::Duration;

use serde::Serialize;

/// Stable identity of a bar: the slot it occupied when the array was drawn.
pub type BarId = usize;

/// The only state-indicating channel of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    #[default]
    Neutral,
    Comparing,
    Sorted,
}

impl std::fmt::Display for BarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Comparing => write!(f, "comparing"),
            Self::Sorted => write!(f, "sorted"),
        }
    }
}

/// Horizontal move from one slot to another over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: f64,
    pub to: f64,
    pub start: Duration,
    pub duration: Duration,
}

impl Motion {
    /// Position in slot units at playback offset `now`.
    pub fn position_at(&self, now: Duration) -> f64 {
        if now <= self.start {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let t = ((now - self.start).as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn end(&self) -> Duration {
        self.start.saturating_add(self.duration)
    }
}

/// One bar on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub id: BarId,
    pub value: u32,
    /// Slot the bar rests at (or is moving towards).
    pub slot: usize,
    pub color: BarColor,
    pub motion: Option<Motion>,
}

impl Bar {
    /// Bars at their resting positions, one per value, all neutral.
    pub fn at_rest(values: &[u32]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar {
                id: i,
                value,
                slot: i,
                color: BarColor::Neutral,
                motion: None,
            })
            .collect()
    }

    /// Horizontal position in slot units at playback offset `now`.
    pub fn x_at(&self, now: Duration) -> f64 {
        match &self.motion {
            Some(m) if now < m.end() => m.position_at(now),
            _ => self.slot as f64,
        }
    }

    /// Height as a fraction of the chart, clamped to `[0, 1]`.
    pub fn height_fraction(&self, max_value: u32) -> f64 {
        if max_value == 0 {
            return 0.0;
        }
        (f64::from(self.value) / f64::from(max_value)).clamp(0.0, 1.0)
    }
}
