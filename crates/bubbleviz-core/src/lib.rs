//! # bubbleviz-core
//!
//! **Bubble Sort, one visible step at a time.**
//!
//! `bubbleviz-core` turns a classic two-loop Bubble Sort into a deterministic,
//! replayable timeline of visual events, and plays that timeline back onto a
//! set of bars. It has no UI dependencies; front ends draw [`Bar`]s however
//! they like.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use bubbleviz_core::{Player, SortingModel, TimelineConfig, build_timeline};
//!
//! let model = SortingModel::with_seed(50, 7);
//! let timeline = build_timeline(model.snapshot(), &TimelineConfig::default());
//! assert_eq!(timeline.comparisons(), 50 * 49 / 2);
//!
//! let mut player = Player::new(timeline);
//! player.advance_to(Duration::from_secs(3600));
//! assert!(player.is_finished());
//! assert!(player.slot_values().windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ## Architecture
//!
//! SortingModel → snapshot → Sequencer (pure) → Timeline → Player → bars
//!
//! The timeline is fully materialized before playback begins. The player owns
//! all mutable bar state and applies events strictly in order, driven by a
//! clock the caller supplies.

pub mod bar;
pub mod model;
pub mod player;
pub mod sequencer;

pub use bar::{Bar, BarColor, BarId, Motion};
pub use model::{DEFAULT_ARRAY_SIZE, MAX_ARRAY_SIZE, SortingModel};
pub use player::{Player, Progress};
pub use sequencer::{
    DEFAULT_FINISH_DELAY, DEFAULT_STEP, EventKind, SlotPair, Timeline, TimelineConfig,
    TimelineSummary, VisualEvent, build_timeline, comparisons_for,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
