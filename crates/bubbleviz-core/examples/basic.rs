//! Basic timeline example.
//!
//! Draws a small random array, builds its Bubble Sort timeline, and prints
//! every event with its offset.
//!
//! Run: `cargo run --example basic`

use bubbleviz_core::{SortingModel, TimelineConfig, build_timeline};

fn main() {
    // A tiny array keeps the event list readable
    let model = SortingModel::new(6);
    println!("Input: {:?}", model.snapshot());

    let timeline = build_timeline(model.snapshot(), &TimelineConfig::default());

    for event in timeline.events() {
        match event.kind.pair() {
            Some(p) => println!(
                "{:>6}ms  {:<9}  slots {}/{}  bars {}/{}",
                event.at.as_millis(),
                event.kind.label(),
                p.left,
                p.right,
                p.left_bar,
                p.right_bar
            ),
            None => println!("{:>6}ms  {}", event.at.as_millis(), event.kind.label()),
        }
    }

    println!(
        "\nSorted: {:?}  ({} comparisons, {} swaps, {}ms)",
        timeline.sorted(),
        timeline.comparisons(),
        timeline.swaps(),
        timeline.total().as_millis()
    );
}
