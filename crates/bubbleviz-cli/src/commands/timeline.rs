use std::fmt::Write;
use std::time::Duration;

use bubbleviz_core::{MAX_ARRAY_SIZE, Timeline, TimelineConfig, build_timeline};

pub struct TimelineCommandConfig<'a> {
    /// Explicit input; empty means "draw a random array".
    pub values: &'a [u32],
    pub size: usize,
    pub seed: Option<u64>,
    pub timeline: TimelineConfig,
    pub format: &'a str,
    pub summary_only: bool,
}

/// Reject explicit inputs longer than the model allows.
pub fn check_values(values: &[u32]) -> Result<(), String> {
    if values.len() > MAX_ARRAY_SIZE {
        return Err(format!(
            "at most {MAX_ARRAY_SIZE} values are supported, got {}",
            values.len()
        ));
    }
    Ok(())
}

pub fn run(config: TimelineCommandConfig<'_>) {
    if let Err(e) = check_values(config.values) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let input = if config.values.is_empty() {
        super::make_model(config.size, config.seed)
            .snapshot()
            .to_vec()
    } else {
        config.values.to_vec()
    };

    let timeline = build_timeline(&input, &config.timeline);
    log::info!(
        "built timeline: {} comparisons, {} swaps",
        timeline.comparisons(),
        timeline.swaps()
    );

    let rendered = match config.format {
        "json" => match render_json(&timeline, config.summary_only) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: failed to serialize timeline: {e}");
                std::process::exit(1);
            }
        },
        _ => render_text(&timeline, config.summary_only),
    };
    println!("{rendered}");
}

fn format_offset(d: Duration) -> String {
    let us = d.as_micros();
    if us % 1000 == 0 {
        format!("{}ms", us / 1000)
    } else {
        format!("{}.{:03}ms", us / 1000, us % 1000)
    }
}

pub fn render_text(timeline: &Timeline, summary_only: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input:  {:?}", timeline.initial());

    if !summary_only {
        out.push('\n');
        let _ = writeln!(
            out,
            "  {:>10}  {:<9}  {:>11}  {:>11}",
            "offset", "event", "slots", "bars"
        );
        let _ = writeln!(out, "  {}", "-".repeat(47));
        for event in timeline.events() {
            let offset = format_offset(event.at);
            match event.kind.pair() {
                Some(p) => {
                    let _ = writeln!(
                        out,
                        "  {:>10}  {:<9}  {:>11}  {:>11}",
                        offset,
                        event.kind.label(),
                        format!("{} <-> {}", p.left, p.right),
                        format!("{} <-> {}", p.left_bar, p.right_bar),
                    );
                }
                None => {
                    let _ = writeln!(out, "  {:>10}  {}", offset, event.kind.label());
                }
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Sorted: {:?}", timeline.sorted());
    let _ = write!(
        out,
        "{} comparisons, {} swaps, {} events, {} total",
        timeline.comparisons(),
        timeline.swaps(),
        timeline.events().len(),
        format_offset(timeline.total())
    );
    out
}

pub fn render_json(timeline: &Timeline, summary_only: bool) -> serde_json::Result<String> {
    if summary_only {
        serde_json::to_string_pretty(&timeline.summary())
    } else {
        serde_json::to_string_pretty(timeline)
    }
}
