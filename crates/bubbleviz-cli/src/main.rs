//! CLI for bubbleviz: watch Bubble Sort compare and swap, one bar at a time.

mod commands;
mod logging;
mod tui;

use bubbleviz_core::{DEFAULT_ARRAY_SIZE, DEFAULT_FINISH_DELAY, DEFAULT_STEP, TimelineConfig};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bubbleviz")]
#[command(about = "bubbleviz: Bubble Sort, animated as bars in your terminal")]
#[command(version = bubbleviz_core::VERSION)]
struct Cli {
    /// Write log output to this file. Without it the TUI runs with logging off.
    #[arg(long, global = true)]
    log_file: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate Bubble Sort over a random array (TUI).
    /// Keys: n new array, s start sort, q quit.
    Run {
        /// Number of bars; values are drawn from [1, size]
        #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE, value_parser = commands::parse_size)]
        size: usize,

        /// Milliseconds between consecutive comparison events
        #[arg(long, default_value_t = DEFAULT_STEP.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..=commands::MAX_DELAY_MS))]
        step_ms: u64,

        /// Milliseconds between the last comparison and the final sorted state
        #[arg(long, default_value_t = DEFAULT_FINISH_DELAY.as_millis() as u64, value_parser = clap::value_parser!(u64).range(..=commands::MAX_DELAY_MS))]
        finish_ms: u64,

        /// Seed for reproducible arrays (default: seeded from the OS)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the timeline of visual events for one sort, without the TUI
    Timeline {
        /// Comma-separated positive values to sort (e.g. 5,3,1).
        /// When omitted, a random array of --size values is used.
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..), conflicts_with_all = ["size", "seed"])]
        values: Vec<u32>,

        /// Size of the random array when --values is not given
        #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE, value_parser = commands::parse_size)]
        size: usize,

        /// Seed for the random array
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds between consecutive comparison events
        #[arg(long, default_value_t = DEFAULT_STEP.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..=commands::MAX_DELAY_MS))]
        step_ms: u64,

        /// Milliseconds between the last comparison and Complete
        #[arg(long, default_value_t = DEFAULT_FINISH_DELAY.as_millis() as u64, value_parser = clap::value_parser!(u64).range(..=commands::MAX_DELAY_MS))]
        finish_ms: u64,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Only print the summary (counts, duration, sorted values)
        #[arg(long)]
        summary: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let owns_terminal = matches!(cli.command, Commands::Run { .. });
    logging::init(cli.verbose, cli.log_file.as_deref(), owns_terminal);

    match cli.command {
        Commands::Run {
            size,
            step_ms,
            finish_ms,
            seed,
        } => commands::run::run(size, TimelineConfig::from_millis(step_ms, finish_ms), seed),
        Commands::Timeline {
            values,
            size,
            seed,
            step_ms,
            finish_ms,
            format,
            summary,
        } => commands::timeline::run(commands::timeline::TimelineCommandConfig {
            values: &values,
            size,
            seed,
            timeline: TimelineConfig::from_millis(step_ms, finish_ms),
            format: &format,
            summary_only: summary,
        }),
    }
}
