//! env_logger setup.
//!
//! `RUST_LOG` wins when set; otherwise `-v` flags pick the level. The TUI
//! owns the terminal, so while it runs logs only go to `--log-file`.

use std::fs::File;

use env_logger::{Builder, Env, Target};

/// Default filter for a given `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, log_file: Option<&str>, owns_terminal: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));
    builder.format_timestamp_millis();

    match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Warning: cannot open log file {path}: {e}");
                if owns_terminal {
                    return;
                }
            }
        },
        // No logger at all: the log macros become no-ops.
        None if owns_terminal => return,
        None => {}
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Warning: logger already initialized: {e}");
    }
}
