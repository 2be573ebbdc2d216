pub mod run;
pub mod timeline;

use bubbleviz_core::{MAX_ARRAY_SIZE, SortingModel};

/// Upper bound for `--step-ms` and `--finish-ms`.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Parse `--size`: an integer in `1..=MAX_ARRAY_SIZE`.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if size == 0 || size > MAX_ARRAY_SIZE {
        return Err(format!("size must be between 1 and {MAX_ARRAY_SIZE}"));
    }
    Ok(size)
}

/// Build the array model, seeded if a seed was given.
pub fn make_model(size: usize, seed: Option<u64>) -> SortingModel {
    match seed {
        Some(seed) => {
            log::info!("array of {size} values, seed {seed}");
            SortingModel::with_seed(size, seed)
        }
        None => {
            log::info!("array of {size} values, OS-seeded");
            SortingModel::new(size)
        }
    }
}
