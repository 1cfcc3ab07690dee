pub mod abilities;
pub mod get;
pub mod quota;
pub mod roll;
pub mod tui;

use colored::Colorize;
use td_random::{RandomResult, RandomSource};
use tracing::debug;

use crate::GlobalArgs;

/// Open the random source described by the global options.
fn open_source(global: &GlobalArgs) -> Result<RandomSource, String> {
    let config = global.source.to_config();
    debug!(
        base_url = %config.base_url,
        online = config.online,
        seed = ?config.seed,
        "opening random source"
    );
    RandomSource::new(config).map_err(|e| format!("cannot open source: {e}"))
}

/// Print a result's alert, if any, to stderr.
fn print_alert(result: &RandomResult) {
    if let Some(alert) = &result.alert {
        eprintln!("{}", alert.yellow());
    }
}
