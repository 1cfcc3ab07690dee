//! File logging for the roller; the terminal itself stays clean.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TuiError, TuiResult};

/// Append logs to `path`. `RUST_LOG` overrides the default `info` level.
pub fn init_file_logging(path: &Path) -> TuiResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TuiError::Logging(format!("{}: {e}", path.display())))?;

    let default = "info,td_random=debug,td_dice=debug,td_tui=debug,reqwest=warn";
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}
