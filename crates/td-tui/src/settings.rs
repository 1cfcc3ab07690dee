//! User settings persisted between sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TuiError, TuiResult};

/// Settings saved whenever the user changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Speech rate, 0 (slowest) to 10 (fastest).
    pub speech_rate: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self { speech_rate: 5 }
    }
}

impl Settings {
    /// Read settings from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Settings {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no settings file, using defaults");
                return Settings::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "corrupt settings file, using defaults");
            Settings::default()
        })
    }

    /// Write settings to `path` as JSON.
    pub fn save(&self, path: &Path) -> TuiResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TuiError::Settings(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| TuiError::Settings(format!("{}: {e}", path.display())))
    }
}
