//! Configuration for a roller session.

use std::path::PathBuf;

use td_dice::Category;
use td_random::SourceConfig;

/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "truedice-settings.json";

/// How to produce speech.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeechChoice {
    /// Use the first known program on `PATH`.
    #[default]
    Detect,
    /// Use this program.
    Program(String),
    /// Do not speak; only show the text.
    Off,
}

/// Configuration for a [`DiceApp`](crate::DiceApp).
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Where random values come from.
    pub source: SourceConfig,
    /// Category selected at startup.
    pub start: Category,
    /// Where settings are loaded from and saved to; `None` disables persistence.
    pub settings_path: Option<PathBuf>,
    /// Speech program selection.
    pub speech: SpeechChoice,
    /// Clipboard command line; `None` detects one.
    pub clipboard: Option<String>,
    /// Ring the terminal bell on rolls.
    pub bell: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            start: Category::Coin,
            settings_path: Some(PathBuf::from(DEFAULT_SETTINGS_FILE)),
            speech: SpeechChoice::Detect,
            clipboard: None,
            bell: true,
        }
    }
}

impl TuiConfig {
    /// Set the random source configuration.
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Set the starting category.
    pub fn with_start(mut self, start: Category) -> Self {
        self.start = start;
        self
    }

    /// Set or disable the settings file.
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// Set the speech selection.
    pub fn with_speech(mut self, speech: SpeechChoice) -> Self {
        self.speech = speech;
        self
    }

    /// Set the clipboard command line.
    pub fn with_clipboard(mut self, clipboard: impl Into<String>) -> Self {
        self.clipboard = Some(clipboard.into());
        self
    }

    /// Enable or disable the bell.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }
}
