//! Command-line options shared by `truedice-tui` and `truedice tui`.

use std::path::PathBuf;

use clap::Args;
use td_dice::Category;
use td_random::SourceConfig;

use crate::config::{DEFAULT_SETTINGS_FILE, SpeechChoice, TuiConfig};

/// Where random values come from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Use only the local pseudo-random generator
    #[arg(long, global = true)]
    pub offline: bool,

    /// Seed for the local generator (reproducible output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Root URL of the true-random service
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl SourceArgs {
    /// The source configuration these options describe.
    pub fn to_config(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.offline {
            config = config.offline();
        }
        config
    }
}

/// Options for the terminal roller.
#[derive(Debug, Clone, Args)]
pub struct TuiArgs {
    /// Start on a category (coin, d4, d6, d8, d10, d12, d20, abilities)
    #[arg(long, default_value = "coin")]
    pub start: String,

    /// Settings file holding the speech rate
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Do not read or write the settings file
    #[arg(long)]
    pub no_settings: bool,

    /// Text-to-speech program (default: first of espeak-ng, espeak, spd-say, say)
    #[arg(long, conflicts_with = "mute")]
    pub speech: Option<String>,

    /// Do not speak; only show text
    #[arg(long)]
    pub mute: bool,

    /// Clipboard command, e.g. "xclip -selection clipboard"
    #[arg(long)]
    pub clipboard: Option<String>,

    /// Do not ring the terminal bell on rolls
    #[arg(long)]
    pub no_bell: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl TuiArgs {
    /// Build a session configuration around `source`.
    pub fn into_config(self, source: SourceConfig) -> Result<TuiConfig, String> {
        let start = Category::from_name(&self.start)
            .filter(|c| Category::ALL.contains(c))
            .ok_or_else(|| format!("unknown category: {}", self.start))?;
        let speech = match (self.mute, self.speech) {
            (true, _) => SpeechChoice::Off,
            (false, Some(program)) => SpeechChoice::Program(program),
            (false, None) => SpeechChoice::Detect,
        };
        let mut config = TuiConfig::default()
            .with_source(source)
            .with_start(start)
            .with_settings_path((!self.no_settings).then_some(self.settings))
            .with_speech(speech)
            .with_bell(!self.no_bell);
        if let Some(clipboard) = self.clipboard {
            config = config.with_clipboard(clipboard);
        }
        Ok(config)
    }
}
