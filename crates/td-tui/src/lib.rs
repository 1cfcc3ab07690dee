//! Accessible terminal dice roller.
//!
//! Arrow keys pick a category and walk its history, Enter rolls, and every
//! action is spoken through an external text-to-speech program. The screen
//! mirrors the last spoken line for screen readers that follow the terminal.

pub mod app;
pub mod args;
pub mod clipboard;
pub mod config;
pub mod cues;
pub mod error;
pub mod logging;
pub mod programs;
pub mod settings;
pub mod speech;
pub mod terminal;

pub use app::DiceApp;
pub use args::{SourceArgs, TuiArgs};
pub use config::TuiConfig;
pub use error::{TuiError, TuiResult};
pub use settings::Settings;
