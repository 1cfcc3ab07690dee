//! Copying rolls to the system clipboard.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{TuiError, TuiResult};
use crate::programs;

/// Puts text on the clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn copy(&mut self, text: &str) -> TuiResult<()>;
}

/// Pipes text into an external clipboard program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Use `program` with `args`, writing the text to its stdin.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a command line such as `xclip -selection clipboard`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// Pick the clipboard program for this desktop, if one is installed.
    pub fn detect() -> Option<Self> {
        let candidates: &[&str] = if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            &["wl-copy", "xclip -selection clipboard", "xsel --clipboard --input"]
        } else if cfg!(target_os = "macos") {
            &["pbcopy"]
        } else if cfg!(windows) {
            &["clip"]
        } else {
            &["xclip -selection clipboard", "xsel --clipboard --input", "wl-copy"]
        };
        candidates
            .iter()
            .filter_map(|line| Self::from_command_line(line))
            .find(|clip| programs::on_path(&clip.program))
    }

    /// The program that receives the text.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&mut self, text: &str) -> TuiResult<()> {
        debug!(program = %self.program, "copy to clipboard");
        let fail = |e: std::io::Error| TuiError::Clipboard(format!("{}: {e}", self.program));
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(fail)?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(fail)?;
        }
        let status = child.wait().map_err(fail)?;
        if status.success() {
            Ok(())
        } else {
            Err(TuiError::Clipboard(format!("{} exited with {status}", self.program)))
        }
    }
}

/// A clipboard that refuses every copy, for systems without one.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> TuiResult<()> {
        Err(TuiError::Clipboard("no clipboard program found".into()))
    }
}
