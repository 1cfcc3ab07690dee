//! Speaking feedback aloud.

use std::collections::VecDeque;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::error::{TuiError, TuiResult};
use crate::programs;

/// Text-to-speech programs tried, in order, when none is configured.
pub const SPEECH_PROGRAMS: &[&str] = &["espeak-ng", "espeak", "spd-say", "say"];

/// Something that reads text aloud.
pub trait Speaker {
    /// Speak `text`. With `interrupt`, cut off the current utterance and
    /// drop anything queued; otherwise queue behind it.
    fn speak(&mut self, text: &str, interrupt: bool);

    /// Set the rate, 0 (slowest) to 10 (fastest).
    fn set_rate(&mut self, rate: u8);

    /// Called every loop tick to advance queued speech.
    fn tick(&mut self) {}
}

/// How a program takes its rate argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateFlag {
    /// espeak: `-s <words per minute>`.
    EspeakWpm,
    /// speech-dispatcher: `-r <-100..100>`.
    SpdPercent,
    /// macOS say: `-r <words per minute>`.
    SayWpm,
}

impl RateFlag {
    fn for_program(program: &str) -> RateFlag {
        let name = Path::new(program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(program);
        match name {
            "spd-say" => RateFlag::SpdPercent,
            "say" => RateFlag::SayWpm,
            _ => RateFlag::EspeakWpm,
        }
    }

    fn args(self, rate: u8) -> [String; 2] {
        let rate = i32::from(rate);
        match self {
            // Rate 5 lands on espeak's default of 175 wpm.
            RateFlag::EspeakWpm => ["-s".into(), (80 + rate * 19).to_string()],
            RateFlag::SpdPercent => ["-r".into(), (rate * 20 - 100).to_string()],
            RateFlag::SayWpm => ["-r".into(), (90 + rate * 25).to_string()],
        }
    }
}

/// Speaks by running an external text-to-speech program per utterance.
pub struct CommandSpeaker {
    program: String,
    rate_flag: RateFlag,
    rate: u8,
    current: Option<Child>,
    queue: VecDeque<String>,
}

impl CommandSpeaker {
    /// Speak through `program` at `rate`.
    pub fn new(program: impl Into<String>, rate: u8) -> Self {
        let program = program.into();
        Self {
            rate_flag: RateFlag::for_program(&program),
            program,
            rate,
            current: None,
            queue: VecDeque::new(),
        }
    }

    /// Use the first known speech program on `PATH`, if any.
    pub fn detect(rate: u8) -> Option<Self> {
        programs::first_on_path(SPEECH_PROGRAMS).map(|p| Self::new(p, rate))
    }

    /// Arguments passed before the text.
    fn args(&self) -> [String; 2] {
        self.rate_flag.args(self.rate)
    }

    fn start(&mut self, text: &str) -> TuiResult<()> {
        let child = Command::new(&self.program)
            .args(self.args())
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| TuiError::Speech(format!("{}: {e}", self.program)))?;
        self.current = Some(child);
        Ok(())
    }

    fn busy(&mut self) -> bool {
        match self.current.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_))) | Some(Err(_)) => {
                self.current = None;
                false
            }
            None => false,
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Already-exited children make kill fail; that is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn advance(&mut self) {
        if self.busy() {
            return;
        }
        let Some(text) = self.queue.pop_front() else {
            return;
        };
        if let Err(e) = self.start(&text) {
            warn!(error = %e, "speech failed");
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str, interrupt: bool) {
        debug!(text, interrupt, "speak");
        if interrupt {
            self.queue.clear();
            self.stop();
        }
        self.queue.push_back(text.to_string());
        self.advance();
    }

    fn set_rate(&mut self, rate: u8) {
        self.rate = rate;
    }

    fn tick(&mut self) {
        self.advance();
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        // Let the final utterance finish instead of cutting it off.
        if let Some(mut child) = self.current.take() {
            let _ = child.wait();
        }
    }
}

/// Keeps only the last line that would have been spoken. Used when no
/// speech program is available; the screen shows that line instead.
#[derive(Debug, Default)]
pub struct TranscriptSpeaker {
    /// The most recent line.
    pub last: Option<String>,
    /// The last rate set.
    pub rate: u8,
}

impl Speaker for TranscriptSpeaker {
    fn speak(&mut self, text: &str, interrupt: bool) {
        debug!(text, interrupt, "speak (transcript)");
        self.last = Some(text.to_string());
    }

    fn set_rate(&mut self, rate: u8) {
        self.rate = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_flags_by_program() {
        assert_eq!(RateFlag::for_program("espeak-ng"), RateFlag::EspeakWpm);
        assert_eq!(RateFlag::for_program("/usr/bin/spd-say"), RateFlag::SpdPercent);
        assert_eq!(RateFlag::for_program("say"), RateFlag::SayWpm);
    }

    #[test]
    fn rate_arguments() {
        assert_eq!(RateFlag::EspeakWpm.args(5), ["-s", "175"]);
        assert_eq!(RateFlag::EspeakWpm.args(0), ["-s", "80"]);
        assert_eq!(RateFlag::SpdPercent.args(0), ["-r", "-100"]);
        assert_eq!(RateFlag::SpdPercent.args(10), ["-r", "100"]);
        assert_eq!(RateFlag::SayWpm.args(10), ["-r", "340"]);
    }

    #[test]
    fn speaker_tracks_rate() {
        let mut speaker = CommandSpeaker::new("espeak-ng", 5);
        speaker.set_rate(7);
        assert_eq!(speaker.args(), ["-s", "213"]);
    }

    #[test]
    fn missing_program_does_not_panic() {
        let mut speaker = CommandSpeaker::new("truedice-no-such-tts", 5);
        speaker.speak("roll number 1: 4", true);
        speaker.tick();
        assert!(speaker.current.is_none());
    }

    #[test]
    fn transcript_keeps_last_line() {
        let mut speaker = TranscriptSpeaker::default();
        assert_eq!(speaker.last, None);
        speaker.speak("coin toss", true);
        speaker.speak("please press enter to roll the dice", false);
        speaker.set_rate(3);
        assert_eq!(speaker.last.as_deref(), Some("please press enter to roll the dice"));
        assert_eq!(speaker.rate, 3);
    }
}
