//! Application state: the board plus its speech, cue, and clipboard collaborators.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use td_dice::{Action, DiceBoard, Feedback};
use td_random::RandomSource;
use tracing::{info, warn};

use crate::clipboard::{Clipboard, CommandClipboard, NoClipboard};
use crate::config::{SpeechChoice, TuiConfig};
use crate::cues::{BellCues, CuePlayer, SilentCues};
use crate::error::TuiResult;
use crate::settings::Settings;
use crate::speech::{CommandSpeaker, Speaker, TranscriptSpeaker};

/// Main application state for the roller.
pub struct DiceApp {
    /// The dice board.
    pub board: DiceBoard,
    /// The last line handed to the speaker.
    pub last_spoken: Option<String>,
    /// The last diagnostic from the random source.
    pub last_alert: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    speaker: Box<dyn Speaker>,
    cues: Box<dyn CuePlayer>,
    clipboard: Box<dyn Clipboard>,
    settings_path: Option<PathBuf>,
}

impl DiceApp {
    /// Assemble an app from a board and its collaborators.
    pub fn new(
        board: DiceBoard,
        speaker: Box<dyn Speaker>,
        cues: Box<dyn CuePlayer>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            board,
            last_spoken: None,
            last_alert: None,
            show_help: false,
            should_quit: false,
            speaker,
            cues,
            clipboard,
            settings_path: None,
        }
    }

    /// Persist speech rate changes to `path`.
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// Build the app described by `config`: load settings, open the random
    /// source, and pick speech, cue, and clipboard programs.
    pub fn from_config(config: TuiConfig) -> TuiResult<Self> {
        let settings = config
            .settings_path
            .as_deref()
            .map(Settings::load)
            .unwrap_or_default();
        let source = RandomSource::new(config.source.clone())?;
        let board = DiceBoard::new(source, settings.speech_rate).with_category(config.start);
        let rate = board.speech_rate();

        let speaker: Box<dyn Speaker> = match &config.speech {
            SpeechChoice::Program(program) => Box::new(CommandSpeaker::new(program.clone(), rate)),
            SpeechChoice::Detect => match CommandSpeaker::detect(rate) {
                Some(speaker) => Box::new(speaker),
                None => {
                    warn!("no speech program found, showing text only");
                    Box::new(TranscriptSpeaker::default())
                }
            },
            SpeechChoice::Off => Box::new(TranscriptSpeaker::default()),
        };
        let cues: Box<dyn CuePlayer> = if config.bell {
            Box::new(BellCues)
        } else {
            Box::new(SilentCues)
        };
        let clipboard: Box<dyn Clipboard> = match config
            .clipboard
            .as_deref()
            .and_then(CommandClipboard::from_command_line)
            .or_else(CommandClipboard::detect)
        {
            Some(clip) => {
                info!(program = clip.program(), "clipboard program");
                Box::new(clip)
            }
            None => Box::new(NoClipboard),
        };

        Ok(Self::new(board, speaker, cues, clipboard).with_settings_path(config.settings_path))
    }

    /// Announce the starting category.
    pub fn greet(&mut self) {
        let label = self.board.category().label();
        self.say(&format!("True Random Dice Roller. {label}"), true);
    }

    /// Advance queued speech.
    pub fn tick(&mut self) {
        self.speaker.tick();
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return;
        }
        if let Some(action) = map_key(key) {
            self.dispatch(action);
        }
    }

    /// Apply `action` to the board and deliver its feedback.
    pub fn dispatch(&mut self, action: Action) {
        let feedback = self.board.apply(action);
        if action == Action::Roll {
            self.last_alert = None;
        }
        self.deliver(feedback);
    }

    fn deliver(&mut self, feedback: Feedback) {
        let Feedback {
            cue,
            mut speech,
            copy,
            rate,
            alert,
            quit,
        } = feedback;

        if let Some(cue) = cue {
            self.cues.play(cue);
        }
        if let Some(text) = copy {
            if let Err(e) = self.clipboard.copy(&text) {
                warn!(error = %e, "copy failed");
                speech = Some(td_dice::Speech {
                    text: "could not copy to the clipboard".to_string(),
                    interrupt: true,
                });
            }
        }
        if let Some(rate) = rate {
            self.speaker.set_rate(rate);
            self.save_rate(rate);
        }
        if let Some(alert) = alert {
            warn!(%alert, "random source alert");
            self.last_alert = Some(alert);
        }
        if let Some(speech) = speech {
            self.say(&speech.text, speech.interrupt);
        }
        if quit {
            self.should_quit = true;
        }
    }

    fn say(&mut self, text: &str, interrupt: bool) {
        self.speaker.speak(text, interrupt);
        self.last_spoken = Some(text.to_string());
    }

    fn save_rate(&self, rate: u8) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let settings = Settings { speech_rate: rate };
        if let Err(e) = settings.save(path) {
            warn!(error = %e, "could not save settings");
        }
    }
}

/// Map a key press to a board action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Action::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PreviousRoll),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NextRoll),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::Enter => Some(Action::Roll),
        KeyCode::Char(' ') => Some(Action::Repeat),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('-') => Some(Action::Slower),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::Faster),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
