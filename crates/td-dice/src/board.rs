//! The dice board: active category, per-category history, and a cursor.

use td_random::RandomSource;
use tracing::{debug, warn};

use crate::category::Category;
use crate::feedback::{Action, Cue, Feedback};

/// Fastest speech rate the board offers.
pub const MAX_SPEECH_RATE: u8 = 10;

/// Spoken when there is nothing to read back yet.
pub const EMPTY_PROMPT: &str = "please press enter to roll the dice";

/// State behind the dice roller.
///
/// `row` is `Some` exactly when the active category has at least one roll.
/// `slot` always indexes [`Category::ALL`].
pub struct DiceBoard {
    source: RandomSource,
    slot: usize,
    histories: Vec<Vec<String>>,
    row: Option<usize>,
    speech_rate: u8,
}

impl DiceBoard {
    /// A board on the first category with empty histories.
    pub fn new(source: RandomSource, speech_rate: u8) -> Self {
        Self {
            source,
            slot: 0,
            histories: vec![Vec::new(); Category::ALL.len()],
            row: None,
            speech_rate: speech_rate.min(MAX_SPEECH_RATE),
        }
    }

    /// Start on `category` instead of the first one. Categories the board
    /// does not offer are ignored.
    pub fn with_category(mut self, category: Category) -> Self {
        match category.index() {
            Some(slot) => {
                self.slot = slot;
                self.row = self.last_row();
            }
            None => warn!(%category, "not a board category, keeping {}", self.category()),
        }
        self
    }

    /// The active category.
    pub fn category(&self) -> Category {
        Category::ALL[self.slot]
    }

    /// Rolls recorded for `category`, oldest first. Empty for categories
    /// the board does not offer.
    pub fn history(&self, category: Category) -> &[String] {
        category
            .index()
            .map(|slot| self.histories[slot].as_slice())
            .unwrap_or_default()
    }

    /// Index of the selected roll in the active history.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// The selected roll.
    pub fn selected(&self) -> Option<&str> {
        self.row
            .and_then(|row| self.histories[self.slot].get(row))
            .map(String::as_str)
    }

    /// Current speech rate, 0 to [`MAX_SPEECH_RATE`].
    pub fn speech_rate(&self) -> u8 {
        self.speech_rate
    }

    /// The random source rolls are drawn from.
    pub fn source_mut(&mut self) -> &mut RandomSource {
        &mut self.source
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) -> Feedback {
        debug!(?action, category = %self.category(), "board action");
        match action {
            Action::PreviousRoll => self.step_row(false),
            Action::NextRoll => self.step_row(true),
            Action::PreviousCategory => self.switch_category(self.category().prev()),
            Action::NextCategory => self.switch_category(self.category().next()),
            Action::Roll => self.roll(),
            Action::Repeat => self.announce_selected(),
            Action::Copy => match self.selected() {
                Some(value) => Feedback {
                    copy: Some(value.to_string()),
                    ..Feedback::say(format!("copied {value} to the clipboard"), false)
                },
                None => Feedback::default(),
            },
            Action::Slower => self.change_rate(false),
            Action::Faster => self.change_rate(true),
            Action::Quit => Feedback {
                quit: true,
                ..Feedback::default().with_cue(Cue::Exit)
            },
        }
    }

    fn last_row(&self) -> Option<usize> {
        self.histories[self.slot].len().checked_sub(1)
    }

    fn roll_line(&self) -> Option<String> {
        let row = self.row?;
        let value = self.selected()?;
        Some(format!("roll number {}: {value}", row + 1))
    }

    fn announce_selected(&self) -> Feedback {
        match self.roll_line() {
            Some(line) => Feedback::say(line, true),
            None => Feedback::say(EMPTY_PROMPT, false),
        }
    }

    fn step_row(&mut self, forward: bool) -> Feedback {
        let (Some(row), Some(last)) = (self.row, self.last_row()) else {
            return Feedback::say(EMPTY_PROMPT, false);
        };
        let (row, cue) = match (forward, row) {
            (false, 0) => (last, Cue::Rollback),
            (false, r) => (r - 1, Cue::Change),
            (true, r) if r >= last => (0, Cue::Rollback),
            (true, r) => (r + 1, Cue::Change),
        };
        self.row = Some(row);
        self.announce_selected().with_cue(cue)
    }

    fn switch_category(&mut self, category: Category) -> Feedback {
        if let Some(slot) = category.index() {
            self.slot = slot;
            self.row = self.last_row();
        }
        Feedback::say(self.category().label(), true).with_cue(Cue::Tab)
    }

    fn roll(&mut self) -> Feedback {
        let category = self.category();
        let result = match self.source.request(&category.request()) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, %category, "roll request rejected");
                return Feedback {
                    alert: Some(e.to_string()),
                    ..Feedback::say(e.to_string(), true)
                };
            }
        };

        match category.describe(&result) {
            Ok(text) => {
                let history = &mut self.histories[self.slot];
                history.push(text);
                self.row = Some(history.len() - 1);
                let mut feedback = self.announce_selected().with_cue(category.cue());
                feedback.alert = result.alert;
                feedback
            }
            Err(e) => {
                warn!(error = %e, status = %result.status, %category, "roll produced no value");
                Feedback {
                    alert: Some(e.to_string()),
                    ..Feedback::say(e.to_string(), true)
                }
            }
        }
    }

    fn change_rate(&mut self, faster: bool) -> Feedback {
        if faster {
            if self.speech_rate >= MAX_SPEECH_RATE {
                return Feedback::say("speech rate is at max", false);
            }
            self.speech_rate += 1;
        } else {
            if self.speech_rate == 0 {
                return Feedback::say("speech rate at min", false);
            }
            self.speech_rate -= 1;
        }
        let direction = if faster { "increased" } else { "decreased" };
        Feedback {
            rate: Some(self.speech_rate),
            ..Feedback::say(
                format!("speech rate {direction} to: {}", self.speech_rate),
                true,
            )
        }
    }
}
