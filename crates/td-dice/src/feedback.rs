//! What the board asks its collaborators to do after an action.

/// A user action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move to the previous roll, wrapping to the newest.
    PreviousRoll,
    /// Move to the next roll, wrapping to the oldest.
    NextRoll,
    /// Switch to the previous category, wrapping.
    PreviousCategory,
    /// Switch to the next category, wrapping.
    NextCategory,
    /// Roll the active category.
    Roll,
    /// Speak the selected roll again.
    Repeat,
    /// Copy the selected roll to the clipboard.
    Copy,
    /// Lower the speech rate.
    Slower,
    /// Raise the speech rate.
    Faster,
    /// Leave the roller.
    Quit,
}

/// Short sounds accompanying actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Moved between rolls.
    Change,
    /// Wrapped around the history.
    Rollback,
    /// Switched category.
    Tab,
    /// Tossed a coin.
    Coin,
    /// Rolled a single die.
    Single,
    /// Rolled several dice at once.
    Multiple,
    /// Leaving.
    Exit,
}

/// A line to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    /// The words.
    pub text: String,
    /// Cut off whatever is being spoken first.
    pub interrupt: bool,
}

/// Everything an action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Sound to play.
    pub cue: Option<Cue>,
    /// Line to speak.
    pub speech: Option<Speech>,
    /// Text to put on the clipboard.
    pub copy: Option<String>,
    /// New speech rate, to apply and persist.
    pub rate: Option<u8>,
    /// Diagnostic from the random source worth surfacing.
    pub alert: Option<String>,
    /// The user asked to leave.
    pub quit: bool,
}

impl Feedback {
    /// Feedback that only speaks.
    pub fn say(text: impl Into<String>, interrupt: bool) -> Self {
        Self {
            speech: Some(Speech {
                text: text.into(),
                interrupt,
            }),
            ..Self::default()
        }
    }

    /// Add a cue.
    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }
}
