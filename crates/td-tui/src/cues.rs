//! Short sound cues for board actions.

use std::io::{self, Write};

use td_dice::Cue;
use tracing::debug;

/// Plays a cue.
pub trait CuePlayer {
    /// Play `cue` without blocking.
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for rolls and history wrap-arounds.
#[derive(Debug, Default)]
pub struct BellCues;

impl BellCues {
    /// Cues loud enough to ring for.
    pub fn rings_for(cue: Cue) -> bool {
        matches!(cue, Cue::Coin | Cue::Single | Cue::Multiple | Cue::Rollback)
    }
}

impl CuePlayer for BellCues {
    fn play(&mut self, cue: Cue) {
        debug!(?cue, "cue");
        if Self::rings_for(cue) {
            let mut out = io::stdout();
            // A missed bell is not worth surfacing.
            let _ = out.write_all(b"\x07").and_then(|()| out.flush());
        }
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, cue: Cue) {
        debug!(?cue, "cue (silent)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_only_for_rolls_and_rollback() {
        assert!(BellCues::rings_for(Cue::Coin));
        assert!(BellCues::rings_for(Cue::Multiple));
        assert!(BellCues::rings_for(Cue::Rollback));
        assert!(!BellCues::rings_for(Cue::Change));
        assert!(!BellCues::rings_for(Cue::Tab));
        assert!(!BellCues::rings_for(Cue::Exit));
    }
}
