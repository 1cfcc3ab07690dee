//! Dice categories, ability rolls, and the board behind the dice roller.
//!
//! The board keeps one roll history per category and turns each user
//! action into feedback: a sound cue and a line of speech. Values come
//! from a [`td_random::RandomSource`].

pub mod abilities;
pub mod board;
pub mod category;
pub mod die;
pub mod error;
pub mod feedback;

pub use abilities::{AbilityRoll, ability_rolls};
pub use board::{DiceBoard, MAX_SPEECH_RATE};
pub use category::Category;
pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use feedback::{Action, Cue, Feedback, Speech};
