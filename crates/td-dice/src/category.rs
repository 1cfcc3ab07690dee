//! Roll categories, in the order the board cycles through them.

use td_random::{RandomRequest, RandomResult};

use crate::abilities::{ABILITY_COUNT, DICE_PER_ABILITY, ability_rolls};
use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::feedback::Cue;

/// What a roll produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Heads or tails.
    Coin,
    /// A single die.
    Die(Die),
    /// Six ability scores, each 4d6 dropping the lowest.
    Abilities,
}

impl Category {
    /// The board's categories in display order.
    pub const ALL: [Category; 8] = [
        Category::Coin,
        Category::Die(Die::D4),
        Category::Die(Die::D6),
        Category::Die(Die::D8),
        Category::Die(Die::D10),
        Category::Die(Die::D12),
        Category::Die(Die::D20),
        Category::Abilities,
    ];

    /// Parse a category name such as `coin`, `d20`, or `abilities`.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim().to_lowercase().as_str() {
            "coin" | "coin toss" | "coin-toss" | "flip" => Some(Category::Coin),
            "abilities" | "ability" | "stats" => Some(Category::Abilities),
            other => Die::from_str_tag(other).map(Category::Die),
        }
    }

    /// The spoken name.
    pub fn label(self) -> String {
        match self {
            Self::Coin => "coin toss".to_string(),
            Self::Die(die) => format!("roll a {die}"),
            Self::Abilities => "roll for abilities".to_string(),
        }
    }

    /// Position of this category on the board, or `None` for dice the
    /// board does not offer (such as a d30).
    pub fn index(self) -> Option<usize> {
        Category::ALL.iter().position(|c| *c == self)
    }

    /// Get the next category (wrapping). Off-board categories step to the first.
    pub fn next(self) -> Category {
        match self.index() {
            Some(idx) => Category::ALL[(idx + 1) % Category::ALL.len()],
            None => Category::ALL[0],
        }
    }

    /// Get the previous category (wrapping). Off-board categories step to the last.
    pub fn prev(self) -> Category {
        let len = Category::ALL.len();
        match self.index() {
            Some(idx) => Category::ALL[(idx + len - 1) % len],
            None => Category::ALL[len - 1],
        }
    }

    /// The request that produces one roll.
    pub fn request(self) -> RandomRequest {
        match self {
            Self::Coin => RandomRequest::integers(1, 1, 2),
            Self::Die(die) => die.request(),
            Self::Abilities => {
                RandomRequest::integers((DICE_PER_ABILITY * ABILITY_COUNT) as u32, 1, 6)
            }
        }
    }

    /// Sound accompanying a roll.
    pub fn cue(self) -> Cue {
        match self {
            Self::Coin => Cue::Coin,
            Self::Die(_) => Cue::Single,
            Self::Abilities => Cue::Multiple,
        }
    }

    /// Turn the source's values into the text recorded in the history.
    pub fn describe(self, result: &RandomResult) -> DiceResult<String> {
        if result.is_empty() {
            let alert = result
                .alert
                .clone()
                .unwrap_or_else(|| format!("no values ({})", result.status));
            return Err(DiceError::NoValues(alert));
        }
        let faces = result
            .integers()
            .ok_or_else(|| DiceError::NotAFace(result.values[0].to_string()))?;

        match self {
            Self::Coin => match single(&faces)? {
                1 => Ok("heads".to_string()),
                2 => Ok("tails".to_string()),
                other => Err(DiceError::NotAFace(other.to_string())),
            },
            Self::Die(die) => {
                let face = single(&faces)?;
                if die.has_face(face) {
                    Ok(face.to_string())
                } else {
                    Err(DiceError::NotAFace(face.to_string()))
                }
            }
            Self::Abilities => {
                let scores: Vec<String> = ability_rolls(&faces)?
                    .iter()
                    .map(|roll| roll.score().to_string())
                    .collect();
                Ok(scores.join(" "))
            }
        }
    }
}

fn single(faces: &[i64]) -> DiceResult<i64> {
    match faces {
        [face] => Ok(*face),
        _ => Err(DiceError::WrongCount {
            expected: 1,
            got: faces.len(),
        }),
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_random::{Origin, Status, Value};

    fn ints(values: &[i64]) -> RandomResult {
        RandomResult::success(
            values.iter().copied().map(Value::Integer).collect(),
            Origin::Remote,
        )
    }

    #[test]
    fn labels() {
        let labels: Vec<String> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "coin toss",
                "roll a d4",
                "roll a d6",
                "roll a d8",
                "roll a d10",
                "roll a d12",
                "roll a d20",
                "roll for abilities",
            ]
        );
    }

    #[test]
    fn wraps_both_ways() {
        assert_eq!(Category::Abilities.next(), Category::Coin);
        assert_eq!(Category::Coin.prev(), Category::Abilities);
        assert_eq!(Category::Coin.next(), Category::Die(Die::D4));
    }

    #[test]
    fn off_board_dice_have_no_index() {
        let d30 = Category::Die(Die::Custom(30));
        assert_eq!(d30.index(), None);
        assert_eq!(Category::from_name("d100").and_then(Category::index), None);
        assert_eq!(d30.next(), Category::Coin);
        assert_eq!(d30.prev(), Category::Abilities);
        assert_eq!(Category::Abilities.index(), Some(7));
    }

    #[test]
    fn from_name() {
        assert_eq!(Category::from_name("coin"), Some(Category::Coin));
        assert_eq!(Category::from_name("D20"), Some(Category::Die(Die::D20)));
        assert_eq!(Category::from_name("d7"), Some(Category::Die(Die::Custom(7))));
        assert_eq!(Category::from_name("abilities"), Some(Category::Abilities));
        assert_eq!(Category::from_name("dice"), None);
    }

    #[test]
    fn requests() {
        let coin = Category::Coin.request();
        assert_eq!((coin.num, coin.min, coin.max), (1, 1, 2));
        let d12 = Category::Die(Die::D12).request();
        assert_eq!((d12.num, d12.min, d12.max), (1, 1, 12));
        let abilities = Category::Abilities.request();
        assert_eq!((abilities.num, abilities.min, abilities.max), (24, 1, 6));
        for category in Category::ALL {
            assert!(category.request().validate().is_ok());
        }
    }

    #[test]
    fn describe_coin() {
        assert_eq!(Category::Coin.describe(&ints(&[1])).unwrap(), "heads");
        assert_eq!(Category::Coin.describe(&ints(&[2])).unwrap(), "tails");
        assert!(Category::Coin.describe(&ints(&[3])).is_err());
    }

    #[test]
    fn describe_die() {
        let d6 = Category::Die(Die::D6);
        assert_eq!(d6.describe(&ints(&[4])).unwrap(), "4");
        assert!(d6.describe(&ints(&[7])).is_err());
        assert!(matches!(
            d6.describe(&ints(&[1, 2])),
            Err(DiceError::WrongCount { expected: 1, got: 2 })
        ));
    }

    #[test]
    fn describe_abilities() {
        let faces = [
            6, 6, 6, 1, 1, 1, 1, 1, 3, 4, 5, 2, 2, 2, 2, 2, 6, 5, 4, 3, 1, 6, 1, 6,
        ];
        assert_eq!(
            Category::Abilities.describe(&ints(&faces)).unwrap(),
            "18 3 12 6 15 13"
        );
    }

    #[test]
    fn describe_failure_uses_alert() {
        let failed = RandomResult::failure(Status::RemoteError(503), "Error: try later");
        match Category::Coin.describe(&failed) {
            Err(DiceError::NoValues(alert)) => assert_eq!(alert, "Error: try later"),
            other => panic!("expected NoValues, got {other:?}"),
        }
    }

    #[test]
    fn describe_text_values_rejected() {
        let text = RandomResult::success(vec![Value::Text("<html>".into())], Origin::Remote);
        assert!(matches!(
            Category::Die(Die::D4).describe(&text),
            Err(DiceError::NotAFace(_))
        ));
    }
}
