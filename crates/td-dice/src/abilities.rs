//! Ability score rolls: 4d6, drop the lowest.

use crate::error::{DiceError, DiceResult};

/// Dice rolled per ability.
pub const DICE_PER_ABILITY: usize = 4;
/// Abilities rolled per character.
pub const ABILITY_COUNT: usize = 6;

/// Four d6 rolled for one ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityRoll {
    /// The faces rolled, in roll order.
    pub dice: [u32; DICE_PER_ABILITY],
}

impl AbilityRoll {
    /// Sum of all four dice.
    pub fn total(&self) -> u32 {
        self.dice.iter().sum()
    }

    /// The lowest die, which is dropped.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().copied().min().unwrap_or(0)
    }

    /// The ability score: the three highest dice.
    pub fn score(&self) -> u32 {
        self.total() - self.lowest()
    }
}

impl std::fmt::Display for AbilityRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.score())
    }
}

/// Group 24 d6 faces into six ability rolls.
pub fn ability_rolls(faces: &[i64]) -> DiceResult<Vec<AbilityRoll>> {
    let expected = DICE_PER_ABILITY * ABILITY_COUNT;
    if faces.len() != expected {
        return Err(DiceError::WrongCount {
            expected,
            got: faces.len(),
        });
    }
    faces
        .chunks_exact(DICE_PER_ABILITY)
        .map(|chunk| {
            let mut dice = [0u32; DICE_PER_ABILITY];
            for (slot, face) in dice.iter_mut().zip(chunk) {
                *slot = u32::try_from(*face)
                    .ok()
                    .filter(|f| (1..=6).contains(f))
                    .ok_or_else(|| DiceError::NotAFace(face.to_string()))?;
            }
            Ok(AbilityRoll { dice })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn drops_lowest() {
        let roll = AbilityRoll { dice: [3, 6, 1, 5] };
        assert_eq!(roll.total(), 15);
        assert_eq!(roll.lowest(), 1);
        assert_eq!(roll.score(), 14);
    }

    #[test]
    fn drops_only_one_of_equal_lowest() {
        let roll = AbilityRoll { dice: [2, 2, 2, 2] };
        assert_eq!(roll.score(), 6);
    }

    #[test]
    fn display() {
        let roll = AbilityRoll { dice: [4, 4, 6, 1] };
        assert_eq!(roll.to_string(), "[4, 4, 6, 1] = 14");
    }

    #[test]
    fn groups_in_order() {
        let faces: Vec<i64> = (0..24).map(|i| i % 6 + 1).collect();
        let rolls = ability_rolls(&faces).unwrap();
        assert_eq!(rolls.len(), 6);
        assert_eq!(rolls[0].dice, [1, 2, 3, 4]);
        assert_eq!(rolls[1].dice, [5, 6, 1, 2]);
        assert_eq!(rolls[0].score(), 9);
    }

    #[test]
    fn wrong_count_rejected() {
        assert!(matches!(
            ability_rolls(&[1, 2, 3]),
            Err(DiceError::WrongCount { expected: 24, got: 3 })
        ));
    }

    #[test]
    fn non_face_rejected() {
        let mut faces = vec![3i64; 24];
        faces[5] = 7;
        assert!(matches!(ability_rolls(&faces), Err(DiceError::NotAFace(_))));
        faces[5] = -1;
        assert!(matches!(ability_rolls(&faces), Err(DiceError::NotAFace(_))));
    }

    proptest! {
        #[test]
        fn scores_between_3_and_18(faces in proptest::collection::vec(1i64..=6, 24)) {
            let rolls = ability_rolls(&faces).unwrap();
            prop_assert_eq!(rolls.len(), 6);
            for roll in rolls {
                prop_assert!((3..=18).contains(&roll.score()));
            }
        }
    }
}
