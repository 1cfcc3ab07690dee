//! Dice the roller can ask the random source for.

use td_random::RandomRequest;
use td_random::request::MAX_BOUND;

/// A die, named by how many faces it has.
///
/// The board's dice have their own variants; any other face count from 2
/// up to the service's bound is `Custom`. Parsing always picks the named
/// variant when one exists, so `d6` never becomes `Custom(6)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// d4.
    D4,
    /// d6.
    D6,
    /// d8.
    D8,
    /// d10.
    D10,
    /// d12.
    D12,
    /// d20.
    D20,
    /// Any other number of faces.
    Custom(u32),
}

impl Die {
    /// The named dice, smallest first.
    pub const STANDARD: [Die; 6] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12, Die::D20];

    /// Number of faces.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::Custom(n) => n,
        }
    }

    /// The die with `sides` faces, if the service can roll it.
    pub fn from_sides(sides: u32) -> Option<Die> {
        if sides < 2 || i64::from(sides) > MAX_BOUND {
            return None;
        }
        Some(
            Die::STANDARD
                .into_iter()
                .find(|d| d.sides() == sides)
                .unwrap_or(Die::Custom(sides)),
        )
    }

    /// Parse a tag such as `d20` or `D30`.
    pub fn from_str_tag(s: &str) -> Option<Die> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d')?.parse::<u32>().ok()?;
        Die::from_sides(sides)
    }

    /// One roll of this die: a single integer in `[1, sides]`.
    pub fn request(self) -> RandomRequest {
        RandomRequest::integers(1, 1, i64::from(self.sides()))
    }

    /// Whether `face` can come up on this die.
    pub fn has_face(self, face: i64) -> bool {
        (1..=i64::from(self.sides())).contains(&face)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_prefers_named_dice() {
        assert_eq!(Die::from_str_tag("d20"), Some(Die::D20));
        assert_eq!(Die::from_str_tag(" D6 "), Some(Die::D6));
        assert_eq!(Die::from_sides(12), Some(Die::D12));
        assert_eq!(Die::from_str_tag("d100"), Some(Die::Custom(100)));
        assert_eq!(Die::from_str_tag("d30"), Some(Die::Custom(30)));
    }

    #[test]
    fn rejects_unrollable_dice() {
        assert_eq!(Die::from_str_tag("d1"), None);
        assert_eq!(Die::from_str_tag("d0"), None);
        assert_eq!(Die::from_str_tag("d"), None);
        assert_eq!(Die::from_str_tag("coin"), None);
        assert_eq!(Die::from_sides(1_000_000_001), None);
        assert_eq!(Die::from_sides(1_000_000_000), Some(Die::Custom(1_000_000_000)));
    }

    #[test]
    fn request_covers_every_face() {
        for die in Die::STANDARD {
            let req = die.request();
            assert_eq!((req.num, req.min, req.max), (1, 1, i64::from(die.sides())));
            assert!(req.validate().is_ok());
        }
    }

    #[test]
    fn faces_and_display() {
        assert!(Die::D4.has_face(4));
        assert!(!Die::D4.has_face(5));
        assert!(!Die::D4.has_face(0));
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::Custom(30).to_string(), "d30");
    }
}
