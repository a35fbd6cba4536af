//! Compass direction vocabulary.

use std::fmt;

use super::code::DirectionCode;

/// One of the four compass words the user may type for a direction.
///
/// The NexTrip API encodes these as the fixed numeric codes south=1,
/// east=2, west=3, north=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    South,
    East,
    West,
    North,
}

impl Compass {
    /// Parse a compass word, case-insensitively.
    ///
    /// Anything outside the four-word vocabulary is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "north" => Some(Self::North),
            _ => None,
        }
    }

    /// The API direction code for this compass word.
    pub fn code(self) -> DirectionCode {
        match self {
            Self::South => DirectionCode::SOUTH,
            Self::East => DirectionCode::EAST,
            Self::West => DirectionCode::WEST,
            Self::North => DirectionCode::NORTH,
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::North => "north",
        };
        f.write_str(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Compass::parse("south"), Some(Compass::South));
        assert_eq!(Compass::parse("SOUTH"), Some(Compass::South));
        assert_eq!(Compass::parse("North"), Some(Compass::North));
    }

    #[test]
    fn parse_rejects_unknown_words() {
        assert_eq!(Compass::parse(""), None);
        assert_eq!(Compass::parse("northeast"), None);
        assert_eq!(Compass::parse("up"), None);
        assert_eq!(Compass::parse("1"), None);
    }

    #[test]
    fn fixed_code_mapping() {
        assert_eq!(Compass::South.code().as_str(), "1");
        assert_eq!(Compass::East.code().as_str(), "2");
        assert_eq!(Compass::West.code().as_str(), "3");
        assert_eq!(Compass::North.code().as_str(), "4");
    }
}
