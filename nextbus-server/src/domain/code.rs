//! Opaque identifier types for the NexTrip API.
//!
//! The API identifies routes, directions, and stops by short codes that are
//! distinct from their human-readable names ("901" vs "METRO Blue Line").
//! These newtypes guarantee a code is well-formed by construction.

use std::fmt;

/// Error returned when parsing an invalid code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid code: {reason}")]
pub struct InvalidCode {
    reason: &'static str,
}

/// Codes are short, non-empty, ASCII-alphanumeric strings.
fn validate(s: &str) -> Result<(), InvalidCode> {
    if s.is_empty() {
        return Err(InvalidCode {
            reason: "must be non-empty",
        });
    }
    if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(InvalidCode {
            reason: "must be ASCII alphanumeric",
        });
    }
    Ok(())
}

/// A NexTrip route code (e.g. "901" for the METRO Blue Line).
///
/// # Examples
///
/// ```
/// use nextbus_server::domain::RouteCode;
///
/// let blue = RouteCode::parse("901").unwrap();
/// assert_eq!(blue.as_str(), "901");
///
/// assert!(RouteCode::parse("").is_err());
/// assert!(RouteCode::parse("90 1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteCode(String);

impl RouteCode {
    /// Parse a route code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A NexTrip direction code.
///
/// The API uses the fixed numeric vocabulary south=1, east=2, west=3,
/// north=4, so only those four values are constructible.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionCode(u8);

impl DirectionCode {
    pub const SOUTH: DirectionCode = DirectionCode(1);
    pub const EAST: DirectionCode = DirectionCode(2);
    pub const WEST: DirectionCode = DirectionCode(3);
    pub const NORTH: DirectionCode = DirectionCode(4);

    /// Parse a direction code from the API's string form ("1" through "4").
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        match s {
            "1" => Ok(Self::SOUTH),
            "2" => Ok(Self::EAST),
            "3" => Ok(Self::WEST),
            "4" => Ok(Self::NORTH),
            _ => Err(InvalidCode {
                reason: "direction code must be 1-4",
            }),
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &'static str {
        // Only 1..=4 is constructible
        match self.0 {
            1 => "1",
            2 => "2",
            3 => "3",
            _ => "4",
        }
    }
}

impl fmt::Debug for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectionCode({})", self.0)
    }
}

impl fmt::Display for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A NexTrip stop code (e.g. "MAAM" for Mall of America Station).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
