//! Player availability as reported by the upstream `status` field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Availability of a player for the next gameweek.
///
/// Upstream encodes this as a single letter; anything unrecognised is
/// kept as [`Availability::Other`] so new codes never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Availability {
    /// `a`
    Available,
    /// `d` - 25/50/75% chance of playing
    Doubtful,
    /// `i`
    Injured,
    /// `s`
    Suspended,
    /// `u` - loaned out or left the league
    Unavailable,
    /// `n` - not in squad
    NotInSquad,
    Other(String),
}

impl Availability {
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => Availability::Available,
            "d" => Availability::Doubtful,
            "i" => Availability::Injured,
            "s" => Availability::Suspended,
            "u" => Availability::Unavailable,
            "n" => Availability::NotInSquad,
            other => Availability::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Availability::Available => "a",
            Availability::Doubtful => "d",
            Availability::Injured => "i",
            Availability::Suspended => "s",
            Availability::Unavailable => "u",
            Availability::NotInSquad => "n",
            Availability::Other(code) => code,
        }
    }

    /// Players that may be picked: available or doubtful.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Availability::Available | Availability::Doubtful)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Availability::Available => "Available",
            Availability::Doubtful => "Doubtful",
            Availability::Injured => "Injured",
            Availability::Suspended => "Suspended",
            Availability::Unavailable => "Unavailable",
            Availability::NotInSquad => "Not in squad",
            Availability::Other(code) => return write!(f, "Unknown ({})", code),
        };
        write!(f, "{}", s)
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Availability::from_code(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Availability::from_code("a"), Availability::Available);
        assert_eq!(Availability::from_code("d"), Availability::Doubtful);
        assert_eq!(Availability::from_code("i"), Availability::Injured);
        assert_eq!(Availability::from_code("s"), Availability::Suspended);
        assert_eq!(Availability::from_code("u"), Availability::Unavailable);
        assert_eq!(Availability::from_code("n"), Availability::NotInSquad);
        assert_eq!(
            Availability::from_code("x"),
            Availability::Other("x".to_string())
        );
    }

    #[test]
    fn test_is_selectable() {
        assert!(Availability::Available.is_selectable());
        assert!(Availability::Doubtful.is_selectable());
        assert!(!Availability::Injured.is_selectable());
        assert!(!Availability::Suspended.is_selectable());
        assert!(!Availability::Unavailable.is_selectable());
        assert!(!Availability::NotInSquad.is_selectable());
        assert!(!Availability::Other("x".to_string()).is_selectable());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Availability::Doubtful).unwrap();
        assert_eq!(json, "\"d\"");

        let status: Availability = serde_json::from_str("\"i\"").unwrap();
        assert_eq!(status, Availability::Injured);
    }

    #[test]
    fn test_display() {
        assert_eq!(Availability::NotInSquad.to_string(), "Not in squad");
        assert_eq!(Availability::Other("z".into()).to_string(), "Unknown (z)");
    }
}
