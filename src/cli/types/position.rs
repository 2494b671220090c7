//! Fantasy Premier League position types and utilities.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Squad positions in Fantasy Premier League.
///
/// The upstream API identifies positions by `element_type`:
///
/// - **1**: Goalkeeper
/// - **2**: Defender
/// - **3**: Midfielder
/// - **4**: Forward
///
/// # Examples
///
/// ```rust
/// use fpl_xi::Position;
///
/// let gk = Position::try_from(1).unwrap();
/// assert_eq!(gk, Position::GK);
/// assert_eq!(gk.to_string(), "GK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// All positions in squad order.
    pub const ALL: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::FWD];

    /// Convert an upstream `element_type` code to a Position.
    pub fn try_from(code: u8) -> Result<Self, FplError> {
        match code {
            1 => Ok(Position::GK),
            2 => Ok(Position::DEF),
            3 => Ok(Position::MID),
            4 => Ok(Position::FWD),
            _ => Err(FplError::InvalidPosition {
                code: code.to_string(),
            }),
        }
    }

    /// The upstream `element_type` code for this position.
    pub fn code(&self) -> u8 {
        match self {
            Position::GK => 1,
            Position::DEF => 2,
            Position::MID => 3,
            Position::FWD => 4,
        }
    }

    /// Display label used in lineup output.
    pub fn label(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "GKP" | "1" => Ok(Position::GK),
            "DEF" | "2" => Ok(Position::DEF),
            "MID" | "3" => Ok(Position::MID),
            "FWD" | "4" => Ok(Position::FWD),
            _ => Err(FplError::InvalidPosition {
                code: s.to_string(),
            }),
        }
    }
}
