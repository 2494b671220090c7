//! ID types for Fantasy Premier League data.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Premier League team IDs.
///
/// The upstream API numbers clubs 1..=20 within a season. Wrapping the
/// value keeps team IDs from being mixed up with costs or position codes.
///
/// # Examples
///
/// ```rust
/// use fpl_xi::TeamId;
///
/// let team = TeamId::new(14);
/// assert_eq!(team.as_u16(), 14);
/// assert_eq!(team.to_string(), "14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u16);

impl TeamId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
