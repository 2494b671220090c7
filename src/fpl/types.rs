use crate::cli::types::{Availability, Position, TeamId};
use crate::error::FplError;
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// `ep_next` arrives as a decimal string ("4.5"), occasionally as a
/// number, and as `null` before fixtures are known.
fn de_decimal_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Raw::Num(n)) => Ok(n),
        Some(Raw::Str(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Raw::Str(s)) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// Top-level envelope of `bootstrap-static`. Only `elements` is needed.
#[derive(Debug, Deserialize)]
pub struct BootstrapStatic {
    pub elements: Vec<Element>,
}

/// One player entry as the upstream API names its fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    pub web_name: String,
    pub team: u16,
    pub element_type: u8,
    pub now_cost: i64,
    #[serde(deserialize_with = "de_decimal_or_null", default)]
    pub ep_next: f64,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub event_points: i32,
    pub status: Availability,
}

/// Strongly typed player record.
///
/// Invariants: `position` is a squad position and `cost > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,
    pub team: TeamId,
    pub position: Position,
    pub cost: u32,
    pub ep_next: f64,
    pub total_points: i32,
    pub event_points: i32,
    pub status: Availability,
}

impl TryFrom<Element> for PlayerRecord {
    type Error = FplError;

    fn try_from(el: Element) -> Result<Self, Self::Error> {
        let position = Position::try_from(el.element_type)?;
        let cost = u32::try_from(el.now_cost)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(FplError::InvalidCost { cost: el.now_cost })?;

        Ok(Self {
            first_name: el.first_name,
            second_name: el.second_name,
            web_name: el.web_name,
            team: TeamId::new(el.team),
            position,
            cost,
            ep_next: el.ep_next,
            total_points: el.total_points,
            event_points: el.event_points,
            status: el.status,
        })
    }
}
