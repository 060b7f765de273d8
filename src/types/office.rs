use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::geo::{web_mercator_to_lat_lng, LatLng};

/// Office identifiers arrive either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfficeId {
    Number(i64),
    Text(String),
}

/// A single office record as served by the directory API.
///
/// Only the attributes this crate reads are typed, and every typed attribute
/// may be null. Everything else (`gov_code`, `postal_code`, ...) is kept in
/// `extra` so a record survives a cache round trip unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Office {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OfficeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    /// WebMercator easting.
    #[serde(default, deserialize_with = "loose_coordinate", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// WebMercator northing.
    #[serde(default, deserialize_with = "loose_coordinate", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Office {
    pub fn new(id: OfficeId, name: impl Into<String>) -> Self {
        Office {
            id: Some(id),
            name: Some(name.into()),
            ..Office::default()
        }
    }

    /// Both non-empty phone numbers, `phone1` first.
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        [self.phone1.as_deref(), self.phone2.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
    }

    pub fn lat_lng(&self) -> Option<LatLng> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(web_mercator_to_lat_lng(x, y)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(Number),
    Text(String),
    Other(Value),
}

// Phones are stored as text but some backends hand them out as numbers.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Some(n.to_string()),
        Loose::Text(s) => Some(s),
        Loose::Other(_) => None,
    })
}

// DECIMAL columns come back as strings. Anything that is not a finite number
// is treated as a missing coordinate rather than a bad record.
fn loose_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Loose::deserialize(deserializer)? {
        Loose::Number(n) => n.as_f64(),
        Loose::Text(s) => s.trim().parse::<f64>().ok(),
        Loose::Other(_) => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// An office picked for a featured selection, tagged with the governorate it
/// was drawn from. The tag is not part of the office's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedOffice {
    #[serde(flatten)]
    pub office: Office,
    #[serde(rename = "govName")]
    pub gov_name: String,
}
