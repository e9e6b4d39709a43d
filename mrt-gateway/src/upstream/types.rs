//! Raw upstream record types.
//!
//! The upstream serves one JSON array. Each element is decoded twice,
//! once as a [`RawStation`] and once as a [`RawSchedule`], depending on
//! which endpoint is being served. Field names follow the upstream's
//! Indonesian naming; we rename them here so the rest of the crate never
//! sees them.
//!
//! Missing fields and `null` strings decode as empty strings. Unknown
//! fields are ignored.

use serde::{Deserialize, Deserializer};

/// Minimal station record - only id and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawStation {
    #[serde(rename = "nid", default, deserialize_with = "null_as_empty")]
    pub id: String,

    #[serde(rename = "title", default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Station record with its weekday timetable for both directions.
///
/// Timetables are comma-separated "HH:MM" lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSchedule {
    /// Join key against the requested station id
    #[serde(rename = "nid", default, deserialize_with = "null_as_empty")]
    pub station_id: String,

    /// Upstream station title, kept for logging only
    #[serde(rename = "title", default, deserialize_with = "null_as_empty")]
    pub station_name: String,

    /// Departures towards Lebak Bulus
    #[serde(rename = "jadwal_lb_biasa", default, deserialize_with = "null_as_empty")]
    pub schedule_lebak_bulus: String,

    /// Departures towards Bundaran HI
    #[serde(rename = "jadwal_hi_biasa", default, deserialize_with = "null_as_empty")]
    pub schedule_bundaran_hi: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
