//! Train directions and upcoming departures.

use std::fmt;

use serde::{Serialize, Serializer};

use super::TimeOfDay;

/// One of the two directions served by the North-South line.
///
/// Each direction is named after its terminus. The label is what riders
/// see on the platform, so it is what the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Southbound, terminating at Lebak Bulus.
    LebakBulus,
    /// Northbound, terminating at Bundaran HI.
    BundaranHi,
}

impl Direction {
    /// Fixed human-readable label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::LebakBulus => "Stasiun Lebak Bulus Grab",
            Direction::BundaranHi => "Stasiun Bundaran HI Bank DKI",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An upcoming departure in one direction.
///
/// Serialises as `{"station": <direction label>, "time": "HH:MM"}`. The
/// `station` key names the direction's terminus, not the station queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureView {
    #[serde(rename = "station", serialize_with = "serialize_label")]
    pub direction: Direction,

    #[serde(serialize_with = "serialize_time")]
    pub time: TimeOfDay,
}

impl DepartureView {
    pub fn new(direction: Direction, time: TimeOfDay) -> Self {
        Self { direction, time }
    }

    /// Direction label shown to riders.
    pub fn label(&self) -> &'static str {
        self.direction.label()
    }
}

fn serialize_label<S: Serializer>(direction: &Direction, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(direction.label())
}

fn serialize_time<S: Serializer>(time: &TimeOfDay, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(time)
}
