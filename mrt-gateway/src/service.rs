//! Station and schedule lookup.
//!
//! Every call fetches the upstream document afresh and decodes it into
//! the shape that call needs. Nothing is cached between calls.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{DepartureView, StationView, TimeOfDay};
use crate::schedule::{ScheduleError, build_departures};
use crate::upstream::{RawSchedule, RawStation, TransitSource, UpstreamError};

/// Errors from station and schedule lookups.
///
/// Display text is what API clients see, so inner errors are surfaced
/// verbatim.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Fetching the upstream document failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Upstream body was not the expected JSON array
    #[error("invalid upstream payload: {message}")]
    Decode { message: String },

    /// No station with the requested id
    #[error("Station not found")]
    NotFound,

    /// The station's timetable could not be parsed
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Looks up stations and their upcoming departures.
#[derive(Debug, Clone)]
pub struct StationService<S> {
    source: S,
}

impl<S: TransitSource> StationService<S> {
    /// Create a service over the given upstream source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List every station, in upstream order.
    pub async fn list_stations(&self) -> Result<Vec<StationView>, LookupError> {
        let stations: Vec<RawStation> = self.fetch_decoded().await?;
        debug!(count = stations.len(), "listing stations");

        Ok(stations
            .into_iter()
            .map(|s| StationView::new(s.id, s.name))
            .collect())
    }

    /// Upcoming departures from a station, relative to the current minute.
    pub async fn schedules_for(&self, station_id: &str) -> Result<Vec<DepartureView>, LookupError> {
        self.schedules_for_at(station_id, TimeOfDay::now()).await
    }

    /// Upcoming departures from a station strictly after `now`.
    pub async fn schedules_for_at(
        &self,
        station_id: &str,
        now: TimeOfDay,
    ) -> Result<Vec<DepartureView>, LookupError> {
        let schedules: Vec<RawSchedule> = self.fetch_decoded().await?;

        // First match wins. Records with an empty id are never a target.
        let schedule = schedules
            .iter()
            .find(|s| s.station_id == station_id)
            .filter(|s| !s.station_id.is_empty())
            .ok_or(LookupError::NotFound)?;

        debug!(
            station_id,
            station_name = %schedule.station_name,
            %now,
            "building departures"
        );

        Ok(build_departures(schedule, now)?)
    }

    async fn fetch_decoded<T: DeserializeOwned>(&self) -> Result<Vec<T>, LookupError> {
        let body = self.source.fetch().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode {
            message: e.to_string(),
        })
    }
}
