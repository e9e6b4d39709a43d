//! Timetable parsing and upcoming-departure filtering.
//!
//! The upstream encodes each direction's timetable as a comma-separated
//! list of "HH:MM" times. We parse both lists, drop everything at or
//! before the current minute, and flatten what is left into one list of
//! [`DepartureView`]s: all Lebak Bulus departures first, then all
//! Bundaran HI departures. Directions are not interleaved.

use crate::domain::{DepartureView, Direction, TimeOfDay};
use crate::upstream::RawSchedule;

/// Errors from timetable parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A timetable token was not a valid "HH:MM" time
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Parse a comma-separated list of "HH:MM" times.
///
/// Segments are trimmed and empty segments skipped. Fails on the first
/// token that is not a valid time; no partial result is returned.
///
/// # Examples
///
/// ```
/// use mrt_gateway::schedule::parse_time_list;
///
/// let times = parse_time_list("05:00, 05:10,,05:20 ").unwrap();
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[1].to_string(), "05:10");
///
/// assert!(parse_time_list("").unwrap().is_empty());
/// assert!(parse_time_list("05:00,bogus").is_err());
/// ```
pub fn parse_time_list(csv: &str) -> Result<Vec<TimeOfDay>, ScheduleError> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            TimeOfDay::parse_hhmm(token)
                .map_err(|_| ScheduleError::InvalidTimeFormat(token.to_string()))
        })
        .collect()
}

/// Build the list of departures strictly after `now` for a station.
///
/// Both timetables are parsed before any filtering, so a malformed
/// Bundaran HI list fails the whole station even if every Lebak Bulus
/// departure has already left.
pub fn build_departures(
    schedule: &RawSchedule,
    now: TimeOfDay,
) -> Result<Vec<DepartureView>, ScheduleError> {
    let lebak_bulus = parse_time_list(&schedule.schedule_lebak_bulus)?;
    let bundaran_hi = parse_time_list(&schedule.schedule_bundaran_hi)?;

    let upcoming = |direction: Direction, times: Vec<TimeOfDay>| {
        times
            .into_iter()
            .filter(move |&time| time > now)
            .map(move |time| DepartureView::new(direction, time))
    };

    Ok(upcoming(Direction::LebakBulus, lebak_bulus)
        .chain(upcoming(Direction::BundaranHi, bundaran_hi))
        .collect())
}
