//! Time-of-day handling for MRT timetables.
//!
//! The upstream publishes departures as "HH:MM" strings with no date or
//! timezone. This module provides a validated minute-resolution type for
//! working with them.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute resolution.
///
/// Ordering is chronological within a single day, which for zero-padded
/// "HH:MM" strings is the same as lexicographic ordering.
///
/// # Examples
///
/// ```
/// use mrt_gateway::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse_hhmm("05:30").unwrap();
/// assert_eq!(time.to_string(), "05:30");
/// assert!(time < TimeOfDay::parse_hhmm("13:00").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from strict "HH:MM" (24-hour) format.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrt_gateway::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("5:30").is_err());
    /// assert!(TimeOfDay::parse_hhmm("0530").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// The current local wall-clock time, truncated to the minute.
    pub fn now() -> Self {
        Self::from_naive(Local::now().time())
    }

    /// Truncate a `NaiveTime` to minute resolution.
    pub fn from_naive(time: NaiveTime) -> Self {
        // hour/minute of a valid NaiveTime are always in range
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
