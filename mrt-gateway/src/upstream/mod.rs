//! Upstream transit data provider.
//!
//! The operator publishes one JSON array describing every station on the
//! line, including each station's weekday timetable. This module fetches
//! that document and defines the raw record shapes it decodes into.

mod client;
mod error;
mod types;

pub use client::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL, TransitSource, UpstreamClient, UpstreamConfig,
};
pub use error::UpstreamError;
pub use types::{RawSchedule, RawStation};
