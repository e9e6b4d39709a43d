//! Domain types for the MRT gateway.
//!
//! Validated values that the rest of the crate can trust: times of day,
//! train directions, and the outward station and departure views.

mod departure;
mod station;
mod time;

pub use departure::{DepartureView, Direction};
pub use station::StationView;
pub use time::{TimeError, TimeOfDay};
