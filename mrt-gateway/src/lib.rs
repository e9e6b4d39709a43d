//! Jakarta MRT schedule gateway.
//!
//! Proxies the operator's station feed and re-exposes it as a small JSON
//! API: the list of stations, and the departures still to come today from
//! any one station.

pub mod config;
pub mod domain;
pub mod schedule;
pub mod service;
pub mod upstream;
pub mod web;
