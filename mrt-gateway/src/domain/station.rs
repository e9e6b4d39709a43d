//! Outward station representation.

use serde::Serialize;

/// A station as exposed by the gateway.
///
/// # Examples
///
/// ```
/// use mrt_gateway::domain::StationView;
///
/// let view = StationView::new("12", "Stasiun Blok M BCA");
/// let json = serde_json::to_string(&view).unwrap();
/// assert_eq!(json, r#"{"id":"12","name":"Stasiun Blok M BCA"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationView {
    /// Upstream station id
    pub id: String,

    /// Display name
    pub name: String,
}

impl StationView {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
