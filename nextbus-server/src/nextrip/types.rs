//! Wire types for NexTrip API responses.

use serde::{Deserialize, Serialize};

/// A route as returned by `GET /Routes`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteDto {
    /// The route code, e.g. "901".
    pub route: String,
    /// Human-readable route name, e.g. "METRO Blue Line".
    pub description: String,
    /// Operating agency identifier.
    #[serde(rename = "ProviderID")]
    pub provider_id: String,
}

/// A direction as returned by `GET /Directions/{route}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectionDto {
    /// The direction code, "1" through "4".
    pub value: String,
    /// Display name, e.g. "SOUTHBOUND".
    pub text: String,
}

/// A stop as returned by `GET /Stops/{route}/{direction}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopDto {
    /// The stop code, e.g. "MAAM".
    pub value: String,
    /// Display name, e.g. "Mall of America Station".
    pub text: String,
}

/// A timepoint departure as returned by `GET /{route}/{direction}/{stop}`.
///
/// Both fields are optional because the feed occasionally omits them;
/// the arrival formatter treats a record missing either as a failed
/// response rather than panicking.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartureDto {
    /// True when `departure_text` is a live countdown ("5 Min", "Due");
    /// false when it is a scheduled "H:MM" clock time.
    pub actual: Option<bool>,
    /// The departure time in one of the two formats above.
    pub departure_text: Option<String>,
}

impl DepartureDto {
    /// Convenience constructor for a fully populated record.
    pub fn new(actual: bool, departure_text: impl Into<String>) -> Self {
        Self {
            actual: Some(actual),
            departure_text: Some(departure_text.into()),
        }
    }
}
