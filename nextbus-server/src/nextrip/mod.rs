//! Metro Transit NexTrip API client.
//!
//! This module provides an HTTP client for the NexTrip REST API, which
//! serves route, direction, and stop reference data plus live timepoint
//! departures.
//!
//! Key characteristics of NexTrip:
//! - Plain unauthenticated GET requests, JSON responses
//! - Departure times are either a live countdown string ("5 Min", "Due")
//!   or a scheduled "H:MM" clock time, flagged by the `Actual` field
//! - Reference lists are small and change rarely, so responses are safe
//!   to cache briefly (see [`crate::cache`])

mod client;
mod error;
pub mod mock;
mod types;

use std::future::Future;

use crate::domain::{DirectionCode, RouteCode, StopCode};

pub use client::{NexTripClient, NexTripConfig};
pub use error::NexTripError;
pub use types::{DepartureDto, DirectionDto, RouteDto, StopDto};

/// The four NexTrip operations, abstracted so the form controller can be
/// driven by the real client, the caching wrapper, or an in-memory mock.
pub trait TransitApi: Send + Sync {
    /// List all routes.
    fn routes(&self) -> impl Future<Output = Result<Vec<RouteDto>, NexTripError>> + Send;

    /// List the directions a route runs.
    fn directions(
        &self,
        route: &RouteCode,
    ) -> impl Future<Output = Result<Vec<DirectionDto>, NexTripError>> + Send;

    /// List the stops on a route in a direction.
    fn stops(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
    ) -> impl Future<Output = Result<Vec<StopDto>, NexTripError>> + Send;

    /// List the upcoming timepoint departures for a stop.
    fn departures(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
        stop: &StopCode,
    ) -> impl Future<Output = Result<Vec<DepartureDto>, NexTripError>> + Send;
}
