//! Mock NexTrip client for testing without network access.
//!
//! Serves fixture data from memory as if it were live API responses,
//! and counts calls so tests can assert which requests were (not) made.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{DirectionCode, RouteCode, StopCode};

use super::error::NexTripError;
use super::types::{DepartureDto, DirectionDto, RouteDto, StopDto};
use super::TransitApi;

/// Mock transit API backed by in-memory fixtures.
#[derive(Default)]
pub struct MockTransit {
    routes: Vec<RouteDto>,
    directions: HashMap<RouteCode, Vec<DirectionDto>>,
    stops: HashMap<(RouteCode, DirectionCode), Vec<StopDto>>,
    departures: HashMap<(RouteCode, DirectionCode, StopCode), Vec<DepartureDto>>,

    fail_routes: bool,
    fail_directions: bool,
    fail_stops: bool,
    fail_departures: bool,

    route_calls: AtomicUsize,
    direction_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    departure_calls: AtomicUsize,
}

impl MockTransit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the fixture.
    pub fn with_route(mut self, code: &str, description: &str) -> Self {
        self.routes.push(RouteDto {
            route: code.to_string(),
            description: description.to_string(),
            provider_id: "8".to_string(),
        });
        self
    }

    /// Set the directions served for a route.
    pub fn with_directions(mut self, route: RouteCode, directions: &[(&str, &str)]) -> Self {
        let dtos = directions
            .iter()
            .map(|(value, text)| DirectionDto {
                value: value.to_string(),
                text: text.to_string(),
            })
            .collect();
        self.directions.insert(route, dtos);
        self
    }

    /// Set the stops served for a route and direction.
    pub fn with_stops(
        mut self,
        route: RouteCode,
        direction: DirectionCode,
        stops: &[(&str, &str)],
    ) -> Self {
        let dtos = stops
            .iter()
            .map(|(value, text)| StopDto {
                value: value.to_string(),
                text: text.to_string(),
            })
            .collect();
        self.stops.insert((route, direction), dtos);
        self
    }

    /// Set the departures served for a stop.
    pub fn with_departures(
        mut self,
        route: RouteCode,
        direction: DirectionCode,
        stop: StopCode,
        departures: Vec<DepartureDto>,
    ) -> Self {
        self.departures.insert((route, direction, stop), departures);
        self
    }

    /// Make the `/Routes` call fail.
    pub fn failing_routes(mut self) -> Self {
        self.fail_routes = true;
        self
    }

    /// Make the `/Directions` call fail.
    pub fn failing_directions(mut self) -> Self {
        self.fail_directions = true;
        self
    }

    /// Make the `/Stops` call fail.
    pub fn failing_stops(mut self) -> Self {
        self.fail_stops = true;
        self
    }

    /// Make the departures call fail.
    pub fn failing_departures(mut self) -> Self {
        self.fail_departures = true;
        self
    }

    /// Number of departure requests made so far.
    pub fn departure_calls(&self) -> usize {
        self.departure_calls.load(Ordering::SeqCst)
    }

    /// Number of direction-list requests made so far.
    pub fn direction_calls(&self) -> usize {
        self.direction_calls.load(Ordering::SeqCst)
    }

    /// Number of stop-list requests made so far.
    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    /// Number of route-list requests made so far.
    pub fn route_calls(&self) -> usize {
        self.route_calls.load(Ordering::SeqCst)
    }

    fn failure() -> NexTripError {
        NexTripError::Api {
            status: 500,
            message: "mock failure".to_string(),
        }
    }
}

impl TransitApi for MockTransit {
    async fn routes(&self) -> Result<Vec<RouteDto>, NexTripError> {
        self.route_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_routes {
            return Err(Self::failure());
        }
        Ok(self.routes.clone())
    }

    async fn directions(&self, route: &RouteCode) -> Result<Vec<DirectionDto>, NexTripError> {
        self.direction_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_directions {
            return Err(Self::failure());
        }
        Ok(self.directions.get(route).cloned().unwrap_or_default())
    }

    async fn stops(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
    ) -> Result<Vec<StopDto>, NexTripError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_stops {
            return Err(Self::failure());
        }
        Ok(self
            .stops
            .get(&(route.clone(), *direction))
            .cloned()
            .unwrap_or_default())
    }

    async fn departures(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
        stop: &StopCode,
    ) -> Result<Vec<DepartureDto>, NexTripError> {
        self.departure_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_departures {
            return Err(Self::failure());
        }
        Ok(self
            .departures
            .get(&(route.clone(), *direction, stop.clone()))
            .cloned()
            .unwrap_or_default())
    }
}
