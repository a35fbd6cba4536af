//! The form controller: incremental validation with cascading refresh.
//!
//! One controller instance owns the form state and the cached reference
//! lists. Editing a field re-resolves it and cascades downstream: a route
//! change refetches directions then stops, a direction change refetches
//! stops. Downstream lists are cleared *before* any refetch and downstream
//! fields are re-resolved afterwards, so a field can never stay `Valid`
//! against data whose upstream dependency has changed.
//!
//! All mutating operations take `&mut self`; the web layer serializes
//! access behind a mutex, so a superseded in-flight refresh can never
//! mutate state after a newer edit has begun.

use chrono::NaiveDateTime;

use crate::arrival::{self, Arrival, TripContext};
use crate::messages;
use crate::nextrip::{NexTripError, TransitApi};
use crate::refdata::{
    DirectionEntry, RouteEntry, StopEntry, build_directions, build_routes, build_stops,
    resolve_direction, resolve_route, resolve_stop,
};

use super::field::{Field, FormState};

/// Owns the form state and drives validation against the NexTrip API.
pub struct FormController<C> {
    api: C,
    routes: Vec<RouteEntry>,
    directions: Vec<DirectionEntry>,
    stops: Vec<StopEntry>,

    /// Per-field input, codes, and messages.
    pub form: FormState,

    /// Message region next to the find button ("" unless a find was blocked).
    pub find_message: &'static str,

    /// Result of the most recent successful find.
    pub result: Option<Arrival>,

    /// One-shot failure banner, set by the web layer when a request fails.
    pub last_failure: Option<&'static str>,
}

impl<C: TransitApi> FormController<C> {
    /// Create a controller by fetching the route list.
    ///
    /// Fails if the route list is unavailable; the form is useless
    /// without it.
    pub async fn connect(api: C) -> Result<Self, NexTripError> {
        let routes = build_routes(api.routes().await?);
        Ok(Self {
            api,
            routes,
            directions: Vec::new(),
            stops: Vec::new(),
            form: FormState::default(),
            find_message: "",
            result: None,
            last_failure: None,
        })
    }

    /// The cached route list, for display.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// The cached direction list for the active route.
    pub fn directions(&self) -> &[DirectionEntry] {
        &self.directions
    }

    /// The cached stop list for the active route and direction.
    pub fn stops(&self) -> &[StopEntry] {
        &self.stops
    }

    /// The underlying API handle.
    pub fn api(&self) -> &C {
        &self.api
    }

    /// Re-fetch the route list and re-validate the whole form against it.
    ///
    /// On failure the existing list is preserved and the error returned.
    pub async fn refresh_routes(&mut self) -> Result<usize, NexTripError> {
        let fetched = build_routes(self.api.routes().await?);
        let count = fetched.len();
        self.routes = fetched;

        let raw = self.form.route.raw.clone();
        self.edit_field(Field::Route, &raw).await?;
        Ok(count)
    }

    /// Apply a user edit to one field, cascading to downstream fields.
    pub async fn edit_field(&mut self, field: Field, input: &str) -> Result<(), NexTripError> {
        let outcome = match field {
            Field::Route => self.edit_route(input).await,
            Field::Direction => self.edit_direction(input).await,
            Field::Stop => {
                self.edit_stop(input);
                Ok(())
            }
        };
        self.update_find_gate();
        outcome
    }

    /// Look up and format the next departure.
    ///
    /// Rejected with a blocking message, and no network call, unless all
    /// three fields are valid.
    pub async fn find_next_bus(&mut self, now: NaiveDateTime) -> Result<(), NexTripError> {
        let (Some(route), Some(direction), Some(stop)) = (
            self.form.route.code.clone(),
            self.form.direction.code,
            self.form.stop.code.clone(),
        ) else {
            self.find_message = messages::FIX_ERRORS;
            return Ok(());
        };
        self.find_message = "";

        let departures = self.api.departures(&route, &direction, &stop).await?;

        let context = TripContext {
            route: self
                .routes
                .iter()
                .find(|r| r.code == route)
                .map(|r| r.display.clone())
                .unwrap_or_default(),
            direction: self
                .directions
                .iter()
                .find(|d| d.code == direction)
                .map(|d| d.display.clone())
                .unwrap_or_default(),
            stop: self
                .stops
                .iter()
                .find(|s| s.code == stop)
                .map(|s| s.display.clone())
                .unwrap_or_default(),
        };

        self.result = Some(arrival::summarize(&departures, now, Some(&context)));
        Ok(())
    }

    async fn edit_route(&mut self, input: &str) -> Result<(), NexTripError> {
        self.form.route.raw = input.to_string();
        self.form.route.code = resolve_route(input, &self.routes);

        if self.form.route.raw.is_empty() || self.form.route.code.is_some() {
            self.form.route.message = messages::ROUTE_HELP;
            self.form.route.is_error = false;
        } else {
            self.form.route.message = messages::ROUTE_NOT_FOUND;
            self.form.route.is_error = true;
        }

        self.cascade_from_route().await
    }

    async fn edit_direction(&mut self, input: &str) -> Result<(), NexTripError> {
        self.form.direction.raw = input.to_string();
        self.form.direction.code = resolve_direction(input, &self.directions);
        self.apply_direction_message(messages::ROUTE_DOES_NOT_RUN_DIRECTION);

        self.cascade_from_direction().await
    }

    fn edit_stop(&mut self, input: &str) {
        self.form.stop.raw = input.to_string();
        self.form.stop.code = resolve_stop(input, &self.stops);
        self.apply_stop_message();
    }

    /// Refresh directions for the active route, then cascade to stops.
    async fn cascade_from_route(&mut self) -> Result<(), NexTripError> {
        // Discard stale downstream data before anything can match on it.
        self.directions.clear();
        self.stops.clear();

        let mut outcome = Ok(());
        if let Some(route) = self.form.route.code.clone() {
            match self.api.directions(&route).await {
                Ok(dtos) => self.directions = build_directions(dtos),
                Err(e) => outcome = Err(e),
            }
        }

        // Re-resolve the direction against the new list in every case;
        // with the list cleared a failed fetch demotes the field too.
        self.form.direction.code =
            resolve_direction(&self.form.direction.raw, &self.directions);
        self.apply_direction_message(messages::DIRECTION_NOT_FOUND_ON_ROUTE);

        match outcome {
            Ok(()) => self.cascade_from_direction().await,
            Err(e) => {
                self.form.stop.code = resolve_stop(&self.form.stop.raw, &self.stops);
                self.apply_stop_message();
                Err(e)
            }
        }
    }

    /// Refresh stops for the active route and direction.
    async fn cascade_from_direction(&mut self) -> Result<(), NexTripError> {
        self.stops.clear();

        let mut outcome = Ok(());
        if let (Some(route), Some(direction)) =
            (self.form.route.code.clone(), self.form.direction.code)
        {
            match self.api.stops(&route, &direction).await {
                Ok(dtos) => self.stops = build_stops(dtos),
                Err(e) => outcome = Err(e),
            }
        }

        self.form.stop.code = resolve_stop(&self.form.stop.raw, &self.stops);
        self.apply_stop_message();

        outcome
    }

    fn apply_direction_message(&mut self, not_found: &'static str) {
        let field = &mut self.form.direction;
        if field.raw.is_empty() || field.code.is_some() {
            field.message = messages::DIRECTION_HELP;
            field.is_error = false;
        } else if self.form.route.code.is_none() {
            field.message = messages::ENTER_VALID_ROUTE;
            field.is_error = true;
        } else {
            field.message = not_found;
            field.is_error = true;
        }
    }

    fn apply_stop_message(&mut self) {
        let field = &mut self.form.stop;
        if field.raw.is_empty() || field.code.is_some() {
            field.message = messages::STOP_HELP;
            field.is_error = false;
        } else if self.form.route.code.is_none() || self.form.direction.code.is_none() {
            field.message = messages::ENTER_VALID_ROUTE_AND_DIRECTION;
            field.is_error = true;
        } else {
            field.message = messages::STOP_NOT_FOUND;
            field.is_error = true;
        }
    }

    /// Clear the blocked-find message once the form becomes submittable.
    fn update_find_gate(&mut self) {
        if self.form.submittable() {
            self.find_message = "";
        }
    }
}
