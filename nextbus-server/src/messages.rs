//! User-facing message strings.
//!
//! These strings are part of the observable contract of the form: tests
//! and the web layer both reference them, so they live in one place.

/// Default help text for the route field.
pub const ROUTE_HELP: &str = "Enter the name of a route from below (or part of the name)";

/// Default help text for the direction field.
pub const DIRECTION_HELP: &str = "Enter the direction on the route (north, south, east, west)";

/// Default help text for the stop field.
pub const STOP_HELP: &str = "Enter the stop on the route";

/// Route input does not resolve to exactly one route.
pub const ROUTE_NOT_FOUND: &str = "Route Not Found";

/// Direction entered while the route is unresolved.
pub const ENTER_VALID_ROUTE: &str = "Enter a valid Route";

/// Direction word is valid but the route does not run that way.
pub const ROUTE_DOES_NOT_RUN_DIRECTION: &str = "Route Does not run that direction";

/// Previously entered direction no longer matches after a route change.
pub const DIRECTION_NOT_FOUND_ON_ROUTE: &str = "Direction Not Found on Route";

/// Stop entered while route or direction is unresolved.
pub const ENTER_VALID_ROUTE_AND_DIRECTION: &str = "Enter a valid Route and Direction";

/// Stop input does not resolve to exactly one stop.
pub const STOP_NOT_FOUND: &str = "Stop Not Found on Route in Direction";

/// Find requested while some field is not valid.
pub const FIX_ERRORS: &str = "Fix errors before finding next bus";

/// Any NexTrip request failed.
pub const REQUEST_FAILED: &str = "Failed to get information from Metro Transit. Refresh page and try again. If that fails try again later.";

/// The departures list came back empty.
pub const LAST_BUS: &str = "The last bus has left for the day";

/// Shown in place of the stop list until route and direction resolve.
pub const STOPS_PLACEHOLDER: &str = "Stops will be listed once Route and Direction are entered";
