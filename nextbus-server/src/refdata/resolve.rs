//! Free-text field resolution against the cached reference lists.
//!
//! Route and stop inputs resolve by case-insensitive substring match, and
//! only when exactly one entry matches. Direction inputs go through the
//! fixed compass vocabulary and must also appear in the list fetched for
//! the active route, confirming the route actually runs that way.

use crate::domain::{Compass, DirectionCode, RouteCode, StopCode};

use super::{DirectionEntry, RouteEntry, StopEntry};

/// Resolve a route input to a code.
///
/// Resolves iff exactly one route description contains the input as a
/// case-insensitive substring. Empty input never resolves.
pub fn resolve_route(input: &str, routes: &[RouteEntry]) -> Option<RouteCode> {
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();

    let mut matches = routes.iter().filter(|r| r.lower().contains(&needle));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.code.clone())
}

/// Resolve a direction input to a code.
///
/// The input must be one of the four compass words, and the mapped code
/// must appear in the direction list for the active route.
pub fn resolve_direction(input: &str, directions: &[DirectionEntry]) -> Option<DirectionCode> {
    let code = Compass::parse(input)?.code();
    directions.iter().find(|d| d.code == code).map(|d| d.code)
}

/// Resolve a stop input to a code.
///
/// Same exactly-one substring rule as [`resolve_route`].
pub fn resolve_stop(input: &str, stops: &[StopEntry]) -> Option<StopCode> {
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();

    let mut matches = stops.iter().filter(|s| s.lower().contains(&needle));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextrip::{DirectionDto, RouteDto, StopDto};
    use crate::refdata::{build_directions, build_routes, build_stops};

    fn route(code: &str, description: &str) -> RouteDto {
        RouteDto {
            route: code.to_string(),
            description: description.to_string(),
            provider_id: "8".to_string(),
        }
    }

    fn sample_routes() -> Vec<RouteEntry> {
        build_routes(vec![
            route("901", "METRO Blue Line"),
            route("902", "METRO Green Line"),
            route("10", "10 - Central Av - University Av"),
        ])
    }

    #[test]
    fn unique_substring_resolves_route() {
        let routes = sample_routes();
        let code = resolve_route("blue", &routes).unwrap();
        assert_eq!(code.as_str(), "901");

        // Case-insensitive and partial
        assert_eq!(resolve_route("BLUE LINE", &routes).unwrap().as_str(), "901");
        assert_eq!(resolve_route("central", &routes).unwrap().as_str(), "10");
    }

    #[test]
    fn ambiguous_substring_does_not_resolve() {
        let routes = sample_routes();
        // "line" matches both Blue Line and Green Line
        assert_eq!(resolve_route("line", &routes), None);
        assert_eq!(resolve_route("metro", &routes), None);
    }

    #[test]
    fn unknown_route_does_not_resolve() {
        let routes = sample_routes();
        assert_eq!(resolve_route("purple", &routes), None);
    }

    #[test]
    fn empty_input_never_resolves() {
        // Even a single-entry list must not match the empty substring.
        let routes = build_routes(vec![route("901", "METRO Blue Line")]);
        assert_eq!(resolve_route("", &routes), None);

        let stops = build_stops(vec![StopDto {
            value: "MAAM".to_string(),
            text: "Mall of America Station".to_string(),
        }]);
        assert_eq!(resolve_stop("", &stops), None);

        assert_eq!(resolve_direction("", &[]), None);
    }

    #[test]
    fn direction_requires_compass_word_and_list_membership() {
        let directions = build_directions(vec![
            DirectionDto {
                value: "1".to_string(),
                text: "SOUTHBOUND".to_string(),
            },
            DirectionDto {
                value: "4".to_string(),
                text: "NORTHBOUND".to_string(),
            },
        ]);

        assert_eq!(
            resolve_direction("south", &directions).unwrap().as_str(),
            "1"
        );
        assert_eq!(
            resolve_direction("North", &directions).unwrap().as_str(),
            "4"
        );

        // Valid word, but this route does not run east
        assert_eq!(resolve_direction("east", &directions), None);

        // Not in the vocabulary at all
        assert_eq!(resolve_direction("sideways", &directions), None);
        assert_eq!(resolve_direction("1", &directions), None);
    }

    #[test]
    fn stop_resolution_mirrors_route_rules() {
        let stops = build_stops(vec![
            StopDto {
                value: "TF1".to_string(),
                text: "Target Field Station Platform 1".to_string(),
            },
            StopDto {
                value: "TF2".to_string(),
                text: "Target Field Station Platform 2".to_string(),
            },
            StopDto {
                value: "MAAM".to_string(),
                text: "Mall of America Station".to_string(),
            },
        ]);

        assert_eq!(resolve_stop("mall", &stops).unwrap().as_str(), "MAAM");
        assert_eq!(resolve_stop("platform 2", &stops).unwrap().as_str(), "TF2");
        assert_eq!(resolve_stop("target field", &stops), None);
    }
}

#[cfg(test)]
mod resolve_props {
    use proptest::prelude::*;

    use super::*;
    use crate::nextrip::RouteDto;
    use crate::refdata::build_routes;

    fn arb_routes() -> impl Strategy<Value = Vec<RouteEntry>> {
        prop::collection::vec(("[0-9]{1,4}", "[A-Za-z ]{1,20}"), 0..12).prop_map(|pairs| {
            build_routes(
                pairs
                    .into_iter()
                    .map(|(code, description)| RouteDto {
                        route: code,
                        description,
                        provider_id: "8".to_string(),
                    })
                    .collect(),
            )
        })
    }

    proptest! {
        /// Whenever resolution succeeds, exactly one entry matched and the
        /// returned code is that entry's code.
        #[test]
        fn resolution_implies_unique_match(routes in arb_routes(), input in "[a-zA-Z ]{0,8}") {
            let needle = input.to_lowercase();
            let matching: Vec<_> = routes
                .iter()
                .filter(|r| !input.is_empty() && r.lower().contains(&needle))
                .collect();

            match resolve_route(&input, &routes) {
                Some(code) => {
                    prop_assert_eq!(matching.len(), 1);
                    prop_assert_eq!(&code, &matching[0].code);
                }
                None => prop_assert_ne!(matching.len(), 1),
            }
        }
    }
}
