//! In-memory reference data for the form.
//!
//! Holds the last-fetched route, direction, and stop lists. Each entry
//! keeps the original-case description for display and a lowercased copy
//! for case-insensitive matching. Lists are always replaced wholesale when
//! their upstream field changes; stale lists are discarded, never merged,
//! so resolution can never match against outdated data.

mod resolve;

pub use resolve::{resolve_direction, resolve_route, resolve_stop};

use crate::domain::{DirectionCode, RouteCode, StopCode};
use crate::nextrip::{DirectionDto, RouteDto, StopDto};

/// A cached route: code plus display and matching forms of its name.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub code: RouteCode,
    pub display: String,
    lower: String,
}

impl RouteEntry {
    /// The lowercased description used for matching.
    pub fn lower(&self) -> &str {
        &self.lower
    }
}

/// A cached direction for the active route.
#[derive(Debug, Clone)]
pub struct DirectionEntry {
    pub code: DirectionCode,
    pub display: String,
}

/// A cached stop for the active route and direction.
#[derive(Debug, Clone)]
pub struct StopEntry {
    pub code: StopCode,
    pub display: String,
    lower: String,
}

impl StopEntry {
    /// The lowercased description used for matching.
    pub fn lower(&self) -> &str {
        &self.lower
    }
}

/// Build route entries from API DTOs, dropping records with malformed codes.
pub fn build_routes(dtos: Vec<RouteDto>) -> Vec<RouteEntry> {
    dtos.into_iter()
        .filter_map(|dto| {
            RouteCode::parse(&dto.route).ok().map(|code| RouteEntry {
                code,
                lower: dto.description.to_lowercase(),
                display: dto.description,
            })
        })
        .collect()
}

/// Build direction entries from API DTOs, dropping records with malformed codes.
pub fn build_directions(dtos: Vec<DirectionDto>) -> Vec<DirectionEntry> {
    dtos.into_iter()
        .filter_map(|dto| {
            DirectionCode::parse(&dto.value).ok().map(|code| DirectionEntry {
                code,
                display: dto.text,
            })
        })
        .collect()
}

/// Build stop entries from API DTOs, dropping records with malformed codes.
pub fn build_stops(dtos: Vec<StopDto>) -> Vec<StopEntry> {
    dtos.into_iter()
        .filter_map(|dto| {
            StopCode::parse(&dto.value).ok().map(|code| StopEntry {
                code,
                lower: dto.text.to_lowercase(),
                display: dto.text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_routes_keeps_display_case_and_lowers_match_text() {
        let entries = build_routes(vec![RouteDto {
            route: "901".to_string(),
            description: "METRO Blue Line".to_string(),
            provider_id: "8".to_string(),
        }]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display, "METRO Blue Line");
        assert_eq!(entries[0].lower(), "metro blue line");
        assert_eq!(entries[0].code.as_str(), "901");
    }

    #[test]
    fn build_routes_drops_malformed_codes() {
        let entries = build_routes(vec![
            RouteDto {
                route: "".to_string(),
                description: "Broken".to_string(),
                provider_id: "8".to_string(),
            },
            RouteDto {
                route: "902".to_string(),
                description: "METRO Green Line".to_string(),
                provider_id: "8".to_string(),
            },
        ]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code.as_str(), "902");
    }

    #[test]
    fn build_directions_drops_out_of_vocabulary_codes() {
        let entries = build_directions(vec![
            DirectionDto {
                value: "1".to_string(),
                text: "SOUTHBOUND".to_string(),
            },
            DirectionDto {
                value: "9".to_string(),
                text: "SIDEWAYS".to_string(),
            },
        ]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display, "SOUTHBOUND");
    }
}
