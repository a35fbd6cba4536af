//! Arrival-time formatting.
//!
//! Converts the first timepoint departure for a stop into the
//! human-readable "minutes until arrival" output. Live departures carry a
//! countdown string ("5 Min", or "Due" meaning now); scheduled departures
//! carry an "H:MM" clock time for today.

use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::clock;
use crate::messages;
use crate::nextrip::DepartureDto;

/// Minutes until the bus arrives, or an explicit not-a-number marker for
/// departure text we could not interpret. Malformed input degrades to the
/// marker instead of failing the whole lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUntil {
    Minutes(i64),
    NotANumber,
}

impl fmt::Display for TimeUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{n}"),
            Self::NotANumber => f.write_str("NAN"),
        }
    }
}

/// Display names for the resolved trip, used for the descriptive output line.
#[derive(Debug, Clone)]
pub struct TripContext {
    pub route: String,
    pub direction: String,
    pub stop: String,
}

/// The rendered lookup result: the primary minutes message plus an
/// optional sentence naming direction, route, and stop.
#[derive(Debug, Clone)]
pub struct Arrival {
    pub primary: String,
    pub detail: Option<String>,
}

/// Interpret a live countdown string.
///
/// "Due" means the bus is arriving now. Otherwise the text is the minute
/// count with a " Min" suffix.
fn countdown_minutes(text: &str) -> TimeUntil {
    if text == "Due" {
        return TimeUntil::Minutes(0);
    }
    match text.strip_suffix(" Min") {
        Some(n) => n
            .parse()
            .map(TimeUntil::Minutes)
            .unwrap_or(TimeUntil::NotANumber),
        None => TimeUntil::NotANumber,
    }
}

/// Interpret a scheduled "H:MM" clock time relative to `now`.
fn scheduled_minutes(text: &str, now: NaiveDateTime) -> TimeUntil {
    match clock::parse_clock(text) {
        Ok(time) => TimeUntil::Minutes(clock::minutes_component_until(time, now)),
        Err(_) => TimeUntil::NotANumber,
    }
}

/// Render the next departure from a departures list.
///
/// An empty list means there is no more service today. A first record
/// missing its `Actual` or `DepartureText` field is treated as a failed
/// response.
pub fn summarize(
    departures: &[DepartureDto],
    now: NaiveDateTime,
    context: Option<&TripContext>,
) -> Arrival {
    let Some(first) = departures.first() else {
        return Arrival {
            primary: messages::LAST_BUS.to_string(),
            detail: None,
        };
    };

    let (Some(actual), Some(text)) = (first.actual, first.departure_text.as_deref()) else {
        return Arrival {
            primary: messages::REQUEST_FAILED.to_string(),
            detail: None,
        };
    };

    let time_until = if actual {
        countdown_minutes(text)
    } else {
        scheduled_minutes(text, now)
    };

    Arrival {
        primary: format!("{time_until} minutes"),
        detail: context.map(|c| {
            format!(
                "Next {} {} bus at {}",
                c.direction,
                c.route.to_uppercase(),
                c.stop.to_uppercase()
            )
        }),
    }
}
