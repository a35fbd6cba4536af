//! Wall-clock time handling for scheduled departures.
//!
//! NexTrip reports scheduled (non-live) departures as "H:MM" clock times
//! for the current service day, without a leading zero on the hour.

use chrono::{NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid clock time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct ClockError {
    reason: &'static str,
}

impl ClockError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a clock time in "H:MM" or "HH:MM" format.
///
/// # Examples
///
/// ```
/// use nextbus_server::domain::parse_clock;
///
/// assert!(parse_clock("7:05").is_ok());
/// assert!(parse_clock("23:59").is_ok());
///
/// assert!(parse_clock("2359").is_err());
/// assert!(parse_clock("24:00").is_err());
/// assert!(parse_clock("7:5").is_err());
/// ```
pub fn parse_clock(s: &str) -> Result<NaiveTime, ClockError> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| ClockError::new("expected H:MM format"))?;

    if h.is_empty() || h.len() > 2 || !h.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockError::new("invalid hour digits"));
    }
    if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockError::new("invalid minute digits"));
    }

    let hour: u32 = h.parse().map_err(|_| ClockError::new("invalid hour"))?;
    if hour > 23 {
        return Err(ClockError::new("hour must be 0-23"));
    }

    let minute: u32 = m.parse().map_err(|_| ClockError::new("invalid minute"))?;
    if minute > 59 {
        return Err(ClockError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ClockError::new("invalid time"))
}

/// Minutes component of the duration from `now` until `target` on `now`'s date.
///
/// This is deliberately the minutes *component* (total minutes mod 60), not
/// the total duration in minutes: a departure 2h29m away yields 29. This
/// preserves the behavior of the system this replaces; see DESIGN.md.
pub fn minutes_component_until(target: NaiveTime, now: NaiveDateTime) -> i64 {
    let departure = now.date().and_time(target);
    departure.signed_duration_since(now).num_minutes().rem_euclid(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn parse_accepts_single_digit_hours() {
        assert_eq!(
            parse_clock("7:05").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 0).unwrap()
        );
        assert_eq!(
            parse_clock("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("1230").is_err());
        assert!(parse_clock("12:3").is_err());
        assert!(parse_clock("12:345").is_err());
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("ab:cd").is_err());
    }

    #[test]
    fn minutes_within_the_hour() {
        let target = parse_clock("23:59").unwrap();
        assert_eq!(minutes_component_until(target, at(23, 0, 0)), 59);
    }

    #[test]
    fn minutes_component_discards_whole_hours() {
        // 21:30 -> 23:59 is 2h29m away, but only the minutes component counts.
        let target = parse_clock("23:59").unwrap();
        assert_eq!(minutes_component_until(target, at(21, 30, 0)), 29);
    }

    #[test]
    fn seconds_truncate_toward_zero() {
        // 58.5 minutes away reports as 58.
        let target = parse_clock("23:59").unwrap();
        assert_eq!(minutes_component_until(target, at(23, 0, 30)), 58);
    }

    #[test]
    fn past_times_wrap_into_range() {
        // A departure earlier today still yields a value in 0..60.
        let target = parse_clock("22:00").unwrap();
        assert_eq!(minutes_component_until(target, at(23, 0, 0)), 0);
        assert_eq!(minutes_component_until(target, at(23, 15, 0)), 45);
    }
}
