//! Local time formatting and delay arithmetic.
//!
//! Timestamps are carried in UTC. Everything shown to a passenger is
//! rendered in German local time (Europe/Berlin), so the CET/CEST switch is
//! handled here rather than by callers.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::Berlin;
use tracing::warn;

/// Shown in place of a time that could not be formatted.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Format a timestamp as 24-hour `HH:MM` in Europe/Berlin.
///
/// # Examples
///
/// ```
/// use bahnpulse_server::domain::format_berlin_time;
/// use chrono::{TimeZone, Utc};
///
/// // Winter: CET is UTC+1
/// let t = Utc.with_ymd_and_hms(2024, 1, 15, 7, 5, 0).unwrap();
/// assert_eq!(format_berlin_time(&t), "08:05");
/// ```
pub fn format_berlin_time(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Berlin).format("%H:%M").to_string()
}

/// Format an RFC 3339 timestamp string as `HH:MM` in Europe/Berlin.
///
/// Returns [`TIME_PLACEHOLDER`] if the string cannot be parsed.
pub fn format_berlin_time_str(s: &str) -> String {
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => format_berlin_time(&t.with_timezone(&Utc)),
        Err(e) => {
            warn!(input = s, error = %e, "could not format timestamp");
            TIME_PLACEHOLDER.to_string()
        }
    }
}

/// Whole minutes by which `actual` is later than `scheduled`.
///
/// No actual time, or an early one, counts as no delay.
pub fn delay_between(scheduled: DateTime<Utc>, actual: Option<DateTime<Utc>>) -> u32 {
    let Some(actual) = actual else {
        return 0;
    };

    let mins = (actual - scheduled).num_minutes();
    u32::try_from(mins.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn winter_time_is_utc_plus_one() {
        assert_eq!(format_berlin_time(&utc(2024, 3, 15, 12, 0)), "13:00");
    }

    #[test]
    fn summer_time_is_utc_plus_two() {
        assert_eq!(format_berlin_time(&utc(2024, 7, 1, 12, 30)), "14:30");
    }

    #[test]
    fn crosses_midnight_locally() {
        assert_eq!(format_berlin_time(&utc(2024, 1, 1, 23, 15)), "00:15");
    }

    #[test]
    fn format_str_valid() {
        assert_eq!(format_berlin_time_str("2024-03-15T12:00:00Z"), "13:00");
        assert_eq!(format_berlin_time_str("2024-03-15T12:00:00+01:00"), "12:00");
    }

    #[test]
    fn format_str_invalid_gives_placeholder() {
        assert_eq!(format_berlin_time_str("not a time"), TIME_PLACEHOLDER);
        assert_eq!(format_berlin_time_str(""), "--:--");
    }

    #[test]
    fn delay_between_cases() {
        let scheduled = utc(2024, 3, 15, 10, 0);

        assert_eq!(delay_between(scheduled, None), 0);
        assert_eq!(delay_between(scheduled, Some(scheduled)), 0);
        assert_eq!(
            delay_between(scheduled, Some(scheduled + Duration::minutes(7))),
            7
        );
        // Partial minutes are floored
        assert_eq!(
            delay_between(scheduled, Some(scheduled + Duration::seconds(179))),
            2
        );
        // Early running is not negative delay
        assert_eq!(
            delay_between(scheduled, Some(scheduled - Duration::minutes(3))),
            0
        );
    }
}
