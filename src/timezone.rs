use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`.
///
/// Falls back to UTC when the timezone string is not a known canonical name.
pub fn local_date_today(canonical_timezone: &str) -> Date {
    let offset = match get_local_offset(canonical_timezone) {
        Some(offset) => offset,
        None => {
            tracing::warn!(
                "Could not get local timezone \"{canonical_timezone}\", falling back to UTC."
            );
            UtcOffset::UTC
        }
    };

    OffsetDateTime::now_utc().to_offset(offset).date()
}

#[cfg(test)]
mod timezone_tests {
    use super::{get_local_offset, local_date_today};

    #[test]
    fn known_timezone_has_offset() {
        assert!(get_local_offset("Pacific/Auckland").is_some());
    }

    #[test]
    fn unknown_timezone_has_no_offset() {
        assert!(get_local_offset("Not/AZone").is_none());
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let want = time::OffsetDateTime::now_utc().date();

        assert_eq!(local_date_today("Not/AZone"), want);
    }
}
