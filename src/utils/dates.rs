//! Entry date resolution and rendering.
//!
//! The log contract accepts a calendar date or datetime string and falls
//! back to "now" when the input is missing or unparsable. Responses render
//! dates in the `"Mon Jan 01 2024"` calendar-string form.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Resolves a client-supplied date string to the stored timestamp.
///
/// Accepted forms: `YYYY-MM-DD` (stored at midnight), an ISO datetime with
/// or without offset. Anything else, including a missing value, resolves to
/// the current time at processing.
pub fn resolve_entry_date(input: Option<&str>) -> NaiveDateTime {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_date)
        .unwrap_or_else(|| Utc::now().naive_utc())
}

fn parse_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = s.parse::<NaiveDateTime>() {
        return Some(datetime);
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(datetime.naive_utc());
    }
    None
}

/// Renders a stored timestamp as a calendar string, e.g. `"Fri Mar 01 2024"`.
pub fn format_entry_date(date: NaiveDateTime) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date_is_kept_exactly() {
        let resolved = resolve_entry_date(Some("2023-01-05"));
        assert_eq!(format_entry_date(resolved), "Thu Jan 05 2023");
    }

    #[test]
    fn datetime_is_accepted() {
        let resolved = resolve_entry_date(Some("2024-03-01T10:30:00"));
        assert_eq!(format_entry_date(resolved), "Fri Mar 01 2024");
    }

    #[test]
    fn rfc3339_with_offset_is_accepted() {
        let resolved = resolve_entry_date(Some("2024-03-01T10:30:00+00:00"));
        assert_eq!(format_entry_date(resolved), "Fri Mar 01 2024");
    }

    #[test]
    fn unparsable_date_falls_back_to_now() {
        let before = Utc::now().naive_utc();
        let resolved = resolve_entry_date(Some("not-a-date"));
        let after = Utc::now().naive_utc();
        assert!(resolved >= before && resolved <= after);
    }

    #[test]
    fn missing_and_blank_dates_fall_back_to_now() {
        let before = Utc::now().naive_utc();
        assert!(resolve_entry_date(None) >= before);
        assert!(resolve_entry_date(Some("   ")) >= before);
    }

    #[test]
    fn rendering_matches_calendar_string_form() {
        let date = "2024-01-01".parse::<NaiveDate>().unwrap().and_time(NaiveTime::MIN);
        assert_eq!(format_entry_date(date), "Mon Jan 01 2024");
    }
}
