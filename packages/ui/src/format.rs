//! Display formatting for category tokens and timestamps.

use chrono::{DateTime, NaiveDate, Utc};

/// Turn an upper-snake category token into a title-cased label:
/// `WORK_TRAVEL` becomes `Work Travel`. Total over strings; empty in,
/// empty out.
pub fn format_category(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Calendar-date rendering for list rows and widgets.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Full timestamp rendering for the detail page.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Value for an `<input type="date">`, empty when the task has no due date.
pub fn date_input_value(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_date).unwrap_or_default()
}

/// Parse an `<input type="date">` value (`yyyy-mm-dd`) into a UTC midnight
/// timestamp. Empty or malformed input yields `None`.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_title_cases_snake_tokens() {
        assert_eq!(format_category("WORK_TRAVEL"), "Work Travel");
        assert_eq!(format_category("HOME"), "Home");
        assert_eq!(format_category("personal_errands"), "Personal Errands");
    }

    #[test]
    fn category_of_empty_string_is_empty() {
        assert_eq!(format_category(""), "");
    }

    #[test]
    fn date_input_round_trips() {
        let ts = parse_date_input("2025-09-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap());
        assert_eq!(date_input_value(Some(&ts)), "2025-09-01");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn malformed_date_input_is_none() {
        assert!(parse_date_input("").is_none());
        assert!(parse_date_input("01/09/2025").is_none());
        assert!(parse_date_input("2025-13-40").is_none());
    }

    #[test]
    fn timestamp_rendering_keeps_minutes() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 25, 14, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-08-25 14:05");
        assert_eq!(format_date(&ts), "2025-08-25");
    }
}
