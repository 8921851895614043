//! Display formatting shared by tables and dashboards.

use chrono::{DateTime, NaiveDate, Utc};
use num_format::{Locale, ToFormattedString};

const EMPTY: &str = "-";

/// `12 Mar, 2025`, or `-` when missing.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| EMPTY.to_string(), |date| date.format("%d %b, %Y").to_string())
}

pub fn format_day(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| EMPTY.to_string(), |date| date.format("%d %b, %Y").to_string())
}

pub fn format_points(points: i64) -> String {
    points.to_formatted_string(&Locale::en)
}

/// Whole shillings with thousands separators, e.g. `KSH 12,500`.
pub fn format_ksh(amount: f64) -> String {
    let shillings = amount.round() as i64;
    format!("KSH {}", shillings.to_formatted_string(&Locale::en))
}

/// Greeting for the local hour of day.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Local hour from the browser clock.
pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// Local calendar date from the browser clock.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_use_day_month_year() {
        let date = Utc.with_ymd_and_hms(2025, 3, 7, 10, 30, 0).unwrap();
        assert_eq!(format_date(Some(date)), "07 Mar, 2025");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_day(NaiveDate::from_ymd_opt(2024, 12, 1)), "01 Dec, 2024");
    }

    #[test]
    fn amounts_get_separators() {
        assert_eq!(format_points(125_000), "125,000");
        assert_eq!(format_ksh(12_500.4), "KSH 12,500");
    }

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
    }

    #[test]
    fn blanks_become_dashes() {
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Kenya"), "Kenya");
    }
}
