use chrono::{Datelike, NaiveDate};

/// Longest gap between two occurrences of the same month/day (Feb 29 2096 -> 2104).
const MAX_YEARS_BETWEEN_OCCURRENCES: i32 = 8;

/// First date strictly after `after` that falls on `month`/`day`.
pub fn next_occurrence(after: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    (0..=MAX_YEARS_BETWEEN_OCCURRENCES)
        .filter_map(|offset| after.year().checked_add(offset))
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| *date > after)
}

/// Last date strictly before `before` that falls on `month`/`day`.
pub fn previous_occurrence(before: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    (0..=MAX_YEARS_BETWEEN_OCCURRENCES)
        .filter_map(|offset| before.year().checked_sub(offset))
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| *date < before)
}

/// Number of whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Whether a distance of `days` falls inside a window of `window` days.
///
/// Covers `1..window`: the event day itself and the day `window` away are both
/// outside, so `+5` reaches four days ahead.
pub fn within_window(days: i64, window: Option<u32>) -> bool {
    match window {
        Some(window) => days >= 1 && days < i64::from(window),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn next_occurrence_wraps_into_next_year() {
        assert_eq!(next_occurrence(d(2024, 12, 31), 1, 1), Some(d(2025, 1, 1)));
        assert_eq!(next_occurrence(d(2024, 1, 1), 1, 1), Some(d(2025, 1, 1)));
        assert_eq!(next_occurrence(d(2024, 1, 1), 1, 2), Some(d(2024, 1, 2)));
    }

    #[test]
    fn leap_day_skips_non_leap_years() {
        assert_eq!(next_occurrence(d(2025, 1, 1), 2, 29), Some(d(2028, 2, 29)));
        assert_eq!(next_occurrence(d(2096, 3, 1), 2, 29), Some(d(2104, 2, 29)));
        assert_eq!(previous_occurrence(d(2027, 6, 1), 2, 29), Some(d(2024, 2, 29)));
    }

    #[test]
    fn previous_occurrence_wraps_into_last_year() {
        assert_eq!(previous_occurrence(d(2025, 1, 2), 12, 30), Some(d(2024, 12, 30)));
        assert_eq!(previous_occurrence(d(2025, 12, 30), 12, 30), Some(d(2024, 12, 30)));
    }

    #[test]
    fn window_excludes_both_ends() {
        assert!(!within_window(0, Some(5)));
        assert!(within_window(1, Some(5)));
        assert!(within_window(4, Some(5)));
        assert!(!within_window(5, Some(5)));
        assert!(!within_window(-1, Some(5)));
        assert!(!within_window(1, Some(1)));
        assert!(!within_window(1, Some(0)));
        assert!(!within_window(1, None));
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2025, 1, 20), d(2025, 1, 24)), 4);
        assert_eq!(days_between(d(2025, 1, 24), d(2025, 1, 20)), -4);
    }
}
