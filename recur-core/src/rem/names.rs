//! Abbreviated English weekday and month names, as written in recurrence patterns.
//!
//! Lookups are exact: `Mon` parses, `mon` and `Monday` do not.

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
pub enum WeekdayName {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayName {
    pub fn parse(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }

    pub fn is_on(self, date: NaiveDate) -> bool {
        self as u32 == date.weekday().num_days_from_monday()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
pub enum MonthName {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl MonthName {
    pub fn parse(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }

    /// 1-based month number, as used by `chrono`.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

/// Non-empty and ASCII digits only. Signs, spaces and other digit scripts are rejected.
pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
