//! One matcher per pattern grammar. Each takes the modifier-free body and
//! reports whether its grammar applies and, if so, whether `today` satisfies it.

use chrono::{Datelike, NaiveDate};

use super::calendar::{days_between, next_occurrence, previous_occurrence, within_window};
use super::modifiers::Modifiers;
use super::names::{MonthName, WeekdayName, is_digits};
use super::verdict::Verdict;

/// Leap year used to check that a month/day exists in *some* year.
const ANY_LEAP_YEAR: i32 = 2000;

/// `{22}`: the given day of every month.
///
/// Any digit run is recognized; values no month has (`0`, `32`, overflow) just never match.
pub fn day_of_month(token: &str, today: NaiveDate) -> Verdict {
    if !is_digits(token) {
        return Verdict::Unrecognized;
    }
    Verdict::from_match(token.parse::<u32>().ok() == Some(today.day()))
}

/// `{Mon}`
pub fn weekday(token: &str, today: NaiveDate) -> Verdict {
    match WeekdayName::parse(token) {
        Some(name) => Verdict::from_match(name.is_on(today)),
        None => Verdict::Unrecognized,
    }
}

/// `{1 15}`
pub fn day_of_month_list(body: &str, today: NaiveDate) -> Verdict {
    each_token(body, today, day_of_month)
}

/// `{Mon Wed Fri}`
pub fn weekday_list(body: &str, today: NaiveDate) -> Verdict {
    each_token(body, today, weekday)
}

/// Applies `single` to every whitespace-separated token in order.
///
/// The first unrecognized token rejects the whole list, but a token that
/// matches returns straight away, so `"Mon Junk"` still matches on a Monday.
fn each_token(body: &str, today: NaiveDate, single: fn(&str, NaiveDate) -> Verdict) -> Verdict {
    let mut tokens = body.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Verdict::Unrecognized;
    }
    for token in tokens {
        match single(token, today) {
            Verdict::Match => return Verdict::Match,
            Verdict::Unrecognized => return Verdict::Unrecognized,
            Verdict::NoMatch => {}
        }
    }
    Verdict::NoMatch
}

/// `{Nov 22}`: every year on that date, widened by the warning/repeat windows.
///
/// The warning window looks for the next occurrence after today (possibly next
/// year) and the repeat window for the previous one (possibly last year).
pub fn month_day(body: &str, today: NaiveDate, modifiers: Modifiers) -> Verdict {
    let Some((month, day)) = parse_month_day(body) else {
        return Verdict::Unrecognized;
    };

    let warned = next_occurrence(today, month, day)
        .is_some_and(|event| within_window(days_between(today, event), modifiers.warning));
    if warned {
        return Verdict::Match;
    }

    let repeated = previous_occurrence(today, month, day)
        .is_some_and(|event| within_window(days_between(event, today), modifiers.repeat));
    if repeated {
        return Verdict::Match;
    }

    Verdict::from_match(today.month() == month && today.day() == day)
}

/// `{Nov 22 2007}`: a single dated event with a four-digit year, widened by the warning/repeat windows.
pub fn month_day_year(body: &str, today: NaiveDate, modifiers: Modifiers) -> Verdict {
    let Some(event) = parse_month_day_year(body) else {
        return Verdict::Unrecognized;
    };

    if within_window(days_between(today, event), modifiers.warning)
        || within_window(days_between(event, today), modifiers.repeat)
    {
        return Verdict::Match;
    }
    Verdict::from_match(today == event)
}

fn parse_month_day(body: &str) -> Option<(u32, u32)> {
    let mut tokens = body.split_whitespace();
    let (Some(month), Some(day), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };
    let month = MonthName::parse(month)?.number();
    let day = parse_day(day)?;
    NaiveDate::from_ymd_opt(ANY_LEAP_YEAR, month, day)?;
    Some((month, day))
}

fn parse_month_day_year(body: &str) -> Option<NaiveDate> {
    let mut tokens = body.split_whitespace();
    let (Some(month), Some(day), Some(year), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };
    let month = MonthName::parse(month)?.number();
    let day = parse_day(day)?;
    if !is_digits(year) || year.len() != 4 {
        return None;
    }
    let year = year.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// One or two digits, as in `1`, `01` or `22`.
fn parse_day(token: &str) -> Option<u32> {
    if !is_digits(token) || token.len() > 2 {
        return None;
    }
    token.parse().ok()
}
