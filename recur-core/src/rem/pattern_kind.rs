use chrono::NaiveDate;
use strum_macros::{AsRefStr, EnumIter};

use super::matchers;
use super::modifiers::Modifiers;
use super::verdict::Verdict;

/// Every grammar a pattern body can be written in.
///
/// Declaration order is dispatch order: `PatternKind::iter()` yields the kinds
/// in the order they are tried, and the first one that recognizes a body wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum PatternKind {
    DayOfMonth,
    DayOfMonthList,
    Weekday,
    WeekdayList,
    MonthDay,
    MonthDayYear,
}

impl PatternKind {
    /// Windows only affect the dated kinds; the others ignore `modifiers`.
    pub fn check(self, body: &str, modifiers: Modifiers, today: NaiveDate) -> Verdict {
        match self {
            PatternKind::DayOfMonth => matchers::day_of_month(body, today),
            PatternKind::DayOfMonthList => matchers::day_of_month_list(body, today),
            PatternKind::Weekday => matchers::weekday(body, today),
            PatternKind::WeekdayList => matchers::weekday_list(body, today),
            PatternKind::MonthDay => matchers::month_day(body, today, modifiers),
            PatternKind::MonthDayYear => matchers::month_day_year(body, today, modifiers),
        }
    }
}
