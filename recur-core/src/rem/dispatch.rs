use chrono::NaiveDate;
use log::debug;
use strum::IntoEnumIterator;

use super::modifiers::Modifiers;
use super::pattern_kind::PatternKind;
use super::verdict::MatchResult;

/// Decides whether a REM-style pattern (the text between `{` and `}`) falls on `today`.
///
/// Trailing `+N`/`*N` modifiers are stripped first, then each [`PatternKind`]
/// is tried in order until one recognizes the remaining body.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use recur_core::rem::{evaluate, MatchResult};
/// let today = NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(); // a Saturday
///
/// assert_eq!(evaluate("Sat", today), MatchResult::Matches);
/// assert_eq!(evaluate("1 15", today), MatchResult::Matches);
/// assert_eq!(evaluate("Jan 18 +5", today), MatchResult::Matches);
/// assert_eq!(evaluate("Jan 15 2023", today), MatchResult::NoMatch);
/// assert_eq!(evaluate("every day", today), MatchResult::Unparseable);
/// ```
pub fn evaluate(pattern: &str, today: NaiveDate) -> MatchResult {
    MatchResult::from(classify(pattern, today).map(|(_, matches)| matches))
}

/// Like [`evaluate`], but also names the kind that recognized the pattern.
///
/// Returns `None` when no kind recognizes it.
pub fn classify(pattern: &str, today: NaiveDate) -> Option<(PatternKind, bool)> {
    debug!("try to parse \"{pattern}\"");
    let (modifiers, body) = Modifiers::split(pattern);

    let found = PatternKind::iter().find_map(|kind| {
        kind.check(body, modifiers, today)
            .matches()
            .map(|matches| (kind, matches))
    });

    if let Some((kind, matches)) = found {
        debug!("parsed \"{pattern}\" as {} (today: {matches})", kind.as_ref());
    }
    found
}
