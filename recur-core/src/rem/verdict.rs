/// Outcome of trying a single pattern grammar against a date.
///
/// `Unrecognized` means the grammar did not apply at all, so dispatch moves on
/// to the next kind. There is no "unrecognized but matching" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
    Unrecognized,
}

impl Verdict {
    pub fn from_match(matches: bool) -> Self {
        if matches {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Verdict::Unrecognized)
    }

    /// `Some(matches)` when the grammar applied, `None` otherwise.
    pub fn matches(self) -> Option<bool> {
        match self {
            Verdict::Match => Some(true),
            Verdict::NoMatch => Some(false),
            Verdict::Unrecognized => None,
        }
    }
}

/// Final answer for a whole pattern, after every grammar has been tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Matches,
    NoMatch,
    /// No grammar recognized the pattern body. Treated as "not today" by callers,
    /// but worth reporting since it usually means a typo in the recurrence file.
    Unparseable,
}

impl MatchResult {
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Matches)
    }
}

impl From<Option<bool>> for MatchResult {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => MatchResult::Matches,
            Some(false) => MatchResult::NoMatch,
            None => MatchResult::Unparseable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_round_trips_through_option() {
        assert_eq!(Verdict::from_match(true).matches(), Some(true));
        assert_eq!(Verdict::from_match(false).matches(), Some(false));
        assert_eq!(Verdict::Unrecognized.matches(), None);
        assert!(!Verdict::Unrecognized.is_recognized());
        assert!(Verdict::NoMatch.is_recognized());
    }

    #[test]
    fn match_result_from_option() {
        assert_eq!(MatchResult::from(Some(true)), MatchResult::Matches);
        assert_eq!(MatchResult::from(Some(false)), MatchResult::NoMatch);
        assert_eq!(MatchResult::from(None), MatchResult::Unparseable);
        assert!(!MatchResult::Unparseable.is_match());
    }
}
