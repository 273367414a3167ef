use std::fmt;

/// A non-critical problem found while processing the recurrence file.
///
/// These are collected alongside the run results rather than aborting the run,
/// so one bad line never keeps the other reminders from being added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurIssue {
    /// A line with no closing `}`.
    MalformedLine { line_number: usize, line: String },
    /// A key with no `{...}` body in it.
    MissingPattern { key: String },
    /// A pattern body that no grammar recognizes.
    UnparseablePattern { pattern: String },
}

impl fmt::Display for RecurIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurIssue::MalformedLine { line_number, line } => {
                write!(f, "line {line_number}: unable to parse line `{line}`")
            }
            RecurIssue::MissingPattern { key } => {
                write!(f, "unable to parse date from `{key}`")
            }
            RecurIssue::UnparseablePattern { pattern } => {
                write!(f, "unrecognized date pattern `{{{pattern}}}`")
            }
        }
    }
}
