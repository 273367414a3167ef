//! Reading `recur.txt`: one `{pattern} task` reminder per line.

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fs, path::Path};

use crate::issues::RecurIssue;

static PATTERN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// All tasks sharing one `{...}` key, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurEntry {
    /// Everything up to and including the last `}`, e.g. `{Mon Wed Fri}`.
    pub key: String,
    pub tasks: Vec<String>,
}

impl RecurEntry {
    /// The text between the braces, e.g. `Mon Wed Fri`.
    pub fn pattern(&self) -> Option<&str> {
        PATTERN_RE
            .captures(&self.key)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Debug, Default)]
pub struct ReadRecurResult {
    /// Keys in first-seen order.
    pub entries: Vec<RecurEntry>,
    pub issues: Vec<RecurIssue>,
}

/// Reads and groups the recurrence file. A missing file is an error; bad lines are not.
pub fn read_recur_file(path: &Path) -> Result<ReadRecurResult> {
    if !path.is_file() {
        bail!("recurrence file {} does not exist", path.display());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_recur_file_content(&content))
}

/// Splits every line at its last `}` into a key and a task, grouping tasks by key.
/// Blank lines are skipped; lines without `}` are reported and skipped.
pub fn parse_recur_file_content(content: &str) -> ReadRecurResult {
    let mut result = ReadRecurResult::default();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(pos) = line.rfind('}') else {
            warn!("unable to parse line \"{line}\"");
            result.issues.push(RecurIssue::MalformedLine {
                line_number: index + 1,
                line: line.to_string(),
            });
            continue;
        };

        let key = line[..=pos].trim();
        let task = line[pos + 1..].trim();
        debug!("read {key} -> {task}");

        match result.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.tasks.push(task.to_string()),
            None => result.entries.push(RecurEntry {
                key: key.to_string(),
                tasks: vec![task.to_string()],
            }),
        }
    }

    result
}
