//! The Markdown task list reminders are written to.
//!
//! Task line: `- [ ] (A )?task text t:YYYY-MM-DD more text`

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

static TASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"- \[.]\s*(?P<priority>[A-Z])? (?P<task_head>.* )t:(?P<date>[^ ]*)(?P<task_tail>.*)")
        .unwrap()
});

/// Format of the `t:` tag on every task line.
pub const TASK_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct TodoFile {
    pub path: PathBuf,
}

impl TodoFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Every task tagged with `date`. A todo file that does not exist yet has none.
    pub fn tasks_for(&self, date: NaiveDate) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let tasks = parse_tasks_for(&content, &date_tag(date));
        debug!("tasks found for {}: {tasks:?}", date_tag(date));
        Ok(tasks)
    }

    /// Whether `task` is already on the list for `date`, ignoring spacing and priority.
    pub fn task_exists(&self, task: &str, date: NaiveDate) -> Result<bool> {
        Ok(contains_task(&self.tasks_for(date)?, task))
    }

    /// Puts `task` at the top of the list, creating the file if needed.
    pub fn add_task(&self, task: &str, date: NaiveDate) -> Result<()> {
        ensure_parent(&self.path)?;
        let content = if self.path.exists() {
            fs::read_to_string(&self.path)
                .with_context(|| format!("reading {}", self.path.display()))?
        } else {
            String::new()
        };
        let line = format_task_line(task, date);
        fs::write(&self.path, format!("{line}{content}"))
            .with_context(|| format!("writing task to {}", self.path.display()))?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;
    }
    Ok(())
}

/// `2022-01-01`
pub fn date_tag(date: NaiveDate) -> String {
    date.format(TASK_DATE_FORMAT).to_string()
}

/// `- [ ] take out the trash t:2022-01-01\n`
pub fn format_task_line(task: &str, date: NaiveDate) -> String {
    format!("- [ ] {task} t:{}\n", date_tag(date))
}

/// Collapses runs of whitespace and trims the ends.
pub fn normalize_task(task: &str) -> String {
    task.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `tasks` (as returned by [`TodoFile::tasks_for`]) already holds `task`.
pub fn contains_task(tasks: &[String], task: &str) -> bool {
    let task = normalize_task(task);
    tasks.contains(&task)
}

/// Tasks on lines whose `t:` tag equals `tag`, with the tag itself removed.
///
/// A task with a priority letter is listed both with and without it, so a
/// reminder still counts as present after a priority was added by hand.
pub fn parse_tasks_for(content: &str, tag: &str) -> Vec<String> {
    let mut tasks = Vec::new();
    for line in content.lines() {
        let Some(caps) = TASK_RE.captures(line) else {
            continue;
        };
        if &caps["date"] != tag {
            continue;
        }
        let task = format!("{}{}", &caps["task_head"], &caps["task_tail"]);
        tasks.push(normalize_task(&task));
        if let Some(priority) = caps.name("priority") {
            tasks.push(normalize_task(&format!("{} {task}", priority.as_str())));
        }
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TODO: &str = "\
- [ ] backup filesystem t:2021-11-29
- [ ] pay rent check every month on the 29th t:2021-11-29
- [x] :email: birthday card every year to someone t:2021-11-29
";

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mk_todo_file(content: Option<&str>) -> (TodoFile, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("todo.md");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        (TodoFile::new(path), tmp)
    }

    #[test]
    fn tasks_for_date() {
        assert_eq!(parse_tasks_for(TODO, "Mon"), Vec::<String>::new());
        assert_eq!(
            parse_tasks_for(TODO, "2021-11-29"),
            vec![
                "backup filesystem",
                "pay rent check every month on the 29th",
                ":email: birthday card every year to someone",
            ]
        );
    }

    #[test]
    fn priority_is_listed_both_ways() {
        let tasks = parse_tasks_for("- [ ] B call  mum t:2022-01-01 @phone\n", "2022-01-01");
        assert_eq!(tasks, vec!["call mum @phone", "B call mum @phone"]);
    }

    #[test]
    fn lines_without_tags_are_ignored() {
        let content = "# Todo\n\n- [ ] no date here\nsome notes t:2022-01-01\n";
        assert!(parse_tasks_for(content, "2022-01-01").is_empty());
    }

    #[test]
    fn contains_task_ignores_spacing_and_priority() {
        let tasks = parse_tasks_for("- [ ] A call mum t:2022-01-01\n", "2022-01-01");
        assert!(contains_task(&tasks, "call  mum"));
        assert!(contains_task(&tasks, " A call mum "));
        assert!(!contains_task(&tasks, "call dad"));
    }

    #[test]
    fn task_exists_checks_the_date() {
        let (todos, _tmp) = mk_todo_file(Some(TODO));
        assert!(!todos.task_exists("backup filesystem", d(2022, 1, 1)).unwrap());
        assert!(todos.task_exists("backup filesystem", d(2021, 11, 29)).unwrap());
        assert!(todos.task_exists("backup   filesystem", d(2021, 11, 29)).unwrap());
    }

    #[test]
    fn add_task_prepends() {
        let (todos, _tmp) = mk_todo_file(Some(TODO));
        todos.add_task("take out the trash", d(2022, 1, 1)).unwrap();
        let s = fs::read_to_string(&todos.path).unwrap();
        assert_eq!(s, format!("- [ ] take out the trash t:2022-01-01\n{TODO}"));
    }

    #[test]
    fn add_task_creates_missing_file() {
        let tmp = tempdir().unwrap();
        let todos = TodoFile::new(tmp.path().join("nested").join("todo.md"));
        assert!(todos.tasks_for(d(2022, 1, 1)).unwrap().is_empty());

        todos.add_task("first", d(2022, 1, 1)).unwrap();
        let s = fs::read_to_string(&todos.path).unwrap();
        assert_eq!(s, "- [ ] first t:2022-01-01\n");
        assert!(todos.task_exists("first", d(2022, 1, 1)).unwrap());
    }
}
