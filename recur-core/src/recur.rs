//! The daily run: evaluate every recurrence pattern for a date and add the
//! matching tasks to the todo list.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use std::{fs, path::PathBuf};

use crate::{
    Config,
    issues::RecurIssue,
    recur_file::read_recur_file,
    rem::{MatchResult, evaluate},
    todo_file::{TodoFile, contains_task, normalize_task},
};

pub struct Recur {
    pub config: Config,
    pub todos: TodoFile,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Evaluate and report, but leave the todo list untouched.
    pub dry_run: bool,
}

/// What a run did (or, for a dry run, would have done).
#[derive(Debug, Default)]
pub struct RunReport {
    /// Tasks added to the todo list, in insertion order.
    pub added: Vec<String>,
    /// Tasks that matched but were already on the list for the date.
    pub existing: Vec<String>,
    pub issues: Vec<RecurIssue>,
}

impl Recur {
    /// Creates a new `Recur` instance, loading configuration from standard paths.
    pub fn new(todo_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(todo_dir)?;
        Self::with_config(config)
    }

    /// Creates a new `Recur` instance with a specific `Config`.
    ///
    /// This also ensures that the todo directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.todo_dir)
            .with_context(|| format!("creating todo dir {}", config.todo_dir.display()))?;
        let todos = TodoFile::new(config.todo_file.clone());
        Ok(Self { config, todos })
    }

    /// Adds the tasks of every pattern falling on `today` that are not on the list yet.
    ///
    /// Patterns are independent: a malformed or unrecognized one is recorded in the
    /// report and the rest are still processed.
    pub fn add_today_tasks(&self, today: NaiveDate, options: RunOptions) -> Result<RunReport> {
        let recur = read_recur_file(&self.config.recur_file)?;
        let mut report = RunReport {
            issues: recur.issues,
            ..Default::default()
        };
        let mut present = self.todos.tasks_for(today)?;

        for entry in recur.entries {
            info!("processing item [{}] = {:?}", entry.key, entry.tasks);
            let Some(pattern) = entry.pattern() else {
                info!("unable to parse date from \"{} {:?}\"", entry.key, entry.tasks);
                report.issues.push(RecurIssue::MissingPattern {
                    key: entry.key.clone(),
                });
                continue;
            };

            match evaluate(pattern, today) {
                MatchResult::Matches => {}
                MatchResult::NoMatch => continue,
                MatchResult::Unparseable => {
                    warn!("unrecognized date pattern {{{pattern}}}");
                    report.issues.push(RecurIssue::UnparseablePattern {
                        pattern: pattern.to_string(),
                    });
                    continue;
                }
            }

            for task in &entry.tasks {
                if contains_task(&present, task) {
                    info!("task exists: {task}");
                    report.existing.push(task.clone());
                    continue;
                }
                info!("adding task {task}");
                if !options.dry_run {
                    self.todos.add_task(task, today)?;
                }
                present.push(normalize_task(task));
                report.added.push(task.clone());
            }
        }

        Ok(report)
    }
}
