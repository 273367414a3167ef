use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// recur — add today's recurring tasks to your todo list
///
/// Reads `{pattern} task` lines from recur.txt and prepends every task whose
/// pattern falls on today to todo.md, unless it is already there.
///
///   {Wed} Take out trash
///   {Mon Wed Fri} backup filesystem
///   {29} pay rent check every month on the 29th
///   {1 15} do on 1st and 15th day of the month
///   {Nov 29} birthday card every year to someone
///   {Nov 22 2007} Eat turkey
///   {Nov 27 *5} Keep adding task for 4 days after the event
///   {Dec 01 +3} Add task 2 days before the event
#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug).
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
    /// Directory holding recur.txt and todo.md.
    #[arg(long, short = 'd', env = "TODO_DIR")]
    pub todo_dir: Option<PathBuf>,
    /// Evaluate for this date instead of today (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Report matching tasks without writing them.
    #[arg(long)]
    pub dry_run: bool,
    /// Evaluate a single pattern (e.g. `--check "Nov 22 +5"`) and exit.
    #[arg(long, value_name = "PATTERN", conflicts_with = "dry_run")]
    pub check: Option<String>,
    /// Prints the todo directory.
    #[arg(long, short, conflicts_with_all = ["check", "dry_run", "date"])]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}
