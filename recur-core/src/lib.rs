pub mod config;
pub mod issues;
pub mod paths;
pub mod recur;
pub mod recur_file;
pub mod rem;
pub mod todo_file;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use issues::RecurIssue;
pub use recur::{Recur, RunOptions, RunReport};
pub use rem::{MatchResult, evaluate};
