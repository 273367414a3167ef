use crate::{Config, paths};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf) -> Config {
    Config {
        recur_file: paths::recur_file(&tmp_dir),
        todo_file: paths::todo_file(&tmp_dir),
        todo_dir: tmp_dir,
    }
}
