use std::path::{Path, PathBuf};

pub const RECUR_FILE_NAME: &str = "recur.txt";
pub const TODO_FILE_NAME: &str = "todo.md";

/// Path to the recurrence file based on the todo dir
pub fn recur_file(root: &Path) -> PathBuf {
    root.join(RECUR_FILE_NAME)
}

/// Path to the todo list based on the todo dir
pub fn todo_file(root: &Path) -> PathBuf {
    root.join(TODO_FILE_NAME)
}
