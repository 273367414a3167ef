use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::paths::{RECUR_FILE_NAME, TODO_FILE_NAME};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the recurrence file and the todo list.
    pub todo_dir: PathBuf,
    /// `{pattern} task` lines, one reminder per line.
    pub recur_file: PathBuf,
    /// Markdown task list that matching reminders are prepended to.
    pub todo_file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    todo_dir: Option<PathBuf>,
    /// Relative to `todo_dir` unless absolute.
    recur_file: Option<PathBuf>,
    /// Relative to `todo_dir` unless absolute.
    todo_file: Option<PathBuf>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// `todo_dir` comes from the command line (or `TODO_DIR`) and takes precedence
    /// over the one in the config file.
    pub fn load(todo_dir: Option<PathBuf>) -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::resolve(file_config, todo_dir))
    }

    fn resolve(file_config: FileConfig, todo_dir: Option<PathBuf>) -> Self {
        let todo_dir = todo_dir
            .or(file_config.todo_dir)
            .unwrap_or_else(Self::default_todo_dir);

        // `join` keeps absolute paths as they are.
        let recur_file = todo_dir.join(
            file_config
                .recur_file
                .unwrap_or_else(|| PathBuf::from(RECUR_FILE_NAME)),
        );
        let todo_file = todo_dir.join(
            file_config
                .todo_file
                .unwrap_or_else(|| PathBuf::from(TODO_FILE_NAME)),
        );

        Self {
            todo_dir,
            recur_file,
            todo_file,
        }
    }

    /// Default todo root: `{data_dir}/recur`
    /// - macOS:   `~/Library/Application Support/recur`
    /// - Linux:   `$XDG_DATA_HOME/recur` or `~/.local/share/recur`
    /// - Windows: `%APPDATA%\recur`
    fn default_todo_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("recur")
        } else {
            PathBuf::from("./recur")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("recur").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("recur").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it. No file at all means defaults.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("recur").join("config.toml");
            let expected_native = b.config_dir().join("recur").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            todo_dir = "/tmp/my-todos"
            recur_file = "recurring.txt"
            todo_file = "/elsewhere/todo.md"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.todo_dir.as_deref(), Some(Path::new("/tmp/my-todos")));

        let config = Config::resolve(fc, None);
        assert_eq!(config.todo_dir, PathBuf::from("/tmp/my-todos"));
        assert_eq!(config.recur_file, PathBuf::from("/tmp/my-todos/recurring.txt"));
        assert_eq!(config.todo_file, PathBuf::from("/elsewhere/todo.md"));
    }

    #[test]
    fn parse_file_rejects_garbage() {
        assert!(Config::parse_file("todo_dir = [").is_err());
        assert!(Config::parse_file("todo_dir = 3").is_err());
    }

    #[test]
    fn explicit_todo_dir_wins_over_file() {
        let fc = Config::parse_file(r#"todo_dir = "/from/file""#).unwrap();
        let config = Config::resolve(fc, Some(PathBuf::from("/from/cli")));
        assert_eq!(config.todo_dir, PathBuf::from("/from/cli"));
        assert_eq!(config.recur_file, PathBuf::from("/from/cli/recur.txt"));
        assert_eq!(config.todo_file, PathBuf::from("/from/cli/todo.md"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::resolve(fc, None);
        assert_eq!(config.todo_dir, Config::default_todo_dir());
        assert!(config.recur_file.ends_with("recur.txt"));
        assert!(config.todo_file.ends_with("todo.md"));
    }
}
