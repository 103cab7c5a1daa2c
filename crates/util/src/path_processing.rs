use std::env;
use std::path::PathBuf;

use dirs_next::{cache_dir, home_dir};

/// Environment variable overriding where the TUI writes its log file.
pub const LOG_PATH_ENV: &str = "FOLIO_LOG_PATH";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// Log file used while the TUI owns the terminal.
pub fn default_log_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("folio")
        .join("folio.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde(" ~/notes/site.json "), home.join("notes/site.json"));
        assert_eq!(expand_tilde("/etc/folio.json"), PathBuf::from("/etc/folio.json"));
    }

    #[test]
    fn log_path_honors_environment_override() {
        temp_env::with_var(LOG_PATH_ENV, Some("/tmp/folio-test/run.log"), || {
            assert_eq!(default_log_path(), PathBuf::from("/tmp/folio-test/run.log"));
        });
        temp_env::with_var(LOG_PATH_ENV, Some("   "), || {
            assert!(default_log_path().ends_with("folio/folio.log"));
        });
    }
}
