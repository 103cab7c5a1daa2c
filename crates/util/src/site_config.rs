//! Site configuration IO (`site.json`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use folio_engine::{NavigationError, validate_sections};
use folio_types::SiteConfig;
use thiserror::Error;
use tracing::debug;

use crate::expand_tilde;

/// Environment variable allowing callers to override the site config path.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid sections: {0}")]
    Sections(#[from] NavigationError),
    #[error("viewport breakpoint must be greater than zero")]
    ZeroBreakpoint,
    #[error("viewport cell width must be greater than zero")]
    ZeroCellWidth,
    #[error("transition duration must be greater than zero")]
    ZeroDuration,
}

/// Returns the default path for the site configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir().unwrap_or_else(|| PathBuf::from(".")).join("folio").join("site.json")
}

/// Loads the site configuration from `explicit`, or the default path.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => load_config_from_path(&default_config_path()),
    }
}

/// Loads and validates the configuration at `path`. A missing file yields the
/// defaults.
pub fn load_config_from_path(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no site config found; using defaults");
        return Ok(SiteConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: SiteConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(static_path) = config.content.static_path.take() {
        let resolved = expand_tilde(&static_path.to_string_lossy());
        let resolved = match (resolved.is_relative(), path.parent()) {
            (true, Some(dir)) => dir.join(resolved),
            _ => resolved,
        };
        config.content.static_path = Some(resolved);
    }
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_sections(&config.sections)?;
    if config.viewport.breakpoint_px == 0 {
        return Err(ConfigError::ZeroBreakpoint);
    }
    if config.viewport.cell_width_px == 0 {
        return Err(ConfigError::ZeroCellWidth);
    }
    if config.transition.duration_ms == 0 {
        return Err(ConfigError::ZeroDuration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(body.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn default_path_honors_environment_override() {
        let override_path = "~/custom/folio/site.json";
        temp_env::with_var(CONFIG_PATH_ENV, Some(override_path), || {
            assert_eq!(default_config_path(), expand_tilde(override_path));
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = load_config_from_path(&dir.path().join("site.json")).expect("defaults");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.sections.len(), 7);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"{
                "sections": [
                    { "id": "home", "label": "Home", "kind": "home" },
                    { "id": "blogs", "label": "Writing", "kind": "blogs" }
                ],
                "viewport": { "breakpointPx": 1024 },
                "content": { "staticPath": "content.json" }
            }"#,
        );
        let config = load_config_from_path(file.path()).expect("config");
        assert_eq!(config.sections.len(), 2);
        assert_eq!(config.sections[1].label, "Writing");
        assert_eq!(config.viewport.breakpoint_px, 1024);
        assert_eq!(config.viewport.cell_width_px, 8);
        assert_eq!(config.transition.duration_ms, 1000);
        let parent = file.path().parent().expect("parent");
        assert_eq!(config.content.static_path, Some(parent.join("content.json")));
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let file = write_config(
            r#"{ "sections": [
                { "id": "home", "label": "Home", "kind": "home" },
                { "id": "home", "label": "Again", "kind": "about" }
            ] }"#,
        );
        assert!(matches!(
            load_config_from_path(file.path()),
            Err(ConfigError::Sections(NavigationError::DuplicateSection(id))) if id == "home"
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        let file = write_config(r#"{ "transition": { "durationMs": 0 } }"#);
        assert!(matches!(load_config_from_path(file.path()), Err(ConfigError::ZeroDuration)));

        let file = write_config(r#"{ "viewport": { "breakpointPx": 0 } }"#);
        assert!(matches!(load_config_from_path(file.path()), Err(ConfigError::ZeroBreakpoint)));

        let file = write_config(r#"{ "sections": [] }"#);
        assert!(matches!(
            load_config_from_path(file.path()),
            Err(ConfigError::Sections(NavigationError::EmptySections))
        ));
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let file = write_config("{ not json");
        match load_config_from_path(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
