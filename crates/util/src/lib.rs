//! Folio utilities: site configuration IO, user preferences and the file
//! locations shared by the CLI and the TUI.

pub mod path_processing;
pub mod preferences;
pub mod site_config;

pub use path_processing::{default_log_path, expand_tilde};
pub use preferences::{PreferencesError, UserPreferences};
pub use site_config::{ConfigError, default_config_path, load_config, load_config_from_path, validate_config};
