//! Theme styling for the shell.
//!
//! Palettes (`folio`, `nord`, an ANSI 256-color fallback), the semantic role
//! table they fill in, and helpers that build ratatui styles from those roles.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod folio;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use folio::FolioTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Environment variable naming the theme to use.
pub const THEME_ENV: &str = "FOLIO_THEME";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the explicit flag, the environment, the persisted
/// preference, and terminal capabilities, in that order. ANSI-only terminals
/// always get the indexed fallback.
pub fn load(explicit: Option<&str>, preferred_theme: Option<&str>) -> LoadedTheme {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; forcing the indexed palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let environment = env::var(THEME_ENV).ok();
    let candidates = [explicit, environment.as_deref(), preferred_theme];
    for name in candidates.into_iter().flatten() {
        if let Some(definition) = catalog::resolve(name) {
            return LoadedTheme::from_definition(definition);
        }
        debug!(theme = name, "unknown theme requested; trying the next source");
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("FOLIO_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
