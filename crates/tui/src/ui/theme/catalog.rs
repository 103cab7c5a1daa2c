use super::{Ansi256Theme, FolioTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Alternative spellings accepted from flags and the environment.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "folio",
        label: "Folio",
        description: "Slate surfaces with the site's sage accent.",
        aliases: &["folio", "site", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(FolioTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Calm polar blues with aurora semantic accents.",
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(&normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}

/// The definition after `current` among palettes for the same kind of
/// terminal, wrapping around.
pub fn next_after(current: &ThemeDefinition) -> &'static ThemeDefinition {
    let peers: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS
        .iter()
        .filter(|definition| definition.is_ansi_fallback == current.is_ansi_fallback)
        .collect();
    let index = peers.iter().position(|definition| definition.id == current.id).unwrap_or(0);
    peers.get((index + 1) % peers.len().max(1)).copied().unwrap_or(default_truecolor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve(" site ").map(|definition| definition.id), Some("folio"));
        assert_eq!(resolve("256").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("dracula").is_none());
    }

    #[test]
    fn defaults_point_at_the_right_palettes() {
        assert_eq!(default_truecolor().id, "folio");
        assert!(default_ansi().is_ansi_fallback);
        assert!(all().iter().all(|definition| !definition.label.is_empty()));
    }

    #[test]
    fn cycling_stays_within_the_terminal_kind() {
        assert_eq!(next_after(default_truecolor()).id, "nord");
        assert_eq!(next_after(next_after(default_truecolor())).id, "folio");
        assert_eq!(next_after(default_ansi()).id, "ansi256");
    }
}
