use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors a palette assigns to the parts of the shell and its sections.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Stage and hint line.
    pub background: Color,
    /// Rail, top bar and mobile panel.
    pub chrome: Color,
    pub chrome_border: Color,
    /// Panel border while the mobile panel is open.
    pub chrome_border_open: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Section header rules, the active rail entry, hint keys and meters.
    pub accent: Color,

    /// Date badges and category tags.
    pub badge_bg: Color,
    pub badge_fg: Color,

    /// Unfilled part of a skill meter.
    pub meter_track: Color,

    pub error: Color,

    /// Dims the stage behind the open mobile panel.
    pub backdrop: Color,

    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
}

pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }
    fn accent_emphasis_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    fn badge_style(&self) -> Style {
        Style::default().fg(self.roles().badge_fg).bg(self.roles().badge_bg)
    }

    fn error_style(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    fn chrome_style(&self) -> Style {
        Style::default().bg(self.roles().chrome).fg(self.roles().text)
    }
    fn chrome_border_style(&self, open: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if open { roles.chrome_border_open } else { roles.chrome_border })
    }

    fn backdrop_style(&self) -> Style {
        Style::default().bg(self.roles().backdrop)
    }
}
