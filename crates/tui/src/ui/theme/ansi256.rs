//! Indexed palette for terminals without truecolor support.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(235),
                chrome: Color::Indexed(236),
                chrome_border: Color::Indexed(240),
                chrome_border_open: Color::Indexed(108),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(254),
                text_muted: Color::Indexed(246),

                accent: Color::Indexed(114),

                badge_bg: Color::Indexed(65),
                badge_fg: Color::Indexed(255),

                meter_track: Color::Indexed(238),

                error: Color::Indexed(167),

                backdrop: Color::Indexed(232),

                scrollbar_track: Color::Indexed(237),
                scrollbar_thumb: Color::Indexed(242),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
