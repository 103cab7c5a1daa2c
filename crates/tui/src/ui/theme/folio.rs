//! The site's own palette: slate surfaces with a sage-green accent.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::{darken_rgb, lighten_rgb},
};

pub const SLATE: Color = Color::Rgb(0x1C, 0x26, 0x2B); // #1C262B
pub const SLATE_RAISED: Color = Color::Rgb(0x24, 0x31, 0x37);
pub const SLATE_BORDER: Color = Color::Rgb(0x49, 0x5C, 0x5F); // #495C5F
pub const MIST: Color = Color::Rgb(0x7D, 0x98, 0x9C); // #7D989C
pub const PAPER: Color = Color::Rgb(0xEC, 0xF0, 0xF0); // #ECF0F0
pub const CREAM: Color = Color::Rgb(0xEB, 0xF0, 0xDF); // #EBF0DF

pub const SAGE: Color = Color::Rgb(0x8A, 0xCB, 0x82); // #8ACB82
pub const SAGE_HOVER: Color = Color::Rgb(0x75, 0xAD, 0x6F); // #75ad6f
pub const SAGE_DEEP: Color = Color::Rgb(0x5A, 0x89, 0x57); // #5a8957
pub const BRICK: Color = Color::Rgb(0xE0, 0x6C, 0x5F);

fn build_folio_roles() -> ThemeRoles {
    ThemeRoles {
        background: SLATE,
        chrome: SLATE_RAISED,
        chrome_border: SLATE_BORDER,
        chrome_border_open: SAGE_HOVER,

        text: PAPER,
        text_secondary: CREAM,
        text_muted: MIST,

        accent: SAGE,

        badge_bg: SAGE_DEEP,
        badge_fg: PAPER,

        meter_track: lighten_rgb(SLATE_RAISED, 0.08),

        error: BRICK,

        backdrop: darken_rgb(SLATE, 0.6),

        scrollbar_track: SLATE_RAISED,
        scrollbar_thumb: SLATE_BORDER,
    }
}

#[derive(Debug, Clone)]
pub struct FolioTheme {
    roles: ThemeRoles,
}

impl FolioTheme {
    pub fn new() -> Self {
        Self { roles: build_folio_roles() }
    }
}

impl Theme for FolioTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
