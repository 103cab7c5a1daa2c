use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Rounded frame for the rail, the top bar and the mobile panel.
pub fn chrome_block<'a, T: Theme + ?Sized>(theme: &T, open: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.chrome_border_style(open))
        .style(theme.chrome_style())
}

/// Style for the root background.
pub fn background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Builds `key description` pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

/// Section title followed by a short accent underline, as the site draws its
/// section headers.
pub fn section_header<'a, T: Theme + ?Sized>(theme: &T, title: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(title, theme.text_primary_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("━━━━", theme.accent_style())),
        Line::default(),
    ]
}

/// Renders a horizontal meter for a percentage, e.g. `███████░░░ 70%`.
pub fn meter_spans<'a, T: Theme + ?Sized>(theme: &T, percentage: u8, width: u16) -> Vec<Span<'a>> {
    let percentage = percentage.min(100);
    let width = usize::from(width.max(1));
    let filled = (width * usize::from(percentage) + 50) / 100;
    vec![
        Span::styled("█".repeat(filled), theme.accent_style()),
        Span::styled("░".repeat(width - filled), Style::default().fg(theme.roles().meter_track)),
        Span::styled(format!(" {percentage}%"), theme.text_muted_style()),
    ]
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// Non-RGB colors are returned unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let factor = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (channel as f32 * factor).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Lighten an RGB color towards white by `amount` (0.0..=1.0).
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let amount = amount.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * amount).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::FolioTheme;

    #[test]
    fn meter_fills_proportionally() {
        let theme = FolioTheme::new();
        let spans = meter_spans(&theme, 70, 10);
        assert_eq!(spans[0].content.chars().count(), 7);
        assert_eq!(spans[1].content.chars().count(), 3);
        assert_eq!(spans[2].content, " 70%");

        let clamped = meter_spans(&theme, 250, 4);
        assert_eq!(clamped[0].content.chars().count(), 4);
        assert_eq!(clamped[2].content, " 100%");
    }

    #[test]
    fn color_math_leaves_indexed_colors_alone() {
        assert_eq!(darken_rgb(Color::Rgb(100, 200, 50), 0.5), Color::Rgb(50, 100, 25));
        assert_eq!(lighten_rgb(Color::Rgb(0, 0, 0), 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }
}
