//! Themed vertical scrollbar for section bodies.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use super::ScrollMetrics;
use crate::ui::theme::Theme;

/// Draws a scrollbar on the right edge of `area` when `metrics` says the
/// content overflows.
pub fn render_vertical_scrollbar(buf: &mut Buffer, area: Rect, theme: &dyn Theme, metrics: &ScrollMetrics) {
    if !metrics.is_scrollable() {
        return;
    }
    let mut state = ScrollbarState::new(usize::from(metrics.max_offset()) + 1)
        .position(usize::from(metrics.offset()))
        .viewport_content_length(usize::from(metrics.viewport_height()));
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track))
        .render(area, buf, &mut state);
}
