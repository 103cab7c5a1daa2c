use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::RAIL_ROW_PITCH;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::percent_to_cells;

/// Rows above the first entry: name, badge and a spacer.
const HEADER_ROWS: u16 = 3;

/// The desktop rail: profile header, section entries, social footer.
#[derive(Debug, Default)]
pub struct NavRailComponent;

impl NavRailComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for NavRailComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if let Some(id) = app.rail.hit_test(mouse.column, mouse.row).cloned() {
            let _ = app.select_section(id.as_str());
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::chrome_block(theme, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let [header, entries, footer] = [layout[0], layout[1], layout[2]];

        let header_lines = vec![
            Line::from(Span::styled(app.profile.name.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(app.profile.badge.clone(), theme.accent_style())),
        ];
        frame.render_widget(Paragraph::new(header_lines), header);

        let active = app.navigation.active_index();
        let mut item_areas = Vec::with_capacity(app.rail.items.len());
        for (index, item) in app.rail.items.iter().enumerate() {
            let y = entries.y + index as u16 * RAIL_ROW_PITCH;
            if y >= entries.bottom() {
                break;
            }
            let row = Rect::new(entries.x, y, entries.width, 1);
            let style = if index == active {
                theme.accent_emphasis_style()
            } else {
                theme.text_secondary_style()
            };
            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{} ", item.icon), style),
                Span::styled(item.label.clone(), style),
            ]);
            frame.render_widget(Paragraph::new(line), row);
            item_areas.push(row);
        }

        // The indicator moves in whole rows between entry positions.
        let position = app.rail.indicator_position(app.now);
        let offset = percent_to_cells(position * 100.0, RAIL_ROW_PITCH);
        if let Ok(offset) = u16::try_from(offset) {
            let y = entries.y.saturating_add(offset);
            if y < entries.bottom() {
                frame.render_widget(
                    Paragraph::new(Span::styled("▌", theme.accent_style())),
                    Rect::new(entries.x, y, 1, 1),
                );
            }
        }

        let socials = app
            .profile
            .socials
            .iter()
            .map(|social| social.label.as_str())
            .collect::<Vec<_>>()
            .join(" · ");
        frame.render_widget(Paragraph::new(Span::styled(socials, theme.text_muted_style())), footer);

        app.rail.last_area = area;
        app.rail.per_item_areas = item_areas;
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(1), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }
}
