//! Mobile top bar: menu button and profile title.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::Span,
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct TopBarComponent;

impl Component for TopBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && app.panel.menu_button_area.contains(Position::new(mouse.column, mouse.row))
        {
            return app.update(&Msg::TogglePanel);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::chrome_block(theme, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let glyph = if app.panel.is_open() { "✕" } else { "☰" };
        frame.render_widget(Paragraph::new(Span::styled(glyph, theme.accent_emphasis_style())).centered(), layout[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                app.profile.title.clone(),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            ))
            .centered(),
            layout[1],
        );
        app.panel.menu_button_area = layout[0];
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::horizontal([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
            .split(area)
            .to_vec()
    }
}
