//! Single-line strip of keyboard shortcuts.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct HintBarComponent {
    /// Extra `(key, description)` pairs from the active section.
    pub section_hints: &'static [(&'static str, &'static str)],
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let spans = self.get_hint_spans(app);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(th::background_style(&*app.theme)), area);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<ratatui::text::Span<'_>> {
        let theme = &*app.theme;
        let mut hints: Vec<(&str, &str)> = vec![(" ←/→ ↑/↓", " Sections ")];
        if app.is_mobile() {
            hints.push((" m", " Menu "));
        }
        hints.extend_from_slice(self.section_hints);
        hints.push((" t", " Theme "));
        hints.push((app.theme_definition.label, " "));
        hints.push((" q", " Quit "));
        th::build_hint_spans(theme, &hints)
    }
}
