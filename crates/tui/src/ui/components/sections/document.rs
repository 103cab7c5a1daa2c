//! A scrolling column of pre-wrapped lines, used by the text-heavy sections.

use folio_types::ContentQuery;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::SectionView;
use crate::app::App;
use crate::ui::components::common::{ScrollMetrics, render_vertical_scrollbar};
use crate::ui::input::ViewAction;
use crate::ui::theme::theme_helpers as th;

/// Builds the section body for a given text width.
pub(crate) type DocumentBuilder = fn(&App, u16) -> Vec<Line<'static>>;

pub(crate) struct DocumentView {
    queries: &'static [ContentQuery],
    build: DocumentBuilder,
    scroll: ScrollMetrics,
}

impl DocumentView {
    pub fn new(queries: &'static [ContentQuery], build: DocumentBuilder) -> Self {
        Self {
            queries,
            build,
            scroll: ScrollMetrics::default(),
        }
    }
}

const SCROLL_HINTS: &[(&str, &str)] = &[(" j/k PgUp/PgDn", " Scroll ")];

impl SectionView for DocumentView {
    fn queries(&self) -> &'static [ContentQuery] {
        self.queries
    }

    fn handle_action(&mut self, action: ViewAction, _app: &App) -> bool {
        self.scroll.apply(action)
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        SCROLL_HINTS
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, app: &App) {
        render_document(area, buf, app, &mut self.scroll, (self.build)(app, text_width(area)), None);
    }
}

/// Columns available to text inside a document body.
pub(crate) fn text_width(area: Rect) -> u16 {
    body_area(area).width.saturating_sub(1)
}

fn body_area(area: Rect) -> Rect {
    area.inner(Margin::new(2, 1))
}

/// Draws `lines` into `area` at the current scroll offset, with a scrollbar
/// when they overflow. `reveal` scrolls that row into view first.
pub(crate) fn render_document(
    area: Rect,
    buf: &mut Buffer,
    app: &App,
    scroll: &mut ScrollMetrics,
    lines: Vec<Line<'static>>,
    reveal: Option<u16>,
) {
    let theme = &*app.theme;
    Block::default().style(th::background_style(theme)).render(area, buf);

    let body = body_area(area);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    scroll.measure(height, body.height);
    if let Some(row) = reveal {
        scroll.reveal(row);
    }
    Paragraph::new(lines).scroll((scroll.offset(), 0)).render(body, buf);
    render_vertical_scrollbar(buf, body, theme, scroll);
}
