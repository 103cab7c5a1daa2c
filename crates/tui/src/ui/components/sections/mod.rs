//! Section renderers shown inside the stage.
//!
//! A renderer draws into an off-screen [`Buffer`] sized like the stage, which
//! the stage then copies at the slide offset of the current transition. Each
//! section entry's [`SectionKind`] is resolved to a factory once, when the
//! [`SectionRegistry`] is built; mounting a section calls its factory and
//! unmounting drops the boxed renderer together with its scroll and selection
//! state.

mod about;
mod catalog;
mod contact;
mod document;
mod home;
mod resume;

use std::collections::HashMap;
use std::time::Instant;

use folio_types::{ContentQuery, ContentRecords, Effect, SectionId, SectionKind, SectionSpec};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use crate::app::App;
use crate::content::ContentState;
use crate::ui::input::ViewAction;
use crate::ui::theme::Theme;

pub(crate) trait SectionView {
    /// Content queries this renderer displays.
    fn queries(&self) -> &'static [ContentQuery] {
        &[]
    }

    /// Called once right after the renderer is mounted.
    fn on_mount(&mut self, app: &mut App) -> Vec<Effect> {
        request_content(app, self.queries())
    }

    /// Handles a view-level key action. Returns `true` when consumed.
    fn handle_action(&mut self, _action: ViewAction, _app: &App) -> bool {
        false
    }

    fn tick(&mut self, _now: Instant) {}

    /// Whether the renderer has a step of its own due before the idle ticker
    /// would fire again.
    fn is_animating(&self, _now: Instant) -> bool {
        false
    }

    /// Extra hint-bar entries while this section is active.
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, app: &App);
}

pub(crate) type ViewFactory = fn(&SectionSpec, &App) -> Box<dyn SectionView>;

fn factory_for(kind: SectionKind) -> ViewFactory {
    match kind {
        SectionKind::Home => home::create,
        SectionKind::About => about::create,
        SectionKind::Resume => resume::create,
        SectionKind::Certifications => catalog::create_certifications,
        SectionKind::Portfolio => catalog::create_portfolio,
        SectionKind::Blogs => catalog::create_blogs,
        SectionKind::Contact => contact::create,
    }
}

/// Section id to renderer factory, resolved once from the section table.
pub(crate) struct SectionRegistry {
    entries: HashMap<SectionId, (SectionSpec, ViewFactory)>,
}

impl SectionRegistry {
    pub fn resolve(sections: &[SectionSpec]) -> Self {
        let entries = sections
            .iter()
            .map(|spec| (spec.id.clone(), (spec.clone(), factory_for(spec.kind))))
            .collect();
        Self { entries }
    }

    pub fn create(&self, id: &SectionId, app: &App) -> Option<Box<dyn SectionView>> {
        self.entries.get(id).map(|(spec, factory)| factory(spec, app))
    }
}

/// Issues a fetch for every query the cache does not already hold.
pub(crate) fn request_content(app: &mut App, queries: &[ContentQuery]) -> Vec<Effect> {
    queries
        .iter()
        .filter(|query| app.content.request(**query))
        .map(|query| Effect::FetchContent(*query))
        .collect()
}

/// Records for `query` when they are loaded, otherwise a placeholder line
/// describing why they are not.
pub(crate) fn content_or_status<'a>(
    app: &'a App,
    query: ContentQuery,
    label: &str,
) -> Result<&'a ContentRecords, Vec<Line<'static>>> {
    let theme = &*app.theme;
    match app.content.get(query) {
        Some(ContentState::Ready(records)) if !records.is_empty() => Ok(records),
        Some(ContentState::Ready(_)) => Err(vec![Line::from(Span::styled(
            format!("No {label} yet."),
            theme.text_muted_style(),
        ))]),
        Some(ContentState::Failed(error)) => Err(vec![Line::from(Span::styled(
            format!("Could not load {label}: {error}"),
            theme.error_style(),
        ))]),
        Some(ContentState::Loading) | None => Err(vec![Line::from(Span::styled(
            format!("Loading {label}…"),
            theme.text_muted_style(),
        ))]),
    }
}

/// Word-wraps `text` to `width` columns, one styled line per wrapped row.
pub(crate) fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, usize::from(width.max(1)))
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// Upper-cases the first character, as category labels are shown.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Comma-separated tag list.
pub(crate) fn joined<T>(items: &[T], name: impl Fn(&T) -> &str) -> String {
    items.iter().map(name).collect::<Vec<_>>().join(", ")
}
