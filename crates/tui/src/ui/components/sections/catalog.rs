//! List and detail views for portfolio projects, certifications and blog
//! posts.
//!
//! The list shows one entry per record; `Tab`/`Shift+Tab` move the selection,
//! `Enter` opens the detail page and `Backspace` returns to the list. Projects
//! and certifications can be filtered by category with `f`, cycling through
//! `ALL` and the categories in the order they first appear.

use folio_types::{Blog, Certification, ContentQuery, ContentRecords, PortfolioProject, SectionSpec};
use indexmap::IndexSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};

use super::document::{render_document, text_width};
use super::{SectionView, capitalize, content_or_status, joined, wrapped};
use crate::app::App;
use crate::ui::components::common::ScrollMetrics;
use crate::ui::input::ViewAction;
use crate::ui::theme::{Theme, theme_helpers as th};

pub(crate) trait CatalogEntry: Clone + 'static {
    const QUERY: ContentQuery;
    /// `QUERY` as a one-element slice.
    const QUERIES: &'static [ContentQuery];
    const TITLE: &'static str;
    /// Plural noun used in placeholders ("Loading projects…").
    const NOUN: &'static str;
    const FILTERABLE: bool;

    fn entries(records: &ContentRecords) -> &[Self];
    fn category(&self) -> &str;
    /// Two lines: a bold title and a muted subtitle.
    fn summary(&self, theme: &dyn Theme) -> [Line<'static>; 2];
    fn detail(&self, theme: &dyn Theme, width: u16) -> Vec<Line<'static>>;
}

const LIST_HINTS: &[(&str, &str)] = &[(" Tab/S-Tab", " Select "), (" Enter", " Open "), (" j/k", " Scroll ")];
const FILTER_LIST_HINTS: &[(&str, &str)] = &[
    (" Tab/S-Tab", " Select "),
    (" Enter", " Open "),
    (" f", " Filter "),
    (" j/k", " Scroll "),
];
const DETAIL_HINTS: &[(&str, &str)] = &[(" Backspace", " Back "), (" j/k", " Scroll ")];

/// Rows taken by the title and filter bar above the first entry.
fn list_header_rows<T: CatalogEntry>() -> u16 {
    if T::FILTERABLE { 4 } else { 2 }
}

/// Rows per list entry: title, subtitle and a spacer.
const ENTRY_ROWS: u16 = 3;

pub(crate) struct CatalogView<T: CatalogEntry> {
    /// `None` shows every category.
    filter: Option<String>,
    selected: usize,
    open: Option<T>,
    list_scroll: ScrollMetrics,
    detail_scroll: ScrollMetrics,
    reveal_selection: bool,
}

impl<T: CatalogEntry> CatalogView<T> {
    pub fn new() -> Self {
        Self {
            filter: None,
            selected: 0,
            open: None,
            list_scroll: ScrollMetrics::default(),
            detail_scroll: ScrollMetrics::default(),
            reveal_selection: false,
        }
    }

    fn all<'a>(&self, app: &'a App) -> &'a [T] {
        app.content.records(T::QUERY).map(T::entries).unwrap_or_default()
    }

    fn visible<'a>(&self, app: &'a App) -> Vec<&'a T> {
        self.all(app)
            .iter()
            .filter(|entry| self.filter.as_deref().is_none_or(|filter| entry.category() == filter))
            .collect()
    }

    fn categories(&self, app: &App) -> IndexSet<String> {
        self.all(app).iter().map(|entry| entry.category().to_string()).collect()
    }

    fn cycle_filter(&mut self, app: &App) {
        let categories = self.categories(app);
        self.filter = match &self.filter {
            None => categories.first().cloned(),
            Some(current) => match categories.get_index_of(current) {
                Some(index) => categories.get_index(index + 1).cloned(),
                None => None,
            },
        };
        self.selected = 0;
        self.reveal_selection = true;
    }

    fn move_selection(&mut self, app: &App, forward: bool) {
        let count = self.visible(app).len();
        if count == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        self.reveal_selection = true;
    }

    fn filter_bar(&self, theme: &dyn Theme, app: &App) -> Line<'static> {
        let mut spans = Vec::new();
        let labels = std::iter::once(None).chain(self.categories(app).into_iter().map(Some));
        for (index, category) in labels.enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let active = category == self.filter;
            let label = category.as_deref().unwrap_or("all").to_uppercase();
            let style = if active {
                theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
            } else {
                theme.text_muted_style()
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }

    fn list_lines(&self, app: &App) -> Vec<Line<'static>> {
        let theme = &*app.theme;
        let mut lines = vec![
            Line::from(Span::styled(T::TITLE, theme.text_primary_style().add_modifier(Modifier::BOLD))),
            Line::default(),
        ];
        if T::FILTERABLE {
            lines.push(self.filter_bar(theme, app));
            lines.push(Line::default());
        }

        let records = match content_or_status(app, T::QUERY, T::NOUN) {
            Ok(records) => records,
            Err(status) => {
                lines.extend(status);
                return lines;
            }
        };
        let entries: Vec<&T> = T::entries(records)
            .iter()
            .filter(|entry| self.filter.as_deref().is_none_or(|filter| entry.category() == filter))
            .collect();
        for (index, entry) in entries.into_iter().enumerate() {
            let [title, subtitle] = entry.summary(theme);
            let selected = index == self.selected;
            let marker = if selected {
                Span::styled("▌ ", theme.accent_emphasis_style())
            } else {
                Span::raw("  ")
            };
            let mut title = title;
            if selected {
                title = title.patch_style(theme.accent_emphasis_style());
            }
            lines.push(prefixed(marker, title));
            lines.push(prefixed(Span::raw("  "), subtitle));
            lines.push(Line::default());
        }
        lines
    }
}

fn prefixed(prefix: Span<'static>, line: Line<'static>) -> Line<'static> {
    let mut spans = vec![prefix];
    spans.extend(line.spans);
    Line::from(spans)
}

impl<T: CatalogEntry> SectionView for CatalogView<T> {
    fn queries(&self) -> &'static [ContentQuery] {
        T::QUERIES
    }

    fn handle_action(&mut self, action: ViewAction, app: &App) -> bool {
        if self.open.is_some() {
            if action == ViewAction::Back {
                self.open = None;
                return true;
            }
            return self.detail_scroll.apply(action);
        }
        match action {
            ViewAction::NextItem => self.move_selection(app, true),
            ViewAction::PreviousItem => self.move_selection(app, false),
            ViewAction::Open => {
                let Some(entry) = self.visible(app).get(self.selected).map(|entry| (*entry).clone()) else {
                    return false;
                };
                self.open = Some(entry);
                self.detail_scroll = ScrollMetrics::default();
            }
            ViewAction::CycleFilter if T::FILTERABLE => self.cycle_filter(app),
            other => return self.list_scroll.apply(other),
        }
        true
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (&self.open, T::FILTERABLE) {
            (Some(_), _) => DETAIL_HINTS,
            (None, true) => FILTER_LIST_HINTS,
            (None, false) => LIST_HINTS,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, app: &App) {
        if let Some(entry) = &self.open {
            let lines = entry.detail(&*app.theme, text_width(area));
            render_document(area, buf, app, &mut self.detail_scroll, lines, None);
            return;
        }
        let count = self.visible(app).len();
        self.selected = self.selected.min(count.saturating_sub(1));
        let reveal = self.reveal_selection.then(|| {
            // Keep the subtitle in view too.
            list_header_rows::<T>() + self.selected as u16 * ENTRY_ROWS + 1
        });
        self.reveal_selection = false;
        let lines = self.list_lines(app);
        render_document(area, buf, app, &mut self.list_scroll, lines, reveal);
    }
}

pub(crate) fn create_portfolio(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(CatalogView::<PortfolioProject>::new())
}

pub(crate) fn create_certifications(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(CatalogView::<Certification>::new())
}

pub(crate) fn create_blogs(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(CatalogView::<Blog>::new())
}

fn title_line(theme: &dyn Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), theme.text_primary_style().add_modifier(Modifier::BOLD)))
}

fn muted_line(theme: &dyn Theme, text: String) -> Line<'static> {
    Line::from(Span::styled(text, theme.text_muted_style()))
}

/// Small upper-case label followed by its value, as on the detail pages.
fn labelled(theme: &dyn Theme, label: &'static str, value: String) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(label, theme.text_muted_style())),
        Line::from(Span::styled(value, theme.text_primary_style())),
    ]
}

impl CatalogEntry for PortfolioProject {
    const QUERY: ContentQuery = ContentQuery::PortfolioProjects;
    const QUERIES: &'static [ContentQuery] = &[ContentQuery::PortfolioProjects];
    const TITLE: &'static str = "Portfolio";
    const NOUN: &'static str = "projects";
    const FILTERABLE: bool = true;

    fn entries(records: &ContentRecords) -> &[Self] {
        match records {
            ContentRecords::PortfolioProjects(projects) => projects,
            _ => &[],
        }
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn summary(&self, theme: &dyn Theme) -> [Line<'static>; 2] {
        [title_line(theme, &self.title), muted_line(theme, self.subtitle.clone())]
    }

    fn detail(&self, theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![title_line(theme, &self.title), muted_line(theme, self.subtitle.clone()), Line::default()];
        lines.extend(th::section_header(theme, "Project Overview"));
        lines.extend(wrapped(&self.description, width, theme.text_secondary_style()));
        lines.push(Line::default());
        lines.extend(th::section_header(theme, "Project Details"));
        lines.extend(labelled(theme, "CATEGORY", capitalize(&self.category)));
        if !self.technology.is_empty() {
            lines.push(Line::default());
            lines.extend(labelled(theme, "TECHNOLOGIES", joined(&self.technology, |tech| tech.techused.as_str())));
        }
        lines
    }
}

impl CatalogEntry for Certification {
    const QUERY: ContentQuery = ContentQuery::Certifications;
    const QUERIES: &'static [ContentQuery] = &[ContentQuery::Certifications];
    const TITLE: &'static str = "Certifications";
    const NOUN: &'static str = "certifications";
    const FILTERABLE: bool = true;

    fn entries(records: &ContentRecords) -> &[Self] {
        match records {
            ContentRecords::Certifications(certifications) => certifications,
            _ => &[],
        }
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn summary(&self, theme: &dyn Theme) -> [Line<'static>; 2] {
        [
            title_line(theme, &self.title),
            muted_line(theme, format!("{} · {}", self.issuer, self.date)),
        ]
    }

    fn detail(&self, theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            title_line(theme, &self.title),
            Line::from(Span::styled(format!(" {} ", self.date), theme.badge_style())),
            muted_line(theme, format!("Issued by {}", self.issuer)),
            Line::default(),
        ];
        lines.extend(th::section_header(theme, "Certification Overview"));
        lines.extend(wrapped(&self.description, width, theme.text_secondary_style()));
        if let Some(details) = self.details.as_deref().filter(|details| !details.is_empty()) {
            lines.push(Line::default());
            lines.extend(wrapped(details, width, theme.text_secondary_style()));
        }
        lines.push(Line::default());
        lines.extend(th::section_header(theme, "Certification Details"));
        lines.extend(labelled(theme, "CATEGORY", capitalize(&self.category)));
        lines.push(Line::default());
        lines.extend(labelled(theme, "CREDENTIAL ID", self.credential_id.clone()));
        if !self.skill.is_empty() {
            lines.push(Line::default());
            lines.extend(labelled(theme, "SKILLS", joined(&self.skill, |tech| tech.techused.as_str())));
        }
        if let Some(url) = &self.credential_url {
            lines.push(Line::default());
            lines.extend(labelled(theme, "VERIFY", url.clone()));
        }
        lines
    }
}

impl CatalogEntry for Blog {
    const QUERY: ContentQuery = ContentQuery::Blogs;
    const QUERIES: &'static [ContentQuery] = &[ContentQuery::Blogs];
    const TITLE: &'static str = "Blog";
    const NOUN: &'static str = "posts";
    const FILTERABLE: bool = false;

    fn entries(records: &ContentRecords) -> &[Self] {
        match records {
            ContentRecords::Blogs(blogs) => blogs,
            _ => &[],
        }
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn summary(&self, theme: &dyn Theme) -> [Line<'static>; 2] {
        [
            title_line(theme, &self.title),
            muted_line(theme, format!("{} {} · {}", self.date.day, self.date.month, self.category)),
        ]
    }

    fn detail(&self, theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let mut tags = vec![Span::styled(format!(" {} ", self.category), theme.badge_style())];
        for tag in &self.tags {
            tags.push(Span::raw(" "));
            tags.push(Span::styled(format!("#{}", tag.techused), theme.accent_style()));
        }
        let mut lines = vec![
            Line::from(tags),
            Line::default(),
            title_line(theme, &self.title),
            muted_line(theme, format!("{} {}", self.date.day, self.date.month)),
            Line::default(),
        ];
        let body = match &self.content {
            Some(content) => strip_html(&content.html),
            None => self.excerpt.clone(),
        };
        for paragraph in body.split('\n') {
            if paragraph.trim().is_empty() {
                lines.push(Line::default());
            } else {
                lines.extend(wrapped(paragraph.trim(), width, theme.text_secondary_style()));
            }
        }
        lines
    }
}

/// Converts rich-text HTML to plain text: tags are dropped, block boundaries
/// become line breaks, list items get a bullet and entities are decoded.
pub(crate) fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        text.push_str(&unescape(&rest[..start]));
        let Some(end) = rest[start..].find('>') else {
            rest = &rest[start..];
            break;
        };
        let tag = &rest[start + 1..start + end];
        let closing = tag.starts_with('/');
        let name: String = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match name.as_str() {
            "br" => text.push('\n'),
            "li" if !closing => text.push_str("\n• "),
            "p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "ul" | "ol" | "blockquote" | "pre" if closing => {
                text.push_str("\n\n")
            }
            _ => {}
        }
        rest = &rest[start + end + 1..];
    }
    text.push_str(&unescape(rest));

    // Collapse runs of blank lines left by nested blocks.
    let mut collapsed = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.trim().lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        if !collapsed.is_empty() {
            collapsed.push('\n');
        }
        collapsed.push_str(line.trim_end());
    }
    collapsed
}

/// Decodes named and numeric character references.
fn unescape(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let entity_end = after.find(';').filter(|end| *end <= 10);
        let replacement = entity_end.and_then(|end| decode_entity(&after[..end]));
        match (entity_end, replacement) {
            (Some(end), Some(c)) => {
                decoded.push(c);
                rest = &after[end + 1..];
            }
            _ => {
                decoded.push('&');
                rest = after;
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
