//! Contact section: reach-me entries and social links from the profile.

use folio_types::{SectionKind, SectionSpec};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::SectionView;
use super::document::DocumentView;
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};

pub(crate) fn create(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(DocumentView::new(SectionKind::Contact.content_queries(), build))
}

fn build(app: &App, _width: u16) -> Vec<Line<'static>> {
    let theme = &*app.theme;
    let profile = &app.profile;
    let mut lines = vec![
        Line::from(Span::styled("Contact", theme.text_primary_style().add_modifier(Modifier::BOLD))),
        Line::default(),
    ];

    lines.extend(th::section_header(theme, "REACH ME"));
    let labels: Vec<String> = profile.contact.iter().map(|entry| entry.label.to_uppercase()).collect();
    let label_width = labels.iter().map(|label| label.width()).max().unwrap_or(0);
    for (entry, label) in profile.contact.iter().zip(labels) {
        let padding = " ".repeat(label_width - label.width() + 2);
        lines.push(Line::from(vec![
            Span::styled(format!("{label}{padding}"), theme.text_muted_style()),
            Span::styled(entry.value.clone(), theme.text_primary_style()),
        ]));
    }
    lines.push(Line::default());

    if !profile.socials.is_empty() {
        lines.extend(th::section_header(theme, "ELSEWHERE"));
        for social in &profile.socials {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", social.label), theme.accent_emphasis_style()),
                Span::styled(social.url.clone(), theme.text_secondary_style()),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::app::test_support::app_with_columns;

    #[test]
    fn contact_entries_are_aligned() {
        let app = app_with_columns(160, Instant::now());
        let text: Vec<String> = build(&app, 60).iter().map(ToString::to_string).collect();
        assert!(text.contains(&"TEL       (813) 419-9723".to_string()));
        assert!(text.contains(&"BASED IN  Riverview, Florida, USA".to_string()));
    }
}
