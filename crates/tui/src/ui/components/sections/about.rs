//! About section: services, work process, clients and fun facts.

use folio_types::{ContentQuery, ContentRecords, SectionKind, SectionSpec};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::document::DocumentView;
use super::{SectionView, content_or_status, wrapped};
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};

const WORK_PROCESS: [&str; 6] = ["DISCOVER", "IDEA", "DESIGN", "DEVELOP", "TEST", "LAUNCH"];

const FUN_FACTS: [(&str, &str); 4] = [
    ("24 COUNTRIES", "VISITED"),
    ("72 ARTICLES", "PUBLISHED"),
    ("20,000 CUPS", "OF COFFEE"),
    ("12 AWARDS", "WON"),
];

pub(crate) fn create(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(DocumentView::new(SectionKind::About.content_queries(), build))
}

fn build(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = &*app.theme;
    let heading = theme.text_primary_style().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("About Me", heading)), Line::default()];

    lines.extend(th::section_header(theme, "SERVICES"));
    match content_or_status(app, ContentQuery::AboutServices, "services") {
        Ok(ContentRecords::AboutServices(services)) => {
            for service in services {
                lines.push(Line::from(Span::styled(service.service.title.clone(), heading)));
                lines.extend(wrapped(&service.description, width, theme.text_secondary_style()));
                lines.push(Line::default());
            }
        }
        Ok(_) => {}
        Err(status) => lines.extend(status),
    }
    lines.push(Line::default());

    lines.extend(th::section_header(theme, "WORK PROCESS"));
    let mut steps = Vec::with_capacity(WORK_PROCESS.len() * 2);
    for (index, step) in WORK_PROCESS.iter().enumerate() {
        if index > 0 {
            steps.push(Span::styled(" → ", theme.accent_style()));
        }
        steps.push(Span::styled(*step, theme.text_primary_style()));
    }
    lines.push(Line::from(steps));
    lines.push(Line::default());

    lines.extend(th::section_header(theme, "CLIENTS"));
    match content_or_status(app, ContentQuery::AboutClients, "clients") {
        Ok(ContentRecords::AboutClients(clients)) => {
            let names: Vec<&str> = clients.iter().map(|entry| entry.client.title.as_str()).collect();
            lines.extend(wrapped(&names.join(" · "), width, theme.text_secondary_style()));
        }
        Ok(_) => {}
        Err(status) => lines.extend(status),
    }
    lines.push(Line::default());

    lines.extend(th::section_header(theme, "FUN FACT"));
    for (title, subtitle) in FUN_FACTS {
        lines.push(Line::from(vec![
            Span::styled(title, theme.accent_emphasis_style()),
            Span::raw(" "),
            Span::styled(subtitle, theme.text_muted_style()),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use folio_types::{AboutService, ServiceCard};

    use super::*;
    use crate::app::test_support::app_with_columns;

    #[test]
    fn services_render_once_loaded() {
        let mut app = app_with_columns(160, Instant::now());
        let before: Vec<String> = build(&app, 60).iter().map(ToString::to_string).collect();
        assert!(before.iter().any(|line| line == "Loading services…"));
        assert!(before.iter().any(|line| line.contains("DISCOVER → IDEA")));

        let services = vec![AboutService {
            description: "Landing pages that convert.".to_string(),
            service: ServiceCard {
                title: "Web Design".to_string(),
                icon: None,
            },
        }];
        app.content.store(ContentQuery::AboutServices, Ok(ContentRecords::AboutServices(services)));
        let after: Vec<String> = build(&app, 60).iter().map(ToString::to_string).collect();
        assert!(after.iter().any(|line| line == "Web Design"));
        assert!(after.iter().any(|line| line == "Landing pages that convert."));
    }
}
