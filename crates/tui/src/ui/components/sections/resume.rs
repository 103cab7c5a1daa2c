//! Resume section: work history, education, skills and testimonials.

use folio_types::{ContentQuery, ContentRecords, SectionKind, SectionSpec, Skill};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::document::DocumentView;
use super::{SectionView, content_or_status, wrapped};
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Width of a skill meter bar, in cells.
const METER_WIDTH: u16 = 20;
const SKILL_NAME_WIDTH: usize = 18;

pub(crate) fn create(_spec: &SectionSpec, _app: &App) -> Box<dyn SectionView> {
    Box::new(DocumentView::new(SectionKind::Resume.content_queries(), build))
}

/// One timeline entry: date badge, title, place and wrapped description.
fn timeline_entry(theme: &dyn Theme, width: u16, date: &str, title: &str, place: &str, description: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {date} "), theme.badge_style())),
        Line::from(Span::styled(title.to_string(), theme.text_primary_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(place.to_string(), theme.accent_style())),
    ];
    lines.extend(wrapped(description, width, theme.text_secondary_style()));
    lines.push(Line::default());
    lines
}

fn skill_lines(theme: &dyn Theme, skills: &[Skill]) -> Vec<Line<'static>> {
    skills
        .iter()
        .map(|skill| {
            let mut spans = vec![Span::styled(
                format!("{:<SKILL_NAME_WIDTH$}", skill.name),
                theme.text_primary_style(),
            )];
            spans.extend(th::meter_spans(theme, skill.percentage, METER_WIDTH));
            Line::from(spans)
        })
        .collect()
}

fn build(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = &*app.theme;
    let mut lines = vec![
        Line::from(Span::styled("Resume", theme.text_primary_style().add_modifier(Modifier::BOLD))),
        Line::default(),
    ];

    lines.extend(th::section_header(theme, "WORK HISTORY"));
    match content_or_status(app, ContentQuery::WorkHistory, "work history") {
        Ok(ContentRecords::WorkHistory(jobs)) => {
            for job in jobs {
                lines.extend(timeline_entry(theme, width, &job.date, &job.title, &job.company, &job.description));
            }
        }
        Ok(_) => {}
        Err(status) => lines.extend(status),
    }
    lines.push(Line::default());

    lines.extend(th::section_header(theme, "EDUCATION"));
    match content_or_status(app, ContentQuery::Education, "education") {
        Ok(ContentRecords::Education(entries)) => {
            for entry in entries {
                lines.extend(timeline_entry(theme, width, &entry.date, &entry.title, &entry.institution, &entry.description));
            }
        }
        Ok(_) => {}
        Err(status) => lines.extend(status),
    }
    lines.push(Line::default());

    for (query, title, label) in [
        (ContentQuery::CodingSkills, "CODING SKILLS", "coding skills"),
        (ContentQuery::DesignSkills, "DESIGN SKILLS", "design skills"),
    ] {
        lines.extend(th::section_header(theme, title));
        match content_or_status(app, query, label) {
            Ok(ContentRecords::CodingSkills(skills) | ContentRecords::DesignSkills(skills)) => {
                lines.extend(skill_lines(theme, skills));
            }
            Ok(_) => {}
            Err(status) => lines.extend(status),
        }
        lines.push(Line::default());
    }

    lines.extend(th::section_header(theme, "TESTIMONIALS"));
    match content_or_status(app, ContentQuery::Testimonials, "testimonials") {
        Ok(ContentRecords::Testimonials(testimonials)) => {
            for testimonial in testimonials {
                lines.extend(wrapped(&format!("“{}”", testimonial.text), width, theme.text_secondary_style()));
                lines.push(Line::from(vec![
                    Span::styled(format!("— {}", testimonial.name), theme.text_primary_style().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", testimonial.position), theme.text_muted_style()),
                ]));
                lines.push(Line::default());
            }
        }
        Ok(_) => {}
        Err(status) => lines.extend(status),
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use folio_types::WorkHistory;

    use super::*;
    use crate::app::test_support::app_with_columns;

    #[test]
    fn skills_render_as_meters() {
        let mut app = app_with_columns(160, Instant::now());
        let skills = vec![Skill {
            name: "Rust".to_string(),
            percentage: 50,
        }];
        app.content.store(ContentQuery::CodingSkills, Ok(ContentRecords::CodingSkills(skills)));
        let text: Vec<String> = build(&app, 60).iter().map(ToString::to_string).collect();
        let meter = text.iter().find(|line| line.starts_with("Rust")).expect("skill line");
        assert!(meter.contains(&"█".repeat(10)));
        assert!(meter.ends_with(" 50%"));
        assert!(text.iter().any(|line| line == "Loading design skills…"));
    }

    #[test]
    fn fetch_failure_stays_inside_its_block() {
        let mut app = app_with_columns(160, Instant::now());
        app.content.store(ContentQuery::Education, Err("status 500".to_string()));
        let jobs = vec![WorkHistory {
            date: "2019 - Present".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Built things".to_string(),
        }];
        app.content.store(ContentQuery::WorkHistory, Ok(ContentRecords::WorkHistory(jobs)));
        let text: Vec<String> = build(&app, 60).iter().map(ToString::to_string).collect();
        assert!(text.iter().any(|line| line == "Acme"));
        assert!(text.iter().any(|line| line == "Could not load education: status 500"));
    }
}
