use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ContentQuery;

/// Stable identifier of a section (e.g. `"home"`, `"resume"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which renderer draws a section.
///
/// The kind is the "renderer reference" of a section entry: the shell resolves
/// it to a concrete renderer once, when the section table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Home,
    About,
    Resume,
    Certifications,
    Portfolio,
    Blogs,
    Contact,
}

impl SectionKind {
    /// Short glyph shown in the rail when the entry does not override it.
    pub fn default_icon(self) -> &'static str {
        match self {
            SectionKind::Home => "⌂",
            SectionKind::About => "☺",
            SectionKind::Resume => "≡",
            SectionKind::Certifications => "✪",
            SectionKind::Portfolio => "▤",
            SectionKind::Blogs => "✎",
            SectionKind::Contact => "✉",
        }
    }

    /// Content queries the renderer for this kind requests when mounted.
    pub fn content_queries(self) -> &'static [ContentQuery] {
        match self {
            SectionKind::Home | SectionKind::Contact => &[],
            SectionKind::About => &[ContentQuery::AboutServices, ContentQuery::AboutClients],
            SectionKind::Resume => &[
                ContentQuery::WorkHistory,
                ContentQuery::Education,
                ContentQuery::Testimonials,
                ContentQuery::CodingSkills,
                ContentQuery::DesignSkills,
            ],
            SectionKind::Certifications => &[ContentQuery::Certifications],
            SectionKind::Portfolio => &[ContentQuery::PortfolioProjects],
            SectionKind::Blogs => &[ContentQuery::Blogs],
        }
    }
}

/// One entry of the fixed, ordered section sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub id: SectionId,
    pub label: String,
    pub kind: SectionKind,
    /// Optional glyph override for the navigation rail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SectionSpec {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            icon: None,
        }
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.kind.default_icon())
    }

    /// The seven sections of the site in their canonical order.
    pub fn defaults() -> Vec<SectionSpec> {
        vec![
            SectionSpec::new("home", "Home", SectionKind::Home),
            SectionSpec::new("about", "About", SectionKind::About),
            SectionSpec::new("resume", "Resume", SectionKind::Resume),
            SectionSpec::new("certifications", "Certifications", SectionKind::Certifications),
            SectionSpec::new("portfolio", "Portfolio", SectionKind::Portfolio),
            SectionSpec::new("blogs", "Blogs", SectionKind::Blogs),
            SectionSpec::new("contact", "Contact", SectionKind::Contact),
        ]
    }
}
