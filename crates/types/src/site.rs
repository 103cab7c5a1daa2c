//! Site configuration model (`site.json`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::SectionSpec;

/// Top-level site configuration.
///
/// Every field has a default so an absent or partial file still describes the
/// original seven-section site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub profile: ProfileConfig,
    pub sections: Vec<SectionSpec>,
    pub viewport: ViewportConfig,
    pub transition: TransitionConfig,
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            sections: SectionSpec::defaults(),
            viewport: ViewportConfig::default(),
            transition: TransitionConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    /// Short name shown on the rail.
    pub name: String,
    /// Full name shown on the home section.
    pub full_name: String,
    /// Small badge next to the name on the rail.
    pub badge: String,
    /// Title shown in the mobile top bar.
    pub title: String,
    /// Phrases cycled by the home typewriter.
    pub phrases: Vec<String>,
    pub headline: String,
    pub contact: Vec<ContactEntry>,
    pub socials: Vec<SocialLink>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Kenneth".to_string(),
            full_name: "Kenneth Webber".to_string(),
            badge: "The Brain".to_string(),
            title: "Kenneth (The Brain)".to_string(),
            phrases: vec![
                "a blogger.".to_string(),
                "a wordpress lover.".to_string(),
                "an adventurer.".to_string(),
            ],
            headline: "10 Years In Fortune 500".to_string(),
            contact: vec![
                ContactEntry::new("Based in", "Riverview, Florida, USA"),
                ContactEntry::new("Tel", "(813) 419-9723"),
                ContactEntry::new("Email", "kennethwebber@geekyandthebra.in"),
                ContactEntry::new("Status", "Freelance available"),
            ],
            socials: vec![
                SocialLink::new("Facebook", "#"),
                SocialLink::new("Twitter", "#"),
                SocialLink::new("LinkedIn", "#"),
                SocialLink::new("Instagram", "#"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
}

impl ContactEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Responsive breakpoint settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportConfig {
    /// Widths strictly below this many pixels are classified as mobile.
    pub breakpoint_px: u32,
    /// Pixel width assumed per terminal cell when the terminal does not report pixels.
    pub cell_width_px: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            cell_width_px: 8,
        }
    }
}

/// Animation timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionConfig {
    /// Stage slide duration (one time unit).
    pub duration_ms: u64,
    /// Active-indicator tween on the desktop rail.
    pub indicator_ms: u64,
    /// Mobile panel slide in/out.
    pub panel_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            indicator_ms: 300,
            panel_ms: 300,
        }
    }
}

/// Where section renderers get their records from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    /// GraphQL endpoint of the content backend.
    pub endpoint: Option<String>,
    /// JSON file used instead of (or when there is no) endpoint.
    pub static_path: Option<PathBuf>,
}
