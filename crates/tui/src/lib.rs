//! # Folio terminal shell
//!
//! Renders a personal site as a full-screen terminal application: a section
//! rail on wide terminals, a top bar with a slide-in panel on narrow ones, and
//! a stage that slides section views in and out as the active section changes.
//!
//! Navigation state lives in `folio-engine`; this crate observes it, turns
//! terminal input into navigation requests, and draws the result. Section
//! views pull their records from a [`folio_api::ContentSource`].

mod app;
mod content;
mod ui;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use folio_api::ContentSource;
use folio_types::SiteConfig;
use folio_util::UserPreferences;

pub use ui::theme::{LoadedTheme, THEME_ENV, ThemeDefinition, catalog::THEME_DEFINITIONS, load as load_theme};

/// Runs the shell until the user quits.
///
/// # Errors
///
/// Fails when the section list is invalid or the terminal cannot be set up.
pub async fn run(
    config: SiteConfig,
    source: Arc<dyn ContentSource>,
    theme: LoadedTheme,
    preferences: Arc<UserPreferences>,
) -> Result<()> {
    let initial_columns = crossterm::terminal::size().ok().map(|(columns, _)| columns);
    let app = app::App::new(&config, theme, initial_columns, app::terminal_pixel_width, Instant::now())?
        .with_preferences(preferences);
    ui::runtime::run_app(app, source).await
}
