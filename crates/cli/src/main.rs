use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_types::{ContentQuery, SiteConfig};
use folio_util::{UserPreferences, default_log_path, load_config};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// A personal site, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Site configuration file (defaults to FOLIO_CONFIG_PATH or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Theme to start with; overrides FOLIO_THEME and the saved preference
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Ignore the configured endpoint and serve the static content file
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the configured sections in navigation order
    Sections,
    /// Fetch one content kind and print its records as JSON
    Content {
        /// Content kind, e.g. `blogs` or `codingskills`
        kind: ContentQuery,
    },
    /// List the available themes
    Themes,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // The TUI owns the terminal, so its logs go to a file.
    init_tracing(cli.command.is_none());

    let config = load_config(cli.config.as_deref()).context("failed to load site configuration")?;
    match cli.command {
        None => run_tui(config, cli.theme.as_deref(), cli.offline).await,
        Some(Command::Sections) => {
            print_sections(&config);
            Ok(())
        }
        Some(Command::Content { kind }) => print_content(&config, kind, cli.offline).await,
        Some(Command::Themes) => {
            print_themes(&open_preferences());
            Ok(())
        }
    }
}

async fn run_tui(config: SiteConfig, theme: Option<&str>, offline: bool) -> Result<()> {
    let source = folio_api::source_from_config(&config.content, offline)?;
    let preferences = Arc::new(open_preferences());
    let preferred = preferences.preferred_theme();
    let theme = folio_tui::load_theme(theme, preferred.as_deref());
    folio_tui::run(config, source, theme, preferences).await
}

fn print_sections(config: &SiteConfig) {
    for (position, section) in config.sections.iter().enumerate() {
        println!("{:>2}  {:<16} {:<16} {:?}", position + 1, section.id.as_str(), section.label, section.kind);
    }
}

async fn print_content(config: &SiteConfig, kind: ContentQuery, offline: bool) -> Result<()> {
    let source = folio_api::source_from_config(&config.content, offline)?;
    debug!(source = %source.describe(), ?kind, "fetching content");
    let records = source.fetch(kind).await.with_context(|| format!("failed to fetch {kind}"))?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn print_themes(preferences: &UserPreferences) {
    let preferred = preferences.preferred_theme();
    for definition in folio_tui::THEME_DEFINITIONS {
        let marker = if preferred.as_deref() == Some(definition.id) { "*" } else { " " };
        println!("{marker} {:<10} {}", definition.id, definition.description);
    }
}

/// Preferences from disk, or an in-memory store when the config directory
/// is unusable.
fn open_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; changes will not be saved");
        UserPreferences::ephemeral()
    })
}

fn init_tracing(to_file: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if to_file && let Some(file) = open_log_file(&default_log_path()) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .try_init();
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}
