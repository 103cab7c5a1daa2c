//! Application state shared by the shell's components.
//!
//! `App` owns the single [`NavigationController`] and the
//! [`ViewportClassifier`]; components observe them read-only and report
//! [`Effect`]s back to the runtime instead of doing I/O themselves.

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_engine::{DirectionalKey, KeyboardRouter, NavigationController, NavigationError, SectionChange, ViewportClassifier};
use folio_types::{Effect, Msg, ProfileConfig, SiteConfig, ViewportClass};
use folio_util::UserPreferences;
use tracing::{debug, info, warn};

use crate::content::ContentCache;
use crate::ui::components::nav_bar::RailState;
use crate::ui::components::panel::PanelState;
use crate::ui::theme::{LoadedTheme, Theme, ThemeDefinition, catalog};

/// Reports the terminal width in pixels when the terminal knows it.
pub type PixelProbe = fn() -> Option<u32>;

/// Pixel width from `TIOCGWINSZ`, when the terminal fills it in.
pub fn terminal_pixel_width() -> Option<u32> {
    crossterm::terminal::window_size()
        .ok()
        .map(|size| u32::from(size.width))
        .filter(|width| *width > 0)
}

pub struct App {
    pub theme: Box<dyn Theme>,
    pub theme_definition: &'static ThemeDefinition,
    pub preferences: Arc<UserPreferences>,
    pub profile: ProfileConfig,
    pub navigation: NavigationController,
    pub keyboard: KeyboardRouter,
    pub viewport: ViewportClassifier,
    pub rail: RailState,
    pub panel: PanelState,
    pub content: ContentCache,
    /// Duration of the stage slide.
    pub transition_duration: Duration,
    /// Clock reading for the event being processed.
    pub now: Instant,
    cell_width_px: u32,
    pixel_probe: PixelProbe,
}

impl App {
    /// Builds the application state. `initial_columns` is `None` when the
    /// terminal could not report its size, which pins the viewport class.
    pub fn new(
        config: &SiteConfig,
        theme: LoadedTheme,
        initial_columns: Option<u16>,
        pixel_probe: PixelProbe,
        now: Instant,
    ) -> Result<Self, NavigationError> {
        let navigation = NavigationController::new(config.sections.clone())?;
        let cell_width_px = config.viewport.cell_width_px.max(1);
        let viewport = match initial_columns {
            Some(columns) => {
                let width = measure_width_px(columns, cell_width_px, pixel_probe);
                ViewportClassifier::mount(config.viewport.breakpoint_px, width)
            }
            None => {
                warn!("terminal size unavailable; using a fixed desktop layout");
                ViewportClassifier::fixed(ViewportClass::Desktop)
            }
        };
        info!(
            sections = navigation.len(),
            viewport = ?viewport.class(),
            theme = theme.definition.id,
            "shell mounted"
        );

        let indicator = Duration::from_millis(config.transition.indicator_ms);
        let panel = Duration::from_millis(config.transition.panel_ms);
        let rail = RailState::new(&navigation, indicator, now);
        Ok(Self {
            theme: theme.theme,
            theme_definition: theme.definition,
            preferences: Arc::new(UserPreferences::ephemeral()),
            profile: config.profile.clone(),
            navigation,
            keyboard: KeyboardRouter::new(),
            viewport,
            rail,
            panel: PanelState::new(panel, now),
            content: ContentCache::default(),
            transition_duration: Duration::from_millis(config.transition.duration_ms),
            now,
            cell_width_px,
            pixel_probe,
        })
    }

    /// Persists theme changes to `preferences` instead of an in-memory store.
    pub fn with_preferences(mut self, preferences: Arc<UserPreferences>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Switches to the next palette for this terminal and remembers it.
    pub fn cycle_theme(&mut self) {
        let next = catalog::next_after(self.theme_definition);
        if next.id == self.theme_definition.id {
            return;
        }
        self.theme = next.build();
        self.theme_definition = next;
        info!(theme = next.id, "theme changed");
        if let Err(error) = self.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, "failed to persist theme preference");
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Pointer path: asks the controller for `target`. On mobile an accepted
    /// change also closes the panel.
    pub fn select_section(&mut self, target: &str) -> Result<SectionChange, NavigationError> {
        let change = self.navigation.request_section_change(target).inspect_err(|error| {
            warn!(%error, "section request rejected");
        })?;
        if change.is_changed() && self.is_mobile() {
            self.panel.close(self.now);
        }
        Ok(change)
    }

    /// Keyboard path: cyclic advance or retreat.
    pub fn route_key(&mut self, key: DirectionalKey) -> Result<SectionChange, NavigationError> {
        self.keyboard.route(key, &mut self.navigation)
    }

    /// Applies an application-level message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(columns, _) => self.observe_width(*columns),
            Msg::TogglePanel => {
                if self.is_mobile() {
                    self.panel.toggle(self.now);
                }
            }
            Msg::ContentLoaded { query, result } => self.content.store(*query, result.clone()),
        }
        Vec::new()
    }

    fn observe_width(&mut self, columns: u16) {
        let width = measure_width_px(columns, self.cell_width_px, self.pixel_probe);
        if let Some(class) = self.viewport.observe(width) {
            debug!(width, ?class, "viewport class flipped");
            if !class.is_mobile() {
                self.panel.close_immediately(self.now);
            }
        }
    }
}

/// Viewport width in pixels: the terminal's own report when available,
/// otherwise columns times the configured cell width.
pub fn measure_width_px(columns: u16, cell_width_px: u32, pixel_probe: PixelProbe) -> u32 {
    pixel_probe().unwrap_or_else(|| u32::from(columns).saturating_mul(cell_width_px))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn width_estimate_uses_cell_width_without_pixel_report() {
        assert_eq!(measure_width_px(96, 8, no_pixels), 768);
        assert_eq!(measure_width_px(96, 8, || Some(1200)), 1200);
    }

    #[test]
    fn viewport_follows_resize_and_flips_once_per_crossing() {
        let now = Instant::now();
        let mut app = app_with_columns(120, now);
        assert!(!app.is_mobile());
        let mut flips = app.viewport.subscribe();

        app.update(&Msg::Resize(95, 40));
        assert!(app.is_mobile());
        assert!(flips.has_changed().unwrap_or(false));
        flips.borrow_and_update();

        app.update(&Msg::Resize(60, 40));
        app.update(&Msg::Resize(40, 40));
        assert!(!flips.has_changed().unwrap_or(true), "same-side widths never flip");

        app.update(&Msg::Resize(96, 40));
        assert!(!app.is_mobile());
        assert!(flips.has_changed().unwrap_or(false));
    }

    #[test]
    fn unknown_terminal_size_pins_desktop() {
        let now = Instant::now();
        let mut app = App::new(&SiteConfig::default(), loaded_theme(), None, no_pixels, now).expect("app");
        assert!(app.viewport.is_fixed());
        app.update(&Msg::Resize(10, 10));
        assert!(!app.is_mobile());
    }

    #[test]
    fn accepted_click_on_mobile_closes_the_panel() {
        let now = Instant::now();
        let mut app = app_with_columns(50, now);
        app.update(&Msg::TogglePanel);
        assert!(app.panel.is_open());

        app.select_section("home").expect("known id");
        assert!(app.panel.is_open(), "no-op requests leave the panel alone");

        app.select_section("resume").expect("known id");
        assert!(!app.panel.is_open());
    }

    #[test]
    fn unknown_target_leaves_everything_unchanged() {
        let now = Instant::now();
        let mut app = app_with_columns(50, now);
        app.update(&Msg::TogglePanel);
        let before = app.navigation.state();
        assert!(app.select_section("missing").is_err());
        assert_eq!(app.navigation.state(), before);
        assert!(app.panel.is_open());
    }

    #[test]
    fn theme_cycling_is_remembered() {
        let mut app = app_with_columns(120, Instant::now());
        assert_eq!(app.theme_definition.id, "folio");
        app.cycle_theme();
        assert_eq!(app.theme_definition.id, "nord");
        assert_eq!(app.preferences.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn panel_toggle_is_ignored_on_desktop() {
        let now = Instant::now();
        let mut app = app_with_columns(200, now);
        app.update(&Msg::TogglePanel);
        assert!(!app.panel.is_open());
    }
}
