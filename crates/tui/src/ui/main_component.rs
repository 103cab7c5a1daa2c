//! The navigation shell: lays out the rail or the mobile top bar and panel
//! around the content stage, and routes input to them.
//!
//! Every handled event ends with [`MainView::synchronize`], which lets the
//! stage and the rail pick up whatever the navigation controller published
//! while the event was processed.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use folio_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Block,
};

use super::components::{Component, HintBarComponent, NavRailComponent, PanelComponent, StageComponent, TopBarComponent};
use super::input::{directional_key, is_quit, view_action};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Width of the desktop rail, in columns.
const RAIL_WIDTH: u16 = 26;
const TOP_BAR_HEIGHT: u16 = 3;

pub struct MainView {
    pub stage: StageComponent,
    rail: NavRailComponent,
    top_bar: TopBarComponent,
    panel: PanelComponent,
    hint_bar: HintBarComponent,
}

impl MainView {
    /// Builds the shell and mounts the initial section. The returned effects
    /// are the initial section's content requests.
    pub fn new(app: &mut App) -> (Self, Vec<Effect>) {
        let (stage, effects) = StageComponent::new(app);
        let view = Self {
            stage,
            rail: NavRailComponent::new(),
            top_bar: TopBarComponent,
            panel: PanelComponent,
            hint_bar: HintBarComponent::default(),
        };
        (view, effects)
    }

    /// Lets observers catch up with navigation changes.
    pub fn synchronize(&mut self, app: &mut App) -> Vec<Effect> {
        let effects = self.stage.sync(app);
        app.rail.sync(&app.navigation, app.now);
        effects
    }

    /// Whether anything on screen is moving and needs frequent redraws.
    pub fn needs_fast_tick(&self, app: &App) -> bool {
        self.stage.is_animating(app.now) || app.rail.is_animating(app.now) || app.panel.is_animating(app.now)
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        if key.code == KeyCode::Esc && app.is_mobile() && app.panel.is_open() {
            app.panel.close(app.now);
            return Vec::new();
        }
        if is_quit(&key) {
            return vec![Effect::Quit];
        }
        if key.code == KeyCode::Char('m') && key.modifiers == KeyModifiers::NONE {
            return app.update(&Msg::TogglePanel);
        }
        if key.code == KeyCode::Char('t') && key.modifiers == KeyModifiers::NONE {
            app.cycle_theme();
            return Vec::new();
        }
        if let Some(direction) = directional_key(&key) {
            // Unknown targets cannot come out of a cyclic step; rejections are logged.
            let _ = app.route_key(direction);
            return Vec::new();
        }
        if let Some(action) = view_action(&key) {
            self.stage.handle_action(app, action);
        }
        Vec::new()
    }

    fn handle_mouse(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if app.is_mobile() {
            effects.extend(self.top_bar.handle_mouse_events(app, mouse));
            if app.panel.is_open() {
                // The open panel and its backdrop swallow everything below the top bar.
                effects.extend(self.panel.handle_mouse_events(app, mouse));
                return effects;
            }
        } else {
            effects.extend(self.rail.handle_mouse_events(app, mouse));
        }
        effects.extend(self.stage.handle_mouse_events(app, mouse));
        effects
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        effects.extend(self.stage.handle_message(app, msg));
        effects.extend(self.synchronize(app));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = self.handle_key(app, key);
        effects.extend(self.synchronize(app));
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.handle_mouse(app, mouse);
        effects.extend(self.synchronize(app));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::background_style(&*app.theme)), area);
        let layout = self.get_preferred_layout(app, area);
        self.hint_bar.section_hints = self.stage.hints();

        if app.is_mobile() {
            let [top, stage, hints] = [layout[0], layout[1], layout[2]];
            self.top_bar.render(frame, top, app);
            self.stage.render(frame, stage, app);
            self.hint_bar.render(frame, hints, app);
            self.panel.render(frame, stage.union(hints), app);
        } else {
            let [rail, stage, hints] = [layout[0], layout[1], layout[2]];
            self.rail.render(frame, rail, app);
            self.stage.render(frame, stage, app);
            self.hint_bar.render(frame, hints, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<ratatui::text::Span<'_>> {
        self.hint_bar.get_hint_spans(app)
    }

    /// Mobile: `[top bar, stage, hints]`. Desktop: `[rail, stage, hints]`.
    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let [body, hints] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        if app.is_mobile() {
            let [top, stage] = Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(1)]).areas(body);
            vec![top, stage, hints]
        } else {
            let [rail, stage] = Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Min(1)]).areas(body);
            vec![rail, stage, hints]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{MouseButton, MouseEventKind};
    use folio_types::{ContentQuery, SectionId};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::app::test_support::app_with_columns;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(view: &mut MainView, app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw shell");
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    /// Position of the first cell of `needle` on screen.
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let text = screen_text(buffer);
        text.lines().enumerate().find_map(|(y, line)| {
            let byte = line.find(needle)?;
            let x = line[..byte].chars().count();
            Some((x as u16, y as u16))
        })
    }

    #[test]
    fn arrow_keys_cycle_and_the_stage_follows() {
        let start = Instant::now();
        let mut app = app_with_columns(160, start);
        let (mut view, _) = MainView::new(&mut app);

        let effects = view.handle_key_events(&mut app, key(KeyCode::Left));
        assert_eq!(app.navigation.active_id().as_str(), "contact");
        assert!(effects.is_empty());
        assert_eq!(view.stage.mounted(), vec![SectionId::from("home"), SectionId::from("contact")]);
        assert!(view.needs_fast_tick(&app));

        let effects = view.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.navigation.active_id().as_str(), "home");
        assert!(effects.is_empty());
        // Preempted: contact is now outgoing, home comes back in fresh.
        assert_eq!(view.stage.mounted(), vec![SectionId::from("contact"), SectionId::from("home")]);

        app.now = start + Duration::from_secs(2);
        view.handle_message(&mut app, &Msg::Tick);
        assert_eq!(view.stage.mounted(), vec![SectionId::from("home")]);
    }

    #[test]
    fn quit_keys_produce_the_quit_effect() {
        let mut app = app_with_columns(160, Instant::now());
        let (mut view, _) = MainView::new(&mut app);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::Quit]);
    }

    #[test]
    fn rail_click_requests_the_section_and_its_content() {
        let mut app = app_with_columns(160, Instant::now());
        let (mut view, _) = MainView::new(&mut app);
        let buffer = draw(&mut view, &mut app, 160, 40);
        let (x, y) = find(&buffer, "Portfolio").expect("rail entry");

        let effects = view.handle_mouse_events(&mut app, click(x, y));
        assert_eq!(app.navigation.active_id().as_str(), "portfolio");
        assert_eq!(effects, vec![Effect::FetchContent(ContentQuery::PortfolioProjects)]);
    }

    #[test]
    fn mobile_menu_opens_the_panel_and_a_selection_closes_it() {
        let start = Instant::now();
        let mut app = app_with_columns(60, start);
        assert!(app.is_mobile());
        let (mut view, _) = MainView::new(&mut app);

        let buffer = draw(&mut view, &mut app, 60, 30);
        let (x, y) = find(&buffer, "☰").expect("menu button");
        view.handle_mouse_events(&mut app, click(x, y));
        assert!(app.panel.is_open());

        app.now = start + Duration::from_millis(400);
        let buffer = draw(&mut view, &mut app, 60, 30);
        let (x, y) = find(&buffer, "Resume").expect("panel entry");
        view.handle_mouse_events(&mut app, click(x, y));
        assert_eq!(app.navigation.active_id().as_str(), "resume");
        assert!(!app.panel.is_open());
    }

    #[test]
    fn keyboard_navigation_leaves_the_mobile_panel_open() {
        let start = Instant::now();
        let mut app = app_with_columns(60, start);
        let (mut view, _) = MainView::new(&mut app);
        view.handle_key_events(&mut app, key(KeyCode::Char('m')));
        assert!(app.panel.is_open());

        view.handle_key_events(&mut app, key(KeyCode::Down));
        assert_eq!(app.navigation.active_id().as_str(), "about");
        assert!(app.panel.is_open());

        // Esc closes the panel before it quits.
        assert!(view.handle_key_events(&mut app, key(KeyCode::Esc)).is_empty());
        assert!(!app.panel.is_open());
    }

    #[test]
    fn theme_key_switches_the_palette() {
        let mut app = app_with_columns(160, Instant::now());
        let (mut view, _) = MainView::new(&mut app);
        let before = app.theme_definition.id;
        view.handle_key_events(&mut app, key(KeyCode::Char('t')));
        assert_ne!(app.theme_definition.id, before);
        let text = screen_text(&draw(&mut view, &mut app, 160, 30));
        assert!(text.contains(app.theme_definition.label));
    }

    #[test]
    fn desktop_layout_shows_the_rail_and_profile() {
        let mut app = app_with_columns(160, Instant::now());
        let (mut view, _) = MainView::new(&mut app);
        let text = screen_text(&draw(&mut view, &mut app, 120, 30));
        assert!(text.contains("Kenneth"));
        assert!(text.contains("Certifications"));
        assert!(text.contains("Quit"));
    }
}
