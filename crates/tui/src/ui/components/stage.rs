//! The content stage: mounts section renderers and plays the push transition
//! between them.
//!
//! The stage follows the navigation state through its own `watch` receiver.
//! Every mounted renderer draws into an off-screen buffer the size of the
//! stage, which is then copied at the renderer's current vertical offset. The
//! incoming renderer is copied last so it stacks above the outgoing one.

use std::collections::HashMap;
use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};
use folio_engine::{Stage, StageUpdate, TransitionOrchestrator};
use folio_types::{Effect, Msg, NavigationState, SectionId};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::sections::{SectionRegistry, SectionView};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::input::ViewAction;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{blit, percent_to_cells, render_boundary};

/// Rows scrolled per mouse-wheel notch.
const WHEEL_ROWS: i16 = 3;

pub struct StageComponent {
    stage: Stage,
    registry: SectionRegistry,
    observer: watch::Receiver<NavigationState>,
    views: HashMap<SectionId, Box<dyn SectionView>>,
    last_area: Rect,
}

impl StageComponent {
    /// Builds the stage and mounts the initially active section.
    pub fn new(app: &mut App) -> (Self, Vec<Effect>) {
        let mut observer = app.navigation.subscribe();
        let initial = observer.borrow_and_update().active_section_id.clone();
        let mut component = Self {
            stage: Stage::new(TransitionOrchestrator::new(app.transition_duration), initial.clone()),
            registry: SectionRegistry::resolve(&app.navigation.sections()),
            observer,
            views: HashMap::new(),
            last_area: Rect::default(),
        };
        let effects = component.mount(app, &initial);
        (component, effects)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.stage.is_animating() || self.views.values().any(|view| view.is_animating(now))
    }

    /// Ids of the mounted renderers, bottom to top.
    pub fn mounted(&self) -> Vec<SectionId> {
        self.stage.mounted()
    }

    /// Hint-bar entries of the section being shown or moved to.
    pub fn hints(&self) -> &'static [(&'static str, &'static str)] {
        self.views.get(self.stage.target()).map(|view| view.hints()).unwrap_or_default()
    }

    /// Picks up a navigation change published since the last call.
    pub fn sync(&mut self, app: &mut App) -> Vec<Effect> {
        if !self.observer.has_changed().unwrap_or(false) {
            return Vec::new();
        }
        let state = self.observer.borrow_and_update().clone();
        let update = self.stage.follow(&state, app.now);
        self.apply(app, update)
    }

    fn apply(&mut self, app: &mut App, update: StageUpdate) -> Vec<Effect> {
        for id in &update.unmounted {
            if self.views.remove(id).is_some() {
                debug!(section = %id, "section unmounted");
            }
        }
        let mut effects = Vec::new();
        for id in &update.mounted {
            effects.extend(self.mount(app, id));
        }
        effects
    }

    fn mount(&mut self, app: &mut App, id: &SectionId) -> Vec<Effect> {
        let Some(mut view) = self.registry.create(id, app) else {
            warn!(section = %id, "no renderer registered for section");
            return Vec::new();
        };
        debug!(section = %id, "section mounted");
        let effects = view.on_mount(app);
        self.views.insert(id.clone(), view);
        effects
    }

    /// Routes a view-level action to the active renderer.
    pub fn handle_action(&mut self, app: &App, action: ViewAction) -> bool {
        match self.views.get_mut(self.stage.target()) {
            Some(view) => view.handle_action(action, app),
            None => false,
        }
    }

    /// Draws one renderer into `scratch`. A renderer that panics is replaced
    /// by an error notice until it is unmounted.
    fn draw_view(&mut self, id: &SectionId, scratch: &mut Buffer, app: &App) -> bool {
        let Some(view) = self.views.get_mut(id) else {
            return false;
        };
        let area = scratch.area;
        if render_boundary(|| view.render(area, scratch, app)).is_ok() {
            return true;
        }
        warn!(section = %id, "section renderer panicked; showing an error notice");
        let mut failed = FailedView;
        scratch.reset();
        failed.render(area, scratch, app);
        self.views.insert(id.clone(), Box::new(failed));
        true
    }
}

impl Component for StageComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if !matches!(msg, Msg::Tick) {
            return Vec::new();
        }
        let update = self.stage.tick(app.now);
        let effects = self.apply(app, update);
        for view in self.views.values_mut() {
            view.tick(app.now);
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !self.last_area.contains(Position::new(mouse.column, mouse.row)) {
            return Vec::new();
        }
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_ROWS,
            MouseEventKind::ScrollUp => -WHEEL_ROWS,
            _ => return Vec::new(),
        };
        self.handle_action(app, ViewAction::ScrollLines(delta));
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.last_area = area;
        frame.render_widget(Block::default().style(th::background_style(&*app.theme)), area);
        if area.is_empty() {
            return;
        }

        let now = app.now;
        let layers: Vec<(SectionId, f32)> = match self.stage.transition() {
            Some(transition) => vec![
                (transition.outgoing_id().clone(), transition.outgoing_offset(now)),
                (transition.incoming_id().clone(), transition.incoming_offset(now)),
            ],
            None => vec![(self.stage.target().clone(), 0.0)],
        };

        let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
        for (id, offset) in layers {
            scratch.reset();
            if self.draw_view(&id, &mut scratch, app) {
                let dy = percent_to_cells(offset, area.height);
                blit(&scratch, frame.buffer_mut(), area, 0, dy);
            }
        }
    }
}

/// Stand-in for a renderer that panicked.
struct FailedView;

impl SectionView for FailedView {
    fn render(&mut self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &*app.theme;
        Block::default().style(th::background_style(theme)).render(area, buf);
        let lines = vec![
            Line::from(Span::styled("This section failed to render.", theme.error_style())),
            Line::from(Span::styled("Switch away and back to try again.", theme.text_muted_style())),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(area.inner(Margin::new(2, 1)), buf);
    }
}
