//! Component system for the shell.
//!
//! Components are self-contained UI elements that own their local state,
//! handle events, and render themselves into a provided `Rect`. Side effects
//! are reported back to the runtime as [`Effect`]s rather than performed
//! directly.

use crossterm::event::{KeyEvent, MouseEvent};
use folio_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

pub(crate) trait Component {
    /// Handle an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events; implementations hit-test against the areas they
    /// recorded during their last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. State changes belong in the
    /// event handlers; rendering only records hit-test areas.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas the component lays itself out into.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
