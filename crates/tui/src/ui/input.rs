//! Terminal input: the listener thread and the key maps.
//!
//! A dedicated OS thread blocks on `crossterm::event::read()` and forwards
//! events over a Tokio channel, so the async loop never blocks on the
//! terminal. The thread is owned by [`InputListener`]; dropping the listener
//! stops and joins it, whichever way the shell is torn down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use folio_engine::DirectionalKey;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct InputListener {
    receiver: mpsc::Receiver<Event>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputListener {
    pub fn spawn() -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::channel(500);
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("folio-input".to_string())
            .spawn(move || read_events(sender, thread_stop))?;
        Ok(Self {
            receiver,
            stop,
            handle: Some(handle),
        })
    }

    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        self.receiver.close();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("input thread panicked");
        }
        debug!("input listener detached");
    }
}

fn read_events(sender: mpsc::Sender<Event>, stop: Arc<AtomicBool>) {
    let mut last_mouse_move = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(error) => {
                warn!(%error, "failed to poll terminal input");
                break;
            }
        }
        let event = match event::read() {
            Ok(event) => event,
            Err(error) => {
                warn!(%error, "failed to read terminal input");
                break;
            }
        };
        // Throttle mouse moves to one per poll interval.
        let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
        if is_mouse_move {
            if last_mouse_move.elapsed() < POLL_INTERVAL {
                continue;
            }
            last_mouse_move = Instant::now();
        }
        if sender.blocking_send(event).is_err() {
            break;
        }
    }
}

/// Section-local commands forwarded to the active section renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    ScrollLines(i16),
    ScrollPages(i16),
    Top,
    Bottom,
    NextItem,
    PreviousItem,
    Open,
    Back,
    CycleFilter,
}

/// Maps arrow keys to navigation keys. Modified arrows are left alone.
pub fn directional_key(key: &KeyEvent) -> Option<DirectionalKey> {
    if key.kind == KeyEventKind::Release || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(DirectionalKey::Up),
        KeyCode::Down => Some(DirectionalKey::Down),
        KeyCode::Left => Some(DirectionalKey::Left),
        KeyCode::Right => Some(DirectionalKey::Right),
        _ => None,
    }
}

pub fn view_action(key: &KeyEvent) -> Option<ViewAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('j') => ViewAction::ScrollLines(1),
        KeyCode::Char('k') => ViewAction::ScrollLines(-1),
        KeyCode::PageDown => ViewAction::ScrollPages(1),
        KeyCode::PageUp => ViewAction::ScrollPages(-1),
        KeyCode::Home => ViewAction::Top,
        KeyCode::End => ViewAction::Bottom,
        KeyCode::Tab => ViewAction::NextItem,
        KeyCode::BackTab => ViewAction::PreviousItem,
        KeyCode::Enter => ViewAction::Open,
        KeyCode::Backspace => ViewAction::Back,
        KeyCode::Char('f') => ViewAction::CycleFilter,
        _ => return None,
    };
    Some(action)
}

pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_are_directional_everything_else_passes_through() {
        assert_eq!(directional_key(&press(KeyCode::Right)), Some(DirectionalKey::Right));
        assert_eq!(directional_key(&press(KeyCode::Up)), Some(DirectionalKey::Up));
        assert_eq!(directional_key(&press(KeyCode::Char('l'))), None);
        assert_eq!(directional_key(&press(KeyCode::Enter)), None);
        assert_eq!(directional_key(&KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(directional_key(&release), None);
        assert_eq!(view_action(&KeyEvent { code: KeyCode::Char('j'), ..release }), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&press(KeyCode::Char('q'))));
        assert!(is_quit(&press(KeyCode::Esc)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn scroll_and_item_keys() {
        assert_eq!(view_action(&press(KeyCode::PageDown)), Some(ViewAction::ScrollPages(1)));
        assert_eq!(view_action(&press(KeyCode::Char('k'))), Some(ViewAction::ScrollLines(-1)));
        assert_eq!(view_action(&press(KeyCode::BackTab)), Some(ViewAction::PreviousItem));
        assert_eq!(view_action(&press(KeyCode::Char('m'))), None);
    }
}
