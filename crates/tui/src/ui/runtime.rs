//! Runtime: terminal lifecycle and the event loop.
//!
//! One `tokio::select!` loop multiplexes terminal input, an animation ticker,
//! finished content fetches and Ctrl+C. The ticker runs fast only while
//! something on screen is moving (a stage transition, the rail indicator, the
//! mobile panel or the home typewriter) and falls back to a slow idle interval
//! otherwise. Frames are drawn only after something happened.
//!
//! The terminal is restored by [`TerminalSession`]'s `Drop`, so early returns
//! and panics leave the user's shell usable.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_api::ContentSource;
use folio_types::{ContentQuery, ContentRecords, Effect, Msg};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    task::JoinHandle,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::input::InputListener;
use crate::ui::main_component::MainView;
use crate::ui::utils::in_render_boundary;

/// Frame interval while anything is animating.
const FAST_TICK: Duration = Duration::from_millis(33);
/// Interval while idle; only catches late resizes.
pub(crate) const IDLE_TICK: Duration = Duration::from_millis(1000);

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalSession {
    terminal: CrosstermTerminal,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal(self.terminal.backend_mut()) {
            warn!(%error, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal<W: io::Write>(writer: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(writer, LeaveAlternateScreen, DisableMouseCapture)
}

/// Restores the terminal before the default hook prints, so panic output is
/// readable, and records the panic in the log. Panics inside a section
/// renderer are recovered by the stage and keep the session as it is.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let escaped = release_terminal_for_panic(|| {
            let _ = restore_terminal(&mut io::stdout());
        });
        if escaped {
            error!(panic = %info, "folio panicked");
            default_hook(info);
        } else {
            debug!(panic = %info, "section renderer panicked");
        }
    }));
}

/// Runs `restore` unless the panic is raised inside a render boundary.
/// Returns whether the panic escapes to the default hook.
fn release_terminal_for_panic(restore: impl FnOnce()) -> bool {
    if in_render_boundary() {
        return false;
    }
    restore();
    true
}

fn ticker(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    app.now = Instant::now();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, event: Event) -> Vec<Effect> {
    match event {
        Event::Key(key) => main_view.handle_key_events(app, key),
        Event::Mouse(mouse) => main_view.handle_mouse_events(app, mouse),
        Event::Resize(columns, rows) => main_view.handle_message(app, &Msg::Resize(columns, rows)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Starts fetches for the requested content. Returns `true` on quit.
fn run_effects(
    effects: Vec<Effect>,
    source: &Arc<dyn ContentSource>,
    pending: &mut FuturesUnordered<JoinHandle<Msg>>,
) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::FetchContent(query) => {
                debug!(?query, source = %source.describe(), "fetching content");
                let source = Arc::clone(source);
                pending.push(tokio::spawn(async move { fetch(source, query).await }));
            }
            Effect::Quit => quit = true,
        }
    }
    quit
}

async fn fetch(source: Arc<dyn ContentSource>, query: ContentQuery) -> Msg {
    let result: Result<ContentRecords, String> = source.fetch(query).await.map_err(|error| {
        warn!(?query, %error, "content fetch failed");
        error.to_string()
    });
    Msg::ContentLoaded { query, result }
}

/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal.
pub async fn run_app(mut app: App, source: Arc<dyn ContentSource>) -> Result<()> {
    install_panic_hook();
    let mut input = InputListener::spawn()?;
    let mut session = TerminalSession::enter()?;

    let (mut main_view, effects) = MainView::new(&mut app);
    let mut pending: FuturesUnordered<JoinHandle<Msg>> = FuturesUnordered::new();
    run_effects(effects, &source, &mut pending);

    let mut current_interval = IDLE_TICK;
    let mut ticks = ticker(current_interval);
    // Some terminals drop resize events; poll the size as a fallback.
    let mut last_size = crossterm::terminal::size().ok();

    render(&mut session.terminal, &mut app, &mut main_view)?;
    info!("event loop started");

    loop {
        let target_interval = if main_view.needs_fast_tick(&app) { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticks = ticker(current_interval);
        }

        let mut needs_render = false;
        let effects = tokio::select! {
            maybe_event = input.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                app.now = Instant::now();
                if let Event::Resize(columns, rows) = event {
                    last_size = Some((columns, rows));
                }
                needs_render = true;
                handle_input_event(&mut app, &mut main_view, event)
            }

            _ = ticks.tick() => {
                app.now = Instant::now();
                let animating = main_view.needs_fast_tick(&app);
                let effects = main_view.handle_message(&mut app, &Msg::Tick);
                // One more frame after the last animation step settles it on screen.
                needs_render = animating || current_interval == FAST_TICK;
                effects
            }

            Some(joined) = pending.next(), if !pending.is_empty() => {
                app.now = Instant::now();
                needs_render = true;
                match joined {
                    Ok(msg) => main_view.handle_message(&mut app, &msg),
                    Err(error) => {
                        warn!(%error, "content task failed");
                        Vec::new()
                    }
                }
            }

            _ = signal::ctrl_c() => {
                debug!("interrupted");
                break;
            }
        };

        if run_effects(effects, &source, &mut pending) {
            break;
        }

        if let Ok(size) = crossterm::terminal::size()
            && last_size != Some(size)
        {
            last_size = Some(size);
            let effects = main_view.handle_message(&mut app, &Msg::Resize(size.0, size.1));
            run_effects(effects, &source, &mut pending);
            needs_render = true;
        }

        if needs_render {
            render(&mut session.terminal, &mut app, &mut main_view)?;
        }
    }

    for handle in pending.iter() {
        handle.abort();
    }
    drop(session);
    info!("event loop stopped");
    Ok(())
}
