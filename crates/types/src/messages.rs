use crate::{ContentQuery, ContentRecords};

/// Messages that can be sent to update the application state.
///
/// This enum defines the user actions and system events that reach the
/// shell's components through the runtime loop.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (animations)
    Tick,
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
    /// Open or close the mobile panel
    TogglePanel,
    /// Background content fetch completed; errors are already rendered to text
    ContentLoaded {
        query: ContentQuery,
        result: Result<ContentRecords, String>,
    },
}

/// Side effects that can be triggered by state changes.
///
/// Components report these instead of performing I/O themselves; the runtime
/// executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a content kind from the configured content source
    FetchContent(ContentQuery),
    /// Leave the application
    Quit,
}
