//! Shared type definitions for Folio.
//!
//! Everything that crosses a crate boundary lives here: the static section
//! sequence, the navigation and viewport state observed by the shell, the
//! typed content records delivered by the content collaborator, the site
//! configuration model, and the `Msg`/`Effect` vocabulary used by the TUI
//! event loop.

mod content;
mod messages;
mod navigation;
mod section;
mod site;
mod viewport;

pub use content::*;
pub use messages::{Effect, Msg};
pub use navigation::{Direction, NavigationState};
pub use section::{SectionId, SectionKind, SectionSpec};
pub use site::*;
pub use viewport::ViewportClass;
