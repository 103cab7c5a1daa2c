//! # Folio Engine
//!
//! The navigation and transition core of Folio. Nothing in this crate renders
//! or reads input devices; it decides *what* is shown and *how* the switch
//! between two shown things animates, so the state machine can be exercised
//! without a terminal.
//!
//! ## Architecture
//!
//! - **`navigation`**: [`NavigationController`], the only writer of
//!   [`NavigationState`](folio_types::NavigationState). Subscribers are
//!   notified through a `tokio::sync::watch` channel on every accepted change.
//! - **`keyboard`**: [`KeyboardRouter`], cyclic advance/retreat intents.
//! - **`viewport`**: [`ViewportClassifier`], mobile/desktop classification that
//!   only publishes on a flip.
//! - **`transition`**: [`TransitionOrchestrator`], a pure mapping from a
//!   direction to slide tracks for the outgoing and incoming views.
//! - **`stage`**: [`Stage`], the mount bookkeeping and in-flight transition,
//!   including preemption.
//! - **`tween`**: [`Tween`], a linear value animation used by the shell for the
//!   rail indicator and the mobile panel.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_engine::{NavigationController, Stage, TransitionOrchestrator};
//! use folio_types::{Direction, SectionSpec};
//!
//! let mut controller = NavigationController::new(SectionSpec::defaults())?;
//! let orchestrator = TransitionOrchestrator::new(Duration::from_secs(1));
//! let mut stage = Stage::new(orchestrator, controller.active_id());
//!
//! controller.request_section_change("resume")?;
//! assert_eq!(controller.state().direction, Direction::Forward);
//!
//! let now = Instant::now();
//! stage.follow(&controller.state(), now);
//! assert_eq!(stage.mounted().len(), 2);
//! stage.tick(now + Duration::from_secs(1));
//! assert_eq!(stage.mounted().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod keyboard;
pub mod navigation;
pub mod stage;
pub mod transition;
pub mod tween;
pub mod viewport;

pub use error::NavigationError;
pub use keyboard::{DirectionalKey, KeyboardRouter, NavIntent, cyclic_index};
pub use navigation::{NavigationController, SectionChange, validate_sections};
pub use stage::{Stage, StageUpdate, TransitionState};
pub use transition::{Easing, SlideTrack, TRAVEL_EXTENT_PERCENT, TransitionOrchestrator, TransitionPlan};
pub use tween::Tween;
pub use viewport::ViewportClassifier;
