//! Desktop navigation rail.
//!
//! Lists every section in the fixed order with an active indicator that
//! slides between entries when the active section changes. The slide is
//! driven by the rail's own subscription to the navigation state and runs
//! independently of the stage transition.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavRailComponent;
pub use state::{RAIL_ROW_PITCH, RailItem, RailState};
