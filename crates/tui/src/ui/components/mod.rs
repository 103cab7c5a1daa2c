//! UI components: navigation rail, mobile top bar and panel, content stage
//! and hint bar.

pub mod common;
pub mod component;
pub mod hint_bar;
pub mod nav_bar;
pub mod panel;
pub mod sections;
pub mod stage;
pub mod top_bar;

pub use component::*;
pub use hint_bar::HintBarComponent;
pub use nav_bar::NavRailComponent;
pub use panel::PanelComponent;
pub use stage::StageComponent;
pub use top_bar::TopBarComponent;
