//! Terminal rendering of the shell: components, input mapping, themes and the
//! event loop.

pub mod components;
pub mod input;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
