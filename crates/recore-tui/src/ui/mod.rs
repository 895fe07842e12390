//! UI module for the recore TUI.

pub mod layout;
pub mod widgets;

pub use layout::*;
pub use widgets::*;
