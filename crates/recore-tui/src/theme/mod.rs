//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Palette`] - Per-theme color palette (Catppuccin Latte/Mocha)
//! - [`AssetPair`] - Light/dark asset variants with pure selection
//! - [`IconSet`] - Icons with Unicode/ASCII modes

mod assets;
mod colors;
mod icons;

pub use assets::{AssetPair, CARD_IMAGE, LOGO, TOGGLE_ICON, TOGGLE_ICON_ASCII};
pub use colors::Palette;
pub use icons::IconSet;
