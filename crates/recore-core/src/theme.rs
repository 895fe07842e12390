//! The visual theme enumeration.
//!
//! Exactly two modes exist, `Light` and `Dark`. Anything else is a type
//! error at the call site, so theme handling has no runtime error paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The visual mode controlling which asset variants renderers display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light mode (dark logo on a light background).
    #[default]
    Light,
    /// Dark mode (light logo on a dark background).
    Dark,
}

impl Theme {
    /// The other member of the enumeration.
    ///
    /// Flipping twice returns the original value.
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Index into a `(light, dark)` asset pair: 0 for `Light`, 1 for `Dark`.
    pub fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Error parsing a theme name from the CLI or config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
