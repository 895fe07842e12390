//! recore-core: Headless front-end core for the recore storefront
//!
//! This crate provides the non-visual logic shared by the Home and Login
//! pages, including:
//! - The two-value theme enumeration and the shared theme store
//! - Navigation link table
//! - Mock catalog content
//! - Configuration loading and saving

pub mod catalog;
pub mod config;
pub mod nav;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use catalog::{
    sample_articles, sample_categories, Article, Category, ARTICLES_TITLE, CATEGORIES_TITLE,
};
pub use config::{Config, ConfigError, IconMode};
pub use nav::{NavLink, NAV_LINKS};
pub use store::{SubscriptionId, ThemeStore};
pub use theme::{ParseThemeError, Theme};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
