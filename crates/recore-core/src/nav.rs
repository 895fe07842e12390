//! Navigation link table.
//!
//! Targets are opaque strings handed to whatever hosts the page tree;
//! the core never interprets or validates them.

use serde::Serialize;

/// A labelled navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }
}

/// The navbar menu entries, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink::new("Inicio", "/"),
    NavLink::new("Productos", "/productos"),
    NavLink::new("Iniciar Sesión", "/login"),
    NavLink::new("Crear Cuenta", "/registro"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_targets() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, vec!["/", "/productos", "/login", "/registro"]);
    }

    #[test]
    fn test_links_are_labelled() {
        for link in NAV_LINKS {
            assert!(!link.label.is_empty());
        }
    }
}
