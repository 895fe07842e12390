//! Mock catalog content for the storefront.
//!
//! There is no backend: the home page renders fixed placeholder cards,
//! four categories and four recommended articles.

use serde::Serialize;

/// A category card shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub info: String,
}

/// An article card shown in the recommendations section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub name: String,
    pub info: String,
}

/// Section title for the category grid.
pub const CATEGORIES_TITLE: &str = "Algunas de nuestras categorías";

/// Section title for the article grid.
pub const ARTICLES_TITLE: &str = "Algunos de nuestros artículos";

/// The fixed set of placeholder categories.
pub fn sample_categories() -> Vec<Category> {
    ["Tecnología", "Hogar", "Deportes", "Moda"]
        .into_iter()
        .map(|name| Category {
            name: name.to_string(),
            info: "Explora los productos de esta categoría".to_string(),
        })
        .collect()
}

/// The fixed set of placeholder articles.
pub fn sample_articles() -> Vec<Article> {
    ["Auriculares", "Lámpara de escritorio", "Balón", "Camiseta"]
        .into_iter()
        .map(|name| Article {
            name: name.to_string(),
            info: "Artículo recomendado para ti".to_string(),
        })
        .collect()
}
