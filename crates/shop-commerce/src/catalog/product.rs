//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the catalog and never mutated by the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price as display text (e.g. "39.99"); never parsed for arithmetic.
    pub price: String,
    /// Whether the product is marked as a favourite.
    #[serde(default)]
    pub liked: bool,
    /// Opaque reference to the display asset.
    #[serde(default)]
    pub image: String,
    /// Free-text description shown on the detail screen.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a new product with no image, description or like flag.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            liked: false,
            image: String::new(),
            description: String::new(),
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the like flag.
    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    /// Price formatted for display.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}
