//! Read-only product catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// An ordered, read-only set of purchasable products, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

/// On-disk catalog layout: a list of `[[products]]` tables or a JSON object
/// with a `products` array.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The plant catalog bundled with the storefront.
    pub fn builtin() -> Self {
        let products = vec![
            Product::new(1, "Succulent Plant", "39.99")
                .with_liked(true)
                .with_image("plant1.png")
                .with_description(
                    "A compact succulent that stores water in its leaves. \
                     Thrives in bright light and needs watering only every two weeks.",
                ),
            Product::new(2, "Dragon Plant", "29.99")
                .with_image("plant2.png")
                .with_description(
                    "Upright, spiky foliage edged in red. Tolerates low light \
                     and irregular watering.",
                ),
            Product::new(3, "Ravenea Plant", "25.99")
                .with_image("plant3.png")
                .with_description(
                    "A feathery indoor palm that prefers humid rooms and \
                     indirect sunlight.",
                ),
            Product::new(4, "Potted Plant", "25.99")
                .with_image("plant4.png")
                .with_description("A hardy leafy plant supplied in a ceramic pot."),
            Product::new(5, "Ravenea Plant", "50.99")
                .with_liked(true)
                .with_image("plant5.png")
                .with_description("A mature specimen of the indoor palm, over a metre tall."),
            Product::new(6, "Dragon Plant", "50.99")
                .with_image("plant6.png")
                .with_description("A multi-stem dragon plant grown for large spaces."),
        ];

        Self { products }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.products)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.products)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let catalog = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
