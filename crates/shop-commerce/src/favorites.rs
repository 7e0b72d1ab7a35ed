//! Per-session favourites.
//!
//! Favourites belong to the browsing session, not the catalog: they start
//! empty and are never written back to `Product::liked`.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Set of favourite product ids, in the order they were marked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a product in or out of the set. Returns true if it is now a favourite.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if let Some(index) = self.ids.iter().position(|id| *id == product_id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    /// Check if a product is a favourite.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Favourite ids in the order they were marked.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of favourites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no favourites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_and_off() {
        let mut favorites = Favorites::new();
        let id = ProductId::new(3);

        assert!(favorites.toggle(id));
        assert!(favorites.contains(id));
        assert!(!favorites.toggle(id));
        assert!(!favorites.contains(id));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut favorites = Favorites::new();
        favorites.toggle(ProductId::new(1));
        favorites.toggle(ProductId::new(2));
        let before = favorites.clone();

        favorites.toggle(ProductId::new(5));
        favorites.toggle(ProductId::new(5));
        assert_eq!(favorites, before);

        favorites.toggle(ProductId::new(1));
        favorites.toggle(ProductId::new(1));
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains(ProductId::new(1)));
    }

    #[test]
    fn test_keeps_marking_order() {
        let mut favorites = Favorites::new();
        for id in [4, 1, 6] {
            favorites.toggle(ProductId::new(id));
        }
        favorites.toggle(ProductId::new(1));

        assert_eq!(favorites.ids(), &[ProductId::new(4), ProductId::new(6)]);
        assert!(!favorites.is_empty());
    }
}
