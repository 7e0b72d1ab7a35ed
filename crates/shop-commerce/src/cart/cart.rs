//! Cart state and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Outcome of a single cart transition.
///
/// Transitions never fail. `NotFound` marks an operation that referenced a
/// product id absent from the cart; the cart is left untouched in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Transition {
    /// A new line item was appended with quantity 1.
    Added,
    /// An existing line item's quantity was raised.
    Incremented { quantity: u32 },
    /// An existing line item's quantity was lowered.
    Decremented { quantity: u32 },
    /// A line item was dropped; `quantity` is what it held before removal.
    Removed { quantity: u32 },
    /// No line item with the given id.
    NotFound,
}

impl Transition {
    /// Whether the transition changed the cart.
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::NotFound)
    }
}

/// A shopping cart: ordered line items, unique by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// Bumps the quantity if the product is already present, otherwise
    /// appends a new line item with quantity 1.
    pub fn add(&mut self, product: Product) -> Transition {
        if let Some(existing) = self.find_mut(product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return Transition::Incremented {
                quantity: existing.quantity,
            };
        }

        self.items.push(LineItem::new(product));
        Transition::Added
    }

    /// Raise the quantity of an item already in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> Transition {
        match self.find_mut(product_id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                Transition::Incremented {
                    quantity: item.quantity,
                }
            }
            None => Transition::NotFound,
        }
    }

    /// Lower the quantity of an item, removing it when it would drop below 1.
    pub fn decrement(&mut self, product_id: ProductId) -> Transition {
        let Some(index) = self.position(product_id) else {
            return Transition::NotFound;
        };

        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            Transition::Decremented {
                quantity: item.quantity,
            }
        } else {
            let removed = self.items.remove(index);
            Transition::Removed {
                quantity: removed.quantity,
            }
        }
    }

    /// Remove an item regardless of its quantity.
    pub fn remove(&mut self, product_id: ProductId) -> Transition {
        match self.position(product_id) {
            Some(index) => {
                let removed = self.items.remove(index);
                Transition::Removed {
                    quantity: removed.quantity,
                }
            }
            None => Transition::NotFound,
        }
    }

    /// Current line items in insertion order.
    pub fn list(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity held for a product, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.product.id == product_id)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, always at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// ID of the product this item refers to.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product::new(id, format!("Plant {}", id), "10.00")
    }

    fn ids(cart: &CartState) -> Vec<(u32, u32)> {
        cart.list()
            .iter()
            .map(|i| (i.product_id().get(), i.quantity))
            .collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartState::new();
        assert_eq!(cart.add(product(1)), Transition::Added);

        assert_eq!(ids(&cart), vec![(1, 1)]);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartState::new();
        cart.add(product(1));
        assert_eq!(cart.add(product(1)), Transition::Incremented { quantity: 2 });

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = CartState::new();
        cart.add(product(1));
        cart.add(product(2));
        cart.add(product(1));

        assert_eq!(ids(&cart), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_increment() {
        let mut cart = CartState::new();
        cart.add(product(3));

        assert_eq!(
            cart.increment(ProductId::new(3)),
            Transition::Incremented { quantity: 2 }
        );
        assert_eq!(cart.quantity_of(ProductId::new(3)), 2);
    }

    #[test]
    fn test_increment_missing_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1));
        let before = cart.clone();

        assert_eq!(cart.increment(ProductId::new(9)), Transition::NotFound);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_above_one() {
        let mut cart = CartState::new();
        cart.add(product(1));
        cart.add(product(1));
        cart.add(product(1));

        assert_eq!(
            cart.decrement(ProductId::new(1)),
            Transition::Decremented { quantity: 2 }
        );
        assert_eq!(ids(&cart), vec![(1, 2)]);
    }

    #[test]
    fn test_decrement_at_one_removes() {
        let mut cart = CartState::new();
        cart.add(product(1));
        cart.add(product(2));

        assert_eq!(
            cart.decrement(ProductId::new(1)),
            Transition::Removed { quantity: 1 }
        );
        assert_eq!(ids(&cart), vec![(2, 1)]);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_decrement_missing_is_noop() {
        let mut cart = CartState::new();
        assert_eq!(cart.decrement(ProductId::new(1)), Transition::NotFound);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartState::new();
        cart.add(product(1));
        cart.add(product(1));
        cart.add(product(2));
        cart.add(product(3));

        assert_eq!(
            cart.remove(ProductId::new(1)),
            Transition::Removed { quantity: 2 }
        );
        assert_eq!(ids(&cart), vec![(2, 1), (3, 1)]);
        assert_eq!(cart.remove(ProductId::new(1)), Transition::NotFound);
        assert_eq!(ids(&cart), vec![(2, 1), (3, 1)]);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = CartState::new();
        cart.add(product(1));
        cart.items[0].quantity = u32::MAX;

        assert_eq!(
            cart.increment(ProductId::new(1)),
            Transition::Incremented { quantity: u32::MAX }
        );
        assert_eq!(cart.item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_transition_changed() {
        assert!(Transition::Added.changed());
        assert!(Transition::Removed { quantity: 1 }.changed());
        assert!(!Transition::NotFound.changed());
    }
}
