//! Storefront domain types for the plant shop.
//!
//! This crate provides:
//!
//! - **Catalog**: the read-only product list
//! - **Cart**: line items, reducer actions and a shared store handle
//! - **Favorites**: products marked during a browsing session
//! - **Navigation**: typed screen routes and a stack navigator
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let store = CartStore::new();
//!
//! let fern = catalog.require(ProductId::new(1))?.clone();
//! store.add(fern.clone());
//! store.add(fern);
//! store.decrement(ProductId::new(1));
//!
//! assert_eq!(store.quantity_of(ProductId::new(1)), 1);
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod navigation;

pub use error::CommerceError;
pub use ids::{ProductId, SessionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartAction, CartState, CartStore, LineItem, SubscriptionId, Transition};

    // Favorites
    pub use crate::favorites::Favorites;

    // Navigation
    pub use crate::navigation::{Navigator, Route};
}
