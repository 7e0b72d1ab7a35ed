//! Shared cart store handle.
//!
//! The store owns the only `CartState` of a storefront session and is
//! handed to every screen that needs it. Clones share the same state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cart::{CartAction, CartState, LineItem, Transition};
use crate::catalog::Product;
use crate::ids::ProductId;

/// Callback invoked with the new item list after each state change.
pub type Listener = Arc<dyn Fn(&[LineItem]) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Serializing handle over a single cart.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Mutex<Inner>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::with_state(CartState::new())
    }

    /// Create a store seeded with an existing cart.
    pub fn with_state(state: CartState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                listeners: Vec::new(),
                next_subscription: 0,
            })),
        }
    }

    /// Apply an action and notify subscribers if the cart changed.
    pub fn dispatch(&self, action: CartAction) -> Transition {
        let kind = action.kind();
        let product_id = action.product_id();

        let (transition, notify) = {
            let mut inner = self.lock();
            let transition = inner.state.apply(action);
            let notify = transition.changed().then(|| {
                let items = inner.state.list().to_vec();
                let listeners: Vec<Listener> =
                    inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
                (items, listeners)
            });
            (transition, notify)
        };

        match transition {
            Transition::NotFound => {
                tracing::debug!(action = kind, %product_id, "cart action ignored, item not in cart");
            }
            _ => {
                tracing::debug!(action = kind, %product_id, ?transition, "cart updated");
            }
        }

        // Listeners run outside the lock so they may read the store.
        if let Some((items, listeners)) = notify {
            for listener in listeners {
                listener(&items);
            }
        }

        transition
    }

    /// Add a product.
    pub fn add(&self, product: Product) -> Transition {
        self.dispatch(CartAction::Add { product })
    }

    /// Increment a product's quantity.
    pub fn increment(&self, product_id: ProductId) -> Transition {
        self.dispatch(CartAction::Increment { product_id })
    }

    /// Decrement a product's quantity.
    pub fn decrement(&self, product_id: ProductId) -> Transition {
        self.dispatch(CartAction::Decrement { product_id })
    }

    /// Remove a product.
    pub fn remove(&self, product_id: ProductId) -> Transition {
        self.dispatch(CartAction::Remove { product_id })
    }

    /// Snapshot of the current line items.
    pub fn list(&self) -> Vec<LineItem> {
        self.lock().state.list().to_vec()
    }

    /// Snapshot of the whole cart.
    pub fn snapshot(&self) -> CartState {
        self.lock().state.clone()
    }

    /// Quantity held for a product, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.lock().state.quantity_of(product_id)
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lock().state.item_count()
    }

    /// Register a listener for state changes.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[LineItem]) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let len_before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() < len_before
    }

    // Transitions cannot leave the cart half-updated, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("CartStore")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
