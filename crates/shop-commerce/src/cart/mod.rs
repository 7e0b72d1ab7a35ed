//! Shopping cart module.
//!
//! Contains the cart state, its reducer actions and the shared store handle.

mod action;
mod cart;
mod store;

pub use action::CartAction;
pub use cart::{CartState, LineItem, Transition};
pub use store::{CartStore, Listener, SubscriptionId};
