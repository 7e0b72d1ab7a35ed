//! Observability for the plant shop storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session and screen context
//! - `init_tracing` - Installs the `tracing` subscriber that renders library events

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

// Re-export SessionId from shop-commerce for convenience
pub use shop_commerce::SessionId;
