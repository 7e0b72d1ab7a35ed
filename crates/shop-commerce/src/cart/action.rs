//! Reducer-style cart actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::{CartState, Transition};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A user gesture forwarded to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Tap-to-add from the listing or detail screen.
    Add { product: Product },
    /// Tap `+`.
    Increment { product_id: ProductId },
    /// Tap `-`.
    Decrement { product_id: ProductId },
    /// Tap remove.
    Remove { product_id: ProductId },
}

impl CartAction {
    /// Product the action targets.
    pub fn product_id(&self) -> ProductId {
        match self {
            CartAction::Add { product } => product.id,
            CartAction::Increment { product_id }
            | CartAction::Decrement { product_id }
            | CartAction::Remove { product_id } => *product_id,
        }
    }

    /// Short action name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Increment { .. } => "increment",
            CartAction::Decrement { .. } => "decrement",
            CartAction::Remove { .. } => "remove",
        }
    }

    /// Parse a script token such as `add:3`, `inc:3`, `dec:3` or `rm:3`.
    ///
    /// `add` resolves the product through the catalog; the other actions
    /// take the id as-is, so stale ids still reach the cart as no-ops.
    pub fn parse(token: &str, catalog: &Catalog) -> Result<Self, CommerceError> {
        let (verb, id) = token
            .split_once(':')
            .ok_or_else(|| CommerceError::InvalidAction(format!("missing ':' in {:?}", token)))?;
        let product_id: ProductId = id.parse()?;

        match verb.trim().to_lowercase().as_str() {
            "add" => Ok(CartAction::Add {
                product: catalog.require(product_id)?.clone(),
            }),
            "inc" | "increment" | "+" => Ok(CartAction::Increment { product_id }),
            "dec" | "decrement" | "-" => Ok(CartAction::Decrement { product_id }),
            "rm" | "remove" => Ok(CartAction::Remove { product_id }),
            other => Err(CommerceError::InvalidAction(format!(
                "unknown verb {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.product_id())
    }
}

impl CartState {
    /// Apply a single action. This is the only reducer entry point.
    pub fn apply(&mut self, action: CartAction) -> Transition {
        match action {
            CartAction::Add { product } => self.add(product),
            CartAction::Increment { product_id } => self.increment(product_id),
            CartAction::Decrement { product_id } => self.decrement(product_id),
            CartAction::Remove { product_id } => self.remove(product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let catalog = Catalog::builtin();

        let add = CartAction::parse("add:2", &catalog).unwrap();
        assert!(matches!(&add, CartAction::Add { product } if product.name == "Dragon Plant"));

        assert_eq!(
            CartAction::parse("inc:2", &catalog).unwrap(),
            CartAction::Increment {
                product_id: ProductId::new(2)
            }
        );
        assert_eq!(
            CartAction::parse("DEC:5", &catalog).unwrap(),
            CartAction::Decrement {
                product_id: ProductId::new(5)
            }
        );
        assert_eq!(
            CartAction::parse("rm:99", &catalog).unwrap(),
            CartAction::Remove {
                product_id: ProductId::new(99)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let catalog = Catalog::builtin();

        assert!(matches!(
            CartAction::parse("add", &catalog),
            Err(CommerceError::InvalidAction(_))
        ));
        assert!(matches!(
            CartAction::parse("buy:1", &catalog),
            Err(CommerceError::InvalidAction(_))
        ));
        assert!(matches!(
            CartAction::parse("inc:x", &catalog),
            Err(CommerceError::InvalidProductId(_))
        ));
        assert!(matches!(
            CartAction::parse("add:404", &catalog),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_apply_dispatches() {
        let catalog = Catalog::builtin();
        let mut cart = CartState::new();

        for token in ["add:1", "add:1", "add:2", "dec:1", "rm:2"] {
            cart.apply(CartAction::parse(token, &catalog).unwrap());
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_json_shape() {
        let action = CartAction::Remove {
            product_id: ProductId::new(4),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({"type": "remove", "product_id": 4}));

        let back: CartAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
        assert_eq!(back.to_string(), "remove:4");
    }
}
