//! Scripted cart command.

use anyhow::{Context as _, Result};
use shop_commerce::prelude::*;

use super::CartArgs;
use crate::context::Context;
use crate::output::transition_label;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let actions = parse_script(&args.ops, &catalog)?;

    ctx.output
        .debug(&format!("Applying {} operation(s) to an empty cart", actions.len()));

    let store = CartStore::new();
    for action in actions {
        let label = action.to_string();
        let transition = store.dispatch(action);
        if args.trace {
            ctx.output.info(&format!("{:<14} {}", label, transition_label(&transition)));
        }
        if !transition.changed() {
            ctx.output.warn(&format!("{}: product is not in the cart", label));
        }
    }

    ctx.output.header("Cart");
    ctx.output.cart(&store.list());
    Ok(())
}

/// Parse every token up front so a typo aborts before anything is applied.
pub fn parse_script(ops: &[String], catalog: &Catalog) -> Result<Vec<CartAction>> {
    ops.iter()
        .enumerate()
        .map(|(i, op)| {
            CartAction::parse(op, catalog)
                .with_context(|| format!("Invalid operation #{} ({:?})", i + 1, op))
        })
        .collect()
}
