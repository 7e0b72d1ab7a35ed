//! Replay a recorded list of cart actions.

use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;
use shop_commerce::prelude::*;

use super::ReplayArgs;
use crate::context::Context;
use crate::output::transition_label;

#[derive(Serialize)]
struct ReplayStep {
    action: String,
    transition: Transition,
}

#[derive(Serialize)]
struct ReplayReport {
    steps: Vec<ReplayStep>,
    items: Vec<LineItem>,
}

/// Run the replay command.
pub async fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read recording: {}", path.display()))?;
    let actions = parse_recording(&content)
        .with_context(|| format!("Failed to parse recording: {}", path.display()))?;

    ctx.logger
        .info_builder("replaying recording")
        .field("file", path.display().to_string())
        .field_u64("actions", actions.len() as u64)
        .emit();

    let report = replay(actions);

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header(&format!("Replay of {}", args.file));
    for (i, step) in report.steps.iter().enumerate() {
        ctx.output.info(&format!(
            "{:>3}. {:<14} {}",
            i + 1,
            step.action,
            transition_label(&step.transition)
        ));
    }

    ctx.output.header("Cart");
    ctx.output.cart(&report.items);
    Ok(())
}

fn parse_recording(content: &str) -> Result<Vec<CartAction>> {
    Ok(serde_json::from_str(content)?)
}

fn replay(actions: Vec<CartAction>) -> ReplayReport {
    let mut cart = CartState::new();
    let steps = actions
        .into_iter()
        .map(|action| {
            let label = action.to_string();
            ReplayStep {
                action: label,
                transition: cart.apply(action),
            }
        })
        .collect();

    ReplayReport {
        steps,
        items: cart.list().to_vec(),
    }
}
