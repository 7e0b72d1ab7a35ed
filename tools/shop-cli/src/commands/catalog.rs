//! Catalog listing commands.

use anyhow::Result;
use shop_commerce::prelude::*;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::like_badge;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    match args.command {
        Some(CatalogCommand::List) | None => list_products(&catalog, ctx),
        Some(CatalogCommand::Show { id }) => show_product(&catalog, &id, ctx),
    }
}

fn list_products(catalog: &Catalog, ctx: &Context) -> Result<()> {
    ctx.output.header("Plant Shop");

    if catalog.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }

    ctx.output.products(catalog.products());
    Ok(())
}

fn show_product(catalog: &Catalog, id: &str, ctx: &Context) -> Result<()> {
    let id: ProductId = id.parse()?;
    let product = catalog.require(id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.display_price());
    if product.liked {
        ctx.output.kv("liked", like_badge(true));
    }
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    Ok(())
}
