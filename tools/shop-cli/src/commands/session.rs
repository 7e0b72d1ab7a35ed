//! Interactive storefront session.
//!
//! Splash, home listing, product details and cart review, driven by
//! terminal menus over a single injected `CartStore`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use console::style;
use dialoguer::Select;
use shop_commerce::prelude::*;
use shop_observability::{LogEntry, StructuredLogger};

use super::SessionArgs;
use crate::context::Context;
use crate::output::like_badge;

/// What the user picked on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Open(ProductId),
    QuickAdd(ProductId),
    ToggleFavorite(ProductId),
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    ViewCart,
    Back,
    Quit,
}

/// A labelled menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuEntry {
    label: String,
    choice: Choice,
}

impl MenuEntry {
    fn new(label: impl Into<String>, choice: Choice) -> Self {
        Self {
            label: label.into(),
            choice,
        }
    }
}

/// Navigation effect of a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Stay,
    Go(Route),
    Back,
    Quit,
}

/// Result of handling one choice.
#[derive(Debug)]
struct Handled {
    running: bool,
    cart_change: Option<LogEntry>,
}

/// Session state: one store, one navigator and the favourites marked so far.
struct Storefront {
    catalog: Catalog,
    store: CartStore,
    nav: Navigator,
    favorites: Favorites,
    logger: StructuredLogger,
    changes: Arc<AtomicU64>,
    seen: u64,
    subscription: SubscriptionId,
}

impl Storefront {
    fn new(catalog: Catalog, logger: StructuredLogger) -> Self {
        let store = CartStore::new();
        let nav = Navigator::new();
        let logger = logger.with_screen(nav.current().as_str());

        // The listener only counts; entries are built by the session so they
        // carry the screen the change happened on.
        let changes = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&changes);
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        Self {
            catalog,
            store,
            nav,
            favorites: Favorites::new(),
            logger,
            changes,
            seen: 0,
            subscription,
        }
    }

    fn finish_splash(&mut self) -> Result<()> {
        self.nav.finish_splash()?;
        self.sync_screen();
        Ok(())
    }

    fn sync_screen(&mut self) {
        self.logger.set_screen(self.nav.current().as_str());
    }

    fn menu(&self, ctx: &Context) -> Vec<MenuEntry> {
        match self.nav.current() {
            Route::Splash => Vec::new(),
            Route::Home => home_menu(&self.catalog, &self.store, &self.favorites, ctx),
            Route::Details { product } => details_menu(product, &self.store, ctx),
            Route::Cart => cart_menu(&self.store, ctx),
        }
    }

    fn handle(&mut self, choice: Choice) -> Result<Handled> {
        let step = self.apply_choice(choice);

        let cart_change = self.take_cart_change();
        if let Some(entry) = &cart_change {
            self.logger.write(entry);
        }

        let running = match step {
            Step::Stay => true,
            Step::Go(next) => {
                self.nav.navigate(next)?;
                true
            }
            Step::Back => self.nav.back().is_ok(),
            Step::Quit => false,
        };
        self.sync_screen();

        Ok(Handled {
            running,
            cart_change,
        })
    }

    fn apply_choice(&mut self, choice: Choice) -> Step {
        match choice {
            Choice::Open(id) => match self.catalog.get(id) {
                Some(product) => Step::Go(Route::Details {
                    product: product.clone(),
                }),
                None => Step::Stay,
            },
            Choice::QuickAdd(id) | Choice::Add(id) => {
                if let Some(product) = self.catalog.get(id) {
                    self.store.add(product.clone());
                }
                Step::Stay
            }
            Choice::ToggleFavorite(id) => {
                let now = self.favorites.toggle(id);
                self.logger
                    .info_builder("favourite toggled")
                    .field_u64("product_id", u64::from(id.get()))
                    .field_bool("favourite", now)
                    .emit();
                Step::Stay
            }
            Choice::Increment(id) => {
                self.store.increment(id);
                Step::Stay
            }
            Choice::Decrement(id) => {
                self.store.decrement(id);
                Step::Stay
            }
            Choice::Remove(id) => {
                self.store.remove(id);
                Step::Stay
            }
            Choice::ViewCart => Step::Go(Route::Cart),
            Choice::Back => Step::Back,
            Choice::Quit => Step::Quit,
        }
    }

    /// Build a "cart changed" entry if the store notified since the last call.
    fn take_cart_change(&mut self) -> Option<LogEntry> {
        let total = self.changes.load(Ordering::Relaxed);
        if total == self.seen {
            return None;
        }
        self.seen = total;

        self.logger
            .debug_builder("cart changed")
            .field_u64("items", self.store.list().len() as u64)
            .field_u64("units", self.store.item_count())
            .build()
    }

    fn finish(self) -> Vec<LineItem> {
        self.store.unsubscribe(self.subscription);
        self.logger
            .info_builder("session ended")
            .field_u64("units", self.store.item_count())
            .field_u64("favourites", self.favorites.len() as u64)
            .emit();
        self.store.list()
    }
}

/// Menus are drawn on the terminal, so there is no JSON rendition.
fn ensure_interactive(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The session command is interactive and does not support --json");
    }
    Ok(())
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    ensure_interactive(ctx)?;

    let mut shop = Storefront::new(ctx.catalog()?, ctx.logger.clone());
    shop.logger.info("session started");
    ctx.output.kv("session", shop.logger.session_id().as_str());

    if !args.skip_splash {
        let spinner = ctx.output.spinner("Plant Shop");
        tokio::time::sleep(Duration::from_millis(ctx.config.splash.duration_ms)).await;
        spinner.finish_and_clear();
    }
    shop.finish_splash()?;

    loop {
        let menu = shop.menu(ctx);
        if menu.is_empty() {
            break;
        }

        let labels: Vec<&str> = menu.iter().map(|m| m.label.as_str()).collect();
        let picked = Select::new()
            .with_prompt(shop.nav.current().display_name())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        // Escape behaves like the back button.
        let choice = picked.map_or(Choice::Back, |i| menu[i].choice);
        if !shop.handle(choice)?.running {
            break;
        }
    }

    let items = shop.finish();
    ctx.output.header("Cart");
    ctx.output.cart(&items);
    Ok(())
}

fn home_menu(
    catalog: &Catalog,
    store: &CartStore,
    favorites: &Favorites,
    ctx: &Context,
) -> Vec<MenuEntry> {
    ctx.output.header("Welcome to Plant Shop");

    let mut menu = Vec::with_capacity(catalog.len() * 3 + 2);
    for product in catalog {
        let liked = favorites.contains(product.id);
        menu.push(MenuEntry::new(
            format!("{} {} {}", product.name, product.display_price(), like_badge(liked))
                .trim_end()
                .to_string(),
            Choice::Open(product.id),
        ));
        menu.push(MenuEntry::new(
            format!("  + add {}", product.name),
            Choice::QuickAdd(product.id),
        ));
        let toggle = if liked { "unfavourite" } else { "favourite" };
        menu.push(MenuEntry::new(
            format!("  ♥ {} {}", toggle, product.name),
            Choice::ToggleFavorite(product.id),
        ));
    }
    menu.push(MenuEntry::new(
        format!("View cart ({})", store.item_count()),
        Choice::ViewCart,
    ));
    menu.push(MenuEntry::new("Quit", Choice::Quit));
    menu
}

fn details_menu(product: &Product, store: &CartStore, ctx: &Context) -> Vec<MenuEntry> {
    ctx.output.header(&product.name);
    ctx.output.kv("price", &product.display_price());
    ctx.output
        .kv("in cart", &store.quantity_of(product.id).to_string());
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }

    vec![
        MenuEntry::new("Add to Cart", Choice::Add(product.id)),
        MenuEntry::new("+", Choice::Increment(product.id)),
        MenuEntry::new("-", Choice::Decrement(product.id)),
        MenuEntry::new("View cart", Choice::ViewCart),
        MenuEntry::new("Back", Choice::Back),
    ]
}

fn cart_menu(store: &CartStore, ctx: &Context) -> Vec<MenuEntry> {
    let items = store.list();
    ctx.output.header("Cart");
    ctx.output.cart(&items);

    let mut menu = Vec::with_capacity(items.len() * 3 + 2);
    for item in &items {
        let name = &item.product.name;
        let id = item.product_id();
        menu.push(MenuEntry::new(format!("+ {}", name), Choice::Increment(id)));
        menu.push(MenuEntry::new(format!("- {}", name), Choice::Decrement(id)));
        menu.push(MenuEntry::new(
            format!("{} {}", style("remove").red(), name),
            Choice::Remove(id),
        ));
    }
    menu.push(MenuEntry::new("Back", Choice::Back));
    menu.push(MenuEntry::new("Quit", Choice::Quit));
    menu
}
