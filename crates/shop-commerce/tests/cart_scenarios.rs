//! End-to-end cart behaviour as seen by the screens.

use shop_commerce::prelude::*;

fn plant(id: u32) -> Product {
    Product::new(id, format!("Plant {}", id), "19.99")
}

fn snapshot(store: &CartStore) -> Vec<(u32, u32)> {
    store
        .list()
        .iter()
        .map(|item| (item.product_id().get(), item.quantity))
        .collect()
}

#[test]
fn walkthrough_from_empty_to_empty() {
    let store = CartStore::new();

    store.add(plant(1));
    assert_eq!(snapshot(&store), vec![(1, 1)]);

    store.add(plant(1));
    assert_eq!(snapshot(&store), vec![(1, 2)]);

    store.add(plant(2));
    assert_eq!(snapshot(&store), vec![(1, 2), (2, 1)]);

    store.decrement(ProductId::new(1));
    assert_eq!(snapshot(&store), vec![(1, 1), (2, 1)]);

    store.decrement(ProductId::new(1));
    assert_eq!(snapshot(&store), vec![(2, 1)]);

    store.remove(ProductId::new(2));
    assert!(snapshot(&store).is_empty());
}

#[test]
fn readding_existing_product_keeps_position() {
    let store = CartStore::new();
    store.add(plant(1));
    store.add(plant(2));
    store.add(plant(1));

    assert_eq!(snapshot(&store), vec![(1, 2), (2, 1)]);
}

#[test]
fn increment_then_decrement_round_trips_quantity() {
    let store = CartStore::new();
    for _ in 0..4 {
        store.add(plant(7));
    }

    assert_eq!(
        store.increment(ProductId::new(7)),
        Transition::Incremented { quantity: 5 }
    );
    assert_eq!(
        store.decrement(ProductId::new(7)),
        Transition::Decremented { quantity: 4 }
    );
    assert_eq!(store.quantity_of(ProductId::new(7)), 4);
}

#[test]
fn stale_ids_leave_cart_unchanged() {
    let store = CartStore::new();
    store.add(plant(1));
    store.add(plant(2));
    let before = store.snapshot();

    assert_eq!(store.increment(ProductId::new(3)), Transition::NotFound);
    assert_eq!(store.decrement(ProductId::new(3)), Transition::NotFound);
    assert_eq!(store.remove(ProductId::new(3)), Transition::NotFound);

    assert_eq!(store.snapshot(), before);
}

#[test]
fn remove_is_idempotent_and_preserves_order() {
    let store = CartStore::new();
    for id in [1, 2, 3, 4] {
        store.add(plant(id));
    }
    store.increment(ProductId::new(3));

    store.remove(ProductId::new(2));
    let once = snapshot(&store);
    store.remove(ProductId::new(2));

    assert_eq!(once, vec![(1, 1), (3, 2), (4, 1)]);
    assert_eq!(snapshot(&store), once);
}

#[test]
fn replayed_actions_match_direct_calls() {
    let catalog = Catalog::builtin();
    let script = r#"[
        {"type": "add", "product": {"id": 1, "name": "Succulent Plant", "price": "39.99"}},
        {"type": "add", "product": {"id": 3, "name": "Ravenea Plant", "price": "25.99"}},
        {"type": "increment", "product_id": 3},
        {"type": "decrement", "product_id": 1},
        {"type": "remove", "product_id": 42}
    ]"#;
    let actions: Vec<CartAction> = serde_json::from_str(script).unwrap();

    let mut cart = CartState::new();
    let outcomes: Vec<Transition> = actions.into_iter().map(|a| cart.apply(a)).collect();

    assert_eq!(
        outcomes,
        vec![
            Transition::Added,
            Transition::Added,
            Transition::Incremented { quantity: 2 },
            Transition::Removed { quantity: 1 },
            Transition::NotFound,
        ]
    );
    assert_eq!(cart.quantity_of(ProductId::new(3)), 2);
    assert!(catalog.get(ProductId::new(3)).is_some());
}

#[test]
fn detail_screen_flow() {
    let catalog = Catalog::builtin();
    let store = CartStore::new();
    let mut nav = Navigator::new();

    nav.finish_splash().unwrap();
    let product = catalog.require(ProductId::new(2)).unwrap().clone();
    nav.navigate(Route::Details {
        product: product.clone(),
    })
    .unwrap();

    // The detail screen adds the product it was opened with.
    if let Route::Details { product } = nav.current() {
        store.add(product.clone());
        store.increment(product.id);
    }
    nav.navigate(Route::Cart).unwrap();

    assert_eq!(store.quantity_of(product.id), 2);
    assert_eq!(store.item_count(), 2);
    assert_eq!(nav.depth(), 3);
}
