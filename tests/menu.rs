// tests/menu.rs

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use kitchencraft::models::menu::{MenuItem, Pricing};
use kitchencraft::storage::MemoryStorage;
use kitchencraft::{AppState, Settings};

async fn fresh_state() -> AppState {
    let settings = Settings {
        preserve_users: false,
        preserve_menu: false,
        refresh_interval: Duration::from_secs(10),
    };
    AppState::with_storage(
        settings,
        Arc::new(MemoryStorage::new()),
        Arc::new(MemoryStorage::new()),
    )
    .await
    .unwrap()
}

fn priced(name: &str, price: u32, stock: Option<u32>) -> MenuItem {
    MenuItem {
        category: "gadgets".to_string(),
        name: name.to_string(),
        pricing: Pricing::Price(Decimal::from(price)),
        image: "/static/images/whisk.png".to_string(),
        stock,
    }
}

#[tokio::test]
async fn updating_an_item_replaces_it_under_the_same_name() {
    let state = fresh_state().await;

    let updated = state
        .menu_service
        .update_menu_item("Whisk", priced("Whisk", 200, Some(48)))
        .await
        .unwrap();
    assert!(updated);

    let item = state.menu_service.find_item("Whisk").await.unwrap();
    assert_eq!(item.pricing, Pricing::Price(Decimal::from(200)));
    assert_eq!(item.stock, Some(48));

    // Substituição no lugar: o catálogo não cresce.
    assert_eq!(state.menu_service.menu().await.len(), 19);
}

#[tokio::test]
async fn updating_an_unknown_name_returns_false_without_writing() {
    let state = fresh_state().await;
    let before = state.menu_service.menu().await;

    let updated = state
        .menu_service
        .update_menu_item("Produto Fantasma", priced("Produto Fantasma", 99, None))
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(state.menu_service.menu().await, before);
}

#[tokio::test]
async fn deleting_an_item_shrinks_the_catalog() {
    let state = fresh_state().await;

    assert!(state.menu_service.delete_menu_item("Sponge").await.unwrap());
    assert!(state.menu_service.find_item("Sponge").await.is_none());
    assert_eq!(state.menu_service.menu().await.len(), 18);
}

#[tokio::test]
async fn deleting_an_unknown_name_returns_false() {
    let state = fresh_state().await;

    assert!(state.menu_service.delete_menu_item("Sponge").await.unwrap());
    assert!(!state.menu_service.delete_menu_item("Sponge").await.unwrap());
    assert_eq!(state.menu_service.menu().await.len(), 18);
}
