// tests/seeding.rs

use std::sync::Arc;
use std::time::Duration;

use kitchencraft::models::order::OrderStatus;
use kitchencraft::storage::{MemoryStorage, StorageArea, keys};
use kitchencraft::{AppState, Settings};

fn settings() -> Settings {
    Settings {
        preserve_users: false,
        preserve_menu: false,
        refresh_interval: Duration::from_secs(10),
    }
}

async fn state_over(local: Arc<MemoryStorage>, settings: Settings) -> AppState {
    AppState::with_storage(settings, local, Arc::new(MemoryStorage::new()))
        .await
        .unwrap()
}

#[tokio::test]
async fn first_load_populates_every_collection() {
    let state = state_over(Arc::new(MemoryStorage::new()), settings()).await;

    assert_eq!(state.store_service.load_users().await.len(), 5);
    assert_eq!(state.store_service.load_menu().await.len(), 19);
    assert_eq!(state.store_service.load_orders().await.len(), 2);
    assert_eq!(state.store_service.load_reviews().await.len(), 2);
    assert_eq!(state.store_service.load_rider_reviews().await.len(), 1);
    assert!(state.store_service.load_user_requests().await.is_empty());
}

#[tokio::test]
async fn edits_survive_a_reload_while_the_seed_is_unchanged() {
    let local = Arc::new(MemoryStorage::new());

    let state = state_over(local.clone(), settings()).await;
    assert!(state.auth_service.delete_user("rider3").await.unwrap());

    // "Reabrir o navegador": um novo estado sobre o mesmo armazenamento.
    let reopened = state_over(local, settings()).await;
    let users = reopened.store_service.load_users().await;
    assert_eq!(users.len(), 4);
    assert!(users.iter().all(|u| u.username != "rider3"));
}

#[tokio::test]
async fn changed_seed_hash_overwrites_stored_users() {
    let local = Arc::new(MemoryStorage::new());

    let state = state_over(local.clone(), settings()).await;
    assert!(state.auth_service.delete_user("rider3").await.unwrap());

    // Hash gravado de uma versão antiga: o seed embutido "mudou".
    local
        .set_item(keys::KEY_USERS_SEED_HASH, "deadbeef")
        .unwrap();

    let reopened = state_over(local, settings()).await;
    assert_eq!(reopened.store_service.load_users().await.len(), 5);
}

#[tokio::test]
async fn preserve_flag_suppresses_the_hash_reseed() {
    let local = Arc::new(MemoryStorage::new());

    let state = state_over(local.clone(), settings()).await;
    assert!(state.auth_service.delete_user("rider3").await.unwrap());
    local
        .set_item(keys::KEY_USERS_SEED_HASH, "deadbeef")
        .unwrap();

    let preserved = Settings {
        preserve_users: true,
        ..settings()
    };
    let reopened = state_over(local, preserved).await;
    assert_eq!(reopened.store_service.load_users().await.len(), 4);
}

#[tokio::test]
async fn corrupted_collection_falls_back_to_the_seed() {
    let local = Arc::new(MemoryStorage::new());
    let state = state_over(local.clone(), settings()).await;

    local
        .set_item(keys::KEY_ORDERS, "{definitivamente não é um array}")
        .unwrap();

    let orders = state.store_service.load_orders().await;
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().any(|o| o.id == "FC1001"));
}

#[tokio::test]
async fn reset_restores_all_collections_to_their_seeds() {
    let state = state_over(Arc::new(MemoryStorage::new()), settings()).await;

    state.auth_service.delete_user("rider2").await.unwrap();
    state
        .order_service
        .update_order_status("FC1001", OrderStatus::Cancelled)
        .await
        .unwrap();

    assert!(state.store_service.reset_to_defaults().await);

    assert_eq!(state.store_service.load_users().await.len(), 5);
    let orders = state.store_service.load_orders().await;
    let fc1001 = orders.iter().find(|o| o.id == "FC1001").unwrap();
    assert_eq!(fc1001.status, OrderStatus::Ready);
}
