// tests/order_flow.rs

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use kitchencraft::models::menu::{MenuItem, Pricing};
use kitchencraft::models::order::{LineItem, OrderStatus, PaymentMethod, PlaceOrderPayload};
use kitchencraft::storage::{MemoryStorage, StorageArea, StorageError};
use kitchencraft::{AppError, AppState, Settings};

fn settings() -> Settings {
    Settings {
        preserve_users: false,
        preserve_menu: false,
        refresh_interval: Duration::from_secs(10),
    }
}

async fn fresh_state() -> AppState {
    AppState::with_storage(
        settings(),
        Arc::new(MemoryStorage::new()),
        Arc::new(MemoryStorage::new()),
    )
    .await
    .unwrap()
}

fn line(name: &str, price: u32, quantity: u32) -> LineItem {
    LineItem {
        name: name.to_string(),
        price: Decimal::from(price),
        quantity,
    }
}

fn payload(items: Vec<LineItem>, payment_method: PaymentMethod) -> PlaceOrderPayload {
    PlaceOrderPayload {
        customer: "faith".to_string(),
        items,
        delivery_address: Some("San Pedro, Bauan, Batangas".to_string()),
        contact_number: Some("09938564676".to_string()),
        payment_method,
    }
}

async fn stock_of(state: &AppState, name: &str) -> Option<u32> {
    state
        .menu_service
        .find_item(name)
        .await
        .and_then(|item| item.stock)
}

// Área de armazenamento cujo commit multi-chave sempre falha; escritas de
// chave única continuam funcionando.
struct CommitlessStorage {
    inner: MemoryStorage,
}

impl StorageArea for CommitlessStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }

    fn set_items(&self, _entries: &[(String, String)]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(
            "commit multi-chave desligado".to_string(),
        ))
    }
}

#[tokio::test]
async fn placing_deducts_stock_and_cancelling_restores_it() {
    let state = fresh_state().await;
    assert_eq!(stock_of(&state, "Air Fryer").await, Some(10));

    let order = state
        .order_service
        .place_order(payload(vec![line("Air Fryer", 5200, 2)], PaymentMethod::Cash))
        .await
        .unwrap();
    assert_eq!(stock_of(&state, "Air Fryer").await, Some(8));

    let cancelled = state
        .tracking_service
        .cancel_order(&order.id, "faith")
        .await
        .unwrap();
    assert!(cancelled);
    assert_eq!(stock_of(&state, "Air Fryer").await, Some(10));

    let stored = state.order_service.find_order(&order.id).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);
    assert!(stored.cancelled_time.is_some());
}

#[tokio::test]
async fn stock_follows_a_catalog_item_added_at_runtime() {
    let state = fresh_state().await;
    state
        .menu_service
        .add_menu_item(MenuItem {
            category: "essentials".to_string(),
            name: "Chefs Knife".to_string(),
            pricing: Pricing::Price(Decimal::from(160)),
            image: String::new(),
            stock: Some(12),
        })
        .await
        .unwrap();

    let order = state
        .order_service
        .place_order(payload(
            vec![line("Chefs Knife", 160, 2)],
            PaymentMethod::Card,
        ))
        .await
        .unwrap();
    assert_eq!(stock_of(&state, "Chefs Knife").await, Some(10));

    state
        .order_service
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(stock_of(&state, "Chefs Knife").await, Some(12));
}

#[tokio::test]
async fn checkout_computes_totals_and_clears_the_cart() {
    let state = fresh_state().await;
    state
        .cart_service
        .add_to_cart("faith", "Whisk", Decimal::from(180), 2)
        .await
        .unwrap();
    state
        .cart_service
        .add_to_cart("faith", "Sponge", Decimal::from(60), 1)
        .await
        .unwrap();

    let order = state
        .order_service
        .place_order(payload(
            vec![line("Whisk", 180, 2), line("Sponge", 60, 1)],
            PaymentMethod::Gcash,
        ))
        .await
        .unwrap();

    assert!(order.id.starts_with("FC"));
    assert_eq!(order.id.len(), 8);
    assert_eq!(order.subtotal, Decimal::from(420));
    assert_eq!(order.shipping_fee, Decimal::from(15));
    assert_eq!(order.total, Decimal::from(435));
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.placed_time, Some(order.order_time));

    // Compras saem do carrinho; itens sem estoque controlado não mudam.
    assert!(state.cart_service.load_cart("faith").await.is_empty());
    assert_eq!(stock_of(&state, "Whisk").await, Some(58));
    assert_eq!(stock_of(&state, "Sponge").await, None);
}

#[tokio::test]
async fn progression_stamps_a_time_per_status() {
    let state = fresh_state().await;

    assert!(
        state
            .order_service
            .update_order_status("FC1001", OrderStatus::PickedUp)
            .await
            .unwrap()
    );
    assert!(
        state
            .order_service
            .update_order_status("FC1001", OrderStatus::Delivered)
            .await
            .unwrap()
    );

    let order = state.order_service.find_order("FC1001").await.unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    let pickedup = order.pickedup_time.unwrap();
    let delivered = order.delivered_time.unwrap();
    assert!(delivered >= pickedup);
    assert!(pickedup >= order.ready_time.unwrap());
}

#[tokio::test]
async fn unknown_id_fails_without_mutating_the_collection() {
    let state = fresh_state().await;
    let before = state.order_service.orders().await;

    let updated = state
        .order_service
        .update_order_status("FC9999", OrderStatus::Preparing)
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(state.order_service.orders().await, before);
}

#[tokio::test]
async fn illegal_transitions_are_typed_errors() {
    let state = fresh_state().await;

    // FC1002 do seed já foi entregue: estado terminal.
    let err = state
        .order_service
        .update_order_status("FC1002", OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::IllegalTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled,
        }
    ));

    // Retrocesso na cadeia também é rejeitado.
    let err = state
        .order_service
        .update_order_status("FC1001", OrderStatus::Placed)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::IllegalTransition { .. }));

    // O pedido segue intacto após as tentativas rejeitadas.
    let order = state.order_service.find_order("FC1001").await.unwrap();
    assert_eq!(order.status, OrderStatus::Ready);
}

#[tokio::test]
async fn receipt_confirmation_needs_a_picked_up_order() {
    let state = fresh_state().await;

    // FC1001 ainda está em preparo: confirmar é ilegal.
    let err = state
        .tracking_service
        .confirm_received("FC1001", "faith")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::IllegalTransition { .. }));

    // Outra pessoa não confirma pedido alheio.
    state
        .order_service
        .update_order_status("FC1001", OrderStatus::PickedUp)
        .await
        .unwrap();
    let err = state
        .tracking_service
        .confirm_received("FC1001", "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotOrderCustomer));

    assert!(
        state
            .tracking_service
            .confirm_received("FC1001", "faith")
            .await
            .unwrap()
    );
    let order = state.order_service.find_order("FC1001").await.unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn cancelling_a_picked_up_order_is_rejected() {
    let state = fresh_state().await;
    state
        .order_service
        .update_order_status("FC1001", OrderStatus::PickedUp)
        .await
        .unwrap();

    let err = state
        .tracking_service
        .cancel_order("FC1001", "faith")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::IllegalTransition {
            from: OrderStatus::PickedUp,
            to: OrderStatus::Cancelled,
        }
    ));
}

#[tokio::test]
async fn tracker_overview_partitions_by_situation() {
    let state = fresh_state().await;

    let overview = state.tracking_service.overview("faith").await;
    assert_eq!(overview.active.len(), 1);
    assert_eq!(overview.active[0].id, "FC1001");
    assert_eq!(overview.delivered.len(), 1);
    assert!(overview.cancelled.is_empty());

    let current = state.tracking_service.current_order("faith").await.unwrap();
    assert_eq!(current.id, "FC1001");

    // Outro usuário não enxerga os pedidos de faith.
    let other = state.tracking_service.overview("admin").await;
    assert!(other.active.is_empty() && other.delivered.is_empty());
}

#[tokio::test]
async fn newly_placed_order_becomes_the_current_one() {
    let state = fresh_state().await;

    let order = state
        .order_service
        .place_order(payload(vec![line("Blender", 3200, 1)], PaymentMethod::Cash))
        .await
        .unwrap();

    let current = state.tracking_service.current_order("faith").await.unwrap();
    assert_eq!(current.id, order.id);
}

#[tokio::test]
async fn order_write_survives_a_failing_multi_key_commit() {
    let local = Arc::new(CommitlessStorage {
        inner: MemoryStorage::new(),
    });
    let state = AppState::with_storage(settings(), local, Arc::new(MemoryStorage::new()))
        .await
        .unwrap();

    let order = state
        .order_service
        .place_order(payload(vec![line("Air Fryer", 5200, 1)], PaymentMethod::Cash))
        .await
        .unwrap();

    // O pedido entra pelo caminho de contingência; a baixa de estoque, que
    // só sairia no commit conjunto, fica de fora.
    assert!(state.order_service.find_order(&order.id).await.is_some());
    assert_eq!(stock_of(&state, "Air Fryer").await, Some(10));
}

#[tokio::test(start_paused = true)]
async fn watch_publishes_changes_made_elsewhere() {
    let state = fresh_state().await;
    let mut watch = state.tracking_service.watch("faith").await;

    assert_eq!(watch.snapshot().active.len(), 1);
    assert_eq!(watch.snapshot().active[0].status, OrderStatus::Ready);

    // Mudança feita "em outra aba" pelo admin.
    state
        .order_service
        .update_order_status("FC1001", OrderStatus::PickedUp)
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(11)).await;
    assert!(watch.changed().await);

    let snapshot = watch.snapshot();
    assert_eq!(snapshot.active[0].status, OrderStatus::PickedUp);
    watch.stop();
}
