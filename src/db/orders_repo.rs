// src/db/orders_repo.rs

use crate::common::error::AppError;
use crate::db::{Datastore, datastore};
use crate::models::menu::MenuItem;
use crate::models::order::Order;
use crate::storage::keys;

// O repositório de pedidos.
#[derive(Clone)]
pub struct OrderRepository {
    datastore: Datastore,
}

impl OrderRepository {
    pub fn new(datastore: Datastore) -> Self {
        Self { datastore }
    }

    pub async fn load_orders(&self) -> Vec<Order> {
        self.datastore.load(keys::KEY_ORDERS)
    }

    pub async fn save_orders(&self, orders: &[Order]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_ORDERS, orders)
    }

    pub async fn find_by_id(&self, order_id: &str) -> Option<Order> {
        self.load_orders()
            .await
            .into_iter()
            .find(|order| order.id == order_id)
    }

    // Grava pedidos e catálogo num único commit multi-chave, para que um
    // pedido nunca seja persistido sem a baixa de estoque correspondente
    // (nem o contrário).
    pub async fn save_orders_with_menu(
        &self,
        orders: &[Order],
        menu: &[MenuItem],
    ) -> Result<(), AppError> {
        let entries = vec![
            (keys::KEY_ORDERS.to_string(), datastore::encode(orders)?),
            (keys::KEY_MENU.to_string(), datastore::encode(menu)?),
        ];
        self.datastore.commit(entries)
    }
}
