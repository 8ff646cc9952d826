// src/services/order_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{MenuRepository, OrderRepository},
    models::order::{Order, OrderStatus, PlaceOrderPayload},
    services::cart_service::CartService,
    services::inventory_service::InventoryService,
};

// Motor do ciclo de vida do pedido: criação no checkout, transições de
// status com carimbo de horário e os efeitos de estoque acoplados
// (baixa na colocação, estorno no cancelamento).
#[derive(Clone)]
pub struct OrderService {
    orders_repo: OrderRepository,
    menu_repo: MenuRepository,
    inventory_service: InventoryService,
    cart_service: CartService,
}

impl OrderService {
    pub fn new(
        orders_repo: OrderRepository,
        menu_repo: MenuRepository,
        inventory_service: InventoryService,
        cart_service: CartService,
    ) -> Self {
        Self {
            orders_repo,
            menu_repo,
            inventory_service,
            cart_service,
        }
    }

    // --- CHECKOUT ---

    pub async fn place_order(&self, payload: PlaceOrderPayload) -> Result<Order, AppError> {
        // 1. Validação de forma (itens presentes, quantidades >= 1)
        payload.validate()?;

        // 2. Totais derivados no momento da colocação, imutáveis depois
        let now = Utc::now();
        let subtotal: Decimal = payload.items.iter().map(|item| item.line_total()).sum();
        let shipping_fee = payload.payment_method.shipping_fee();

        let order = Order {
            id: generate_order_id(now),
            customer: payload.customer,
            items: payload.items,
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
            status: OrderStatus::Placed,
            order_time: now,
            placed_time: Some(now),
            preparing_time: None,
            ready_time: None,
            pickedup_time: None,
            delivered_time: None,
            cancelled_time: None,
            assigned_rider: None,
            delivery_address: payload.delivery_address,
            contact_number: payload.contact_number,
            payment_method: payload.payment_method,
            reviews: Vec::new(),
            rider_reviews: Vec::new(),
        };

        // 3. Persiste o pedido com a baixa de estoque
        self.add_order(order.clone()).await?;

        // 4. Limpa do carrinho as entradas compradas. O pedido já está
        //    gravado; uma falha aqui não pode desfazê-lo.
        if let Err(err) = self
            .cart_service
            .remove_purchased(&order.customer, &order.items)
            .await
        {
            tracing::warn!("Falha ao limpar o carrinho de '{}': {}", order.customer, err);
        }

        tracing::info!("Pedido {} colocado por {}", order.id, order.customer);
        Ok(order)
    }

    // Anexa um pedido já montado à coleção, aplicando a baixa de estoque no
    // mesmo commit. Se o commit conjunto falhar, a gravação do pedido ainda
    // é tentada sozinha: o ajuste de estoque nunca bloqueia o pedido.
    pub async fn add_order(&self, order: Order) -> Result<(), AppError> {
        let mut orders = self.orders_repo.load_orders().await;
        let mut menu = self.menu_repo.load_menu().await;

        self.inventory_service
            .deduct_for_order(&mut menu, &order.items);
        orders.push(order);

        if let Err(err) = self
            .orders_repo
            .save_orders_with_menu(&orders, &menu)
            .await
        {
            tracing::error!("Falha no commit conjunto de pedido e estoque: {}", err);
            self.orders_repo.save_orders(&orders).await?;
        }
        Ok(())
    }

    // --- TRANSIÇÕES DE STATUS ---

    // Aplica uma transição de status. Devolve false para id desconhecido, sem
    // tocar na coleção; transições fora da tabela são um erro tipado. A
    // entrada em `cancelled` estorna o estoque no mesmo commit.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> Result<bool, AppError> {
        let mut orders = self.orders_repo.load_orders().await;
        let idx = match orders.iter().position(|order| order.id == order_id) {
            Some(idx) => idx,
            None => return Ok(false),
        };

        let from = orders[idx].status;
        if !from.can_transition_to(new_status) {
            return Err(AppError::IllegalTransition {
                from,
                to: new_status,
            });
        }

        orders[idx].status = new_status;
        orders[idx].stamp_status_time(new_status, Utc::now());

        if new_status == OrderStatus::Cancelled {
            let mut menu = self.menu_repo.load_menu().await;
            self.inventory_service
                .restock_for_order(&mut menu, &orders[idx].items);
            if let Err(err) = self
                .orders_repo
                .save_orders_with_menu(&orders, &menu)
                .await
            {
                tracing::error!("Falha no commit conjunto de cancelamento: {}", err);
                self.orders_repo.save_orders(&orders).await?;
            }
        } else {
            self.orders_repo.save_orders(&orders).await?;
        }

        tracing::info!("Pedido {} -> {}", order_id, new_status);
        Ok(true)
    }

    // Atribuição de entregador pelo painel do admin. Não transiciona status.
    pub async fn assign_rider(
        &self,
        order_id: &str,
        rider_username: &str,
    ) -> Result<bool, AppError> {
        let mut orders = self.orders_repo.load_orders().await;
        let idx = match orders.iter().position(|order| order.id == order_id) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        orders[idx].assigned_rider = Some(rider_username.to_string());
        self.orders_repo.save_orders(&orders).await?;
        Ok(true)
    }

    // --- CONSULTAS ---

    pub async fn orders(&self) -> Vec<Order> {
        self.orders_repo.load_orders().await
    }

    pub async fn find_order(&self, order_id: &str) -> Option<Order> {
        self.orders_repo.find_by_id(order_id).await
    }

    pub async fn orders_for_customer(&self, username: &str) -> Vec<Order> {
        self.orders_repo
            .load_orders()
            .await
            .into_iter()
            .filter(|order| order.customer == username)
            .collect()
    }

    pub async fn active_orders_for_customer(&self, username: &str) -> Vec<Order> {
        self.orders_for_customer(username)
            .await
            .into_iter()
            .filter(Order::is_active)
            .collect()
    }

    // O pedido ativo mais recente do cliente, por horário de colocação.
    pub async fn most_recent_active(&self, username: &str) -> Option<Order> {
        self.active_orders_for_customer(username)
            .await
            .into_iter()
            .max_by_key(|order| order.order_time)
    }
}

// Ids no formato `FC` + os seis últimos dígitos do relógio em milissegundos.
fn generate_order_id(at: DateTime<Utc>) -> String {
    let digits = at.timestamp_millis().to_string();
    let start = digits.len().saturating_sub(6);
    format!("FC{}", &digits[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_uses_the_clock_tail() {
        let at = DateTime::from_timestamp_millis(1_755_000_123_456).unwrap();
        assert_eq!(generate_order_id(at), "FC123456");
    }
}
