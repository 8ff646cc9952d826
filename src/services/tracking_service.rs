// src/services/tracking_service.rs

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::{
    common::error::AppError,
    models::order::{Order, OrderStatus, TrackingOverview},
    services::order_service::OrderService,
};

// Rastreador de entregas do cliente: a visão ativos/entregues/cancelados, as
// ações permitidas por status (cancelar, confirmar recebimento) e a
// atualização periódica que captura mudanças feitas pelo admin em outra aba.
#[derive(Clone)]
pub struct TrackingService {
    order_service: OrderService,
    refresh_interval: Duration,
}

impl TrackingService {
    pub fn new(order_service: OrderService, refresh_interval: Duration) -> Self {
        Self {
            order_service,
            refresh_interval,
        }
    }

    // --- VISÃO DO CLIENTE ---

    // Pedidos do cliente repartidos por situação, do mais recente para o
    // mais antigo.
    pub async fn overview(&self, customer: &str) -> TrackingOverview {
        let mut orders = self.order_service.orders_for_customer(customer).await;
        orders.sort_by(|a, b| b.order_time.cmp(&a.order_time));

        let mut overview = TrackingOverview {
            active: Vec::new(),
            delivered: Vec::new(),
            cancelled: Vec::new(),
        };
        for order in orders {
            match order.status {
                OrderStatus::Delivered => overview.delivered.push(order),
                OrderStatus::Cancelled => overview.cancelled.push(order),
                _ => overview.active.push(order),
            }
        }
        overview
    }

    pub async fn current_order(&self, customer: &str) -> Option<Order> {
        self.order_service.most_recent_active(customer).await
    }

    // --- AÇÕES DO CLIENTE ---

    // Cancela um pedido do próprio cliente. Devolve false para id
    // desconhecido; cancelar fora de placed/preparing/ready é uma transição
    // ilegal, reportada como erro tipado.
    pub async fn cancel_order(&self, order_id: &str, customer: &str) -> Result<bool, AppError> {
        let order = match self.order_service.find_order(order_id).await {
            Some(order) => order,
            None => return Ok(false),
        };
        if order.customer != customer {
            return Err(AppError::NotOrderCustomer);
        }
        self.order_service
            .update_order_status(order_id, OrderStatus::Cancelled)
            .await
    }

    // Confirmação de recebimento: só com o pedido em rota (pickedup). A
    // checagem é local porque a tabela de transições também permitiria
    // delivered a partir de etapas anteriores, via admin.
    pub async fn confirm_received(
        &self,
        order_id: &str,
        customer: &str,
    ) -> Result<bool, AppError> {
        let order = match self.order_service.find_order(order_id).await {
            Some(order) => order,
            None => return Ok(false),
        };
        if order.customer != customer {
            return Err(AppError::NotOrderCustomer);
        }
        if !order.status.can_confirm_receipt() {
            return Err(AppError::IllegalTransition {
                from: order.status,
                to: OrderStatus::Delivered,
            });
        }
        self.order_service
            .update_order_status(order_id, OrderStatus::Delivered)
            .await
    }

    // --- ATUALIZAÇÃO PERIÓDICA ---

    // Relê a coleção de pedidos em intervalo fixo e publica a visão quando
    // ela muda, substituindo notificação push. O observador some quando o
    // OrdersWatch é descartado.
    pub async fn watch(&self, customer: &str) -> OrdersWatch {
        let initial = self.overview(customer).await;
        let (tx, rx) = watch::channel(initial);

        let service = self.clone();
        let customer = customer.to_string();
        let interval = self.refresh_interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // O primeiro tick é imediato e republica o estado inicial sem
            // efeito; os seguintes respeitam o intervalo.
            loop {
                ticker.tick().await;
                let overview = service.overview(&customer).await;
                let changed = tx.send_if_modified(|current| {
                    if *current == overview {
                        false
                    } else {
                        *current = overview;
                        true
                    }
                });
                if changed {
                    tracing::debug!("Rastreador de '{}' atualizado", customer);
                }
            }
        });

        OrdersWatch { rx, task }
    }
}

// Assinatura viva da visão de rastreamento de um cliente.
pub struct OrdersWatch {
    rx: watch::Receiver<TrackingOverview>,
    task: JoinHandle<()>,
}

impl OrdersWatch {
    pub fn snapshot(&self) -> TrackingOverview {
        self.rx.borrow().clone()
    }

    // Espera a próxima publicação de uma visão diferente da atual.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for OrdersWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}
