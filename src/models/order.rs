// src/models/order.rs

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::review::{ProductReview, RiderReview};

// --- Enums ---

// Ciclo de vida do pedido. A cadeia principal é monotônica; `cancelled` é o
// desvio absorvente, alcançável só enquanto o pedido ainda não saiu para entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    PickedUp,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    // Cadeia principal, em ordem (sem `cancelled`).
    const CHAIN: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];

    fn chain_position(self) -> Option<usize> {
        Self::CHAIN.iter().position(|s| *s == self)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    // Tabela de transições explícita: avanço na cadeia (pulos permitidos,
    // o admin pode marcar qualquer etapa posterior), cancelamento apenas a
    // partir de placed/preparing/ready. Estados terminais não saem de lugar,
    // e re-entrar no mesmo status é rejeitado.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            OrderStatus::Cancelled => self.can_cancel(),
            _ => match (self.chain_position(), next.chain_position()) {
                (Some(from), Some(to)) => to > from,
                _ => false,
            },
        }
    }

    // O cliente pode cancelar enquanto o pedido não foi retirado pelo entregador.
    pub fn can_cancel(self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }

    // "Confirmar recebimento" só faz sentido com o pedido em rota.
    pub fn can_confirm_receipt(self) -> bool {
        self == OrderStatus::PickedUp
    }

    // Avaliações são liberadas apenas após a entrega.
    pub fn allows_review(self) -> bool {
        self == OrderStatus::Delivered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "pickedup",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Forma de pagamento escolhida no checkout; define a taxa de entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Gcash,
}

impl PaymentMethod {
    // Taxa de entrega: ₱30 no dinheiro (COD), ₱15 em cartão/gcash.
    pub fn shipping_fee(self) -> Decimal {
        match self {
            PaymentMethod::Cash => Decimal::from(30),
            PaymentMethod::Card | PaymentMethod::Gcash => Decimal::from(15),
        }
    }
}

// --- Structs de Operação ---

// Um item dentro do pedido: nome do produto, preço unitário e quantidade.
// O mesmo shape circula no carrinho e no checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub shipping_fee: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub order_time: DateTime<Utc>,

    // Um carimbo `<status>Time` por status, gravado quando o status é
    // atingido pela primeira (e, pela tabela de transições, única) vez.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparing_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickedup_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_time: Option<DateTime<Utc>>,

    // Atribuído pelo painel do admin quando o pedido fica pronto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_rider: Option<String>,

    // Cópia dos dados de entrega no momento do checkout, não uma referência
    // viva ao cadastro do usuário.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,

    pub payment_method: PaymentMethod,

    // Arrays usados apenas pelo seed de demonstração. Avaliações reais moram
    // nas coleções de nível superior, nunca aninhadas no pedido.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<ProductReview>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rider_reviews: Vec<RiderReview>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn stamp_status_time(&mut self, status: OrderStatus, at: DateTime<Utc>) {
        let slot = match status {
            OrderStatus::Placed => &mut self.placed_time,
            OrderStatus::Preparing => &mut self.preparing_time,
            OrderStatus::Ready => &mut self.ready_time,
            OrderStatus::PickedUp => &mut self.pickedup_time,
            OrderStatus::Delivered => &mut self.delivered_time,
            OrderStatus::Cancelled => &mut self.cancelled_time,
        };
        *slot = Some(at);
    }

    pub fn status_time(&self, status: OrderStatus) -> Option<DateTime<Utc>> {
        match status {
            OrderStatus::Placed => self.placed_time,
            OrderStatus::Preparing => self.preparing_time,
            OrderStatus::Ready => self.ready_time,
            OrderStatus::PickedUp => self.pickedup_time,
            OrderStatus::Delivered => self.delivered_time,
            OrderStatus::Cancelled => self.cancelled_time,
        }
    }
}

// Visão do rastreador de entregas para um cliente: ativos + histórico.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingOverview {
    pub active: Vec<Order>,
    pub delivered: Vec<Order>,
    pub cancelled: Vec<Order>,
}

// --- Payloads ---

fn validate_line_items(items: &[LineItem]) -> Result<(), ValidationError> {
    for item in items {
        if item.quantity == 0 {
            let mut err = ValidationError::new("range");
            err.message = Some("A quantidade de cada item deve ser pelo menos 1.".into());
            return Err(err);
        }
    }
    Ok(())
}

// Dados do checkout para criar um pedido.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderPayload {
    #[validate(length(min = 1, message = "O cliente é obrigatório."))]
    pub customer: String,

    #[validate(
        length(min = 1, message = "O pedido precisa de pelo menos um item."),
        custom(function = "validate_line_items")
    )]
    pub items: Vec<LineItem>,

    pub delivery_address: Option<String>,
    pub contact_number: Option<String>,

    pub payment_method: PaymentMethod,
}
