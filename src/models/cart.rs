// src/models/cart.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::order::LineItem;

// O carrinho guarda exatamente o shape que vira item de pedido no checkout.
pub type CartItem = LineItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Decimal,
    // Igual ao subtotal: a taxa de entrega só entra no checkout,
    // quando a forma de pagamento é conhecida.
    pub total: Decimal,
}
