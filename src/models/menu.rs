// src/models/menu.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Preço simples OU tabela de tamanhos, mutuamente exclusivos. O `flatten`
// mantém o shape persistido: `"price": 450` ou `"sizes": {"8\"": 600, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Price(Decimal),
    Sizes(BTreeMap<String, Decimal>),
}

// Produto do catálogo. O nome é a chave primária: não há id substituto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub category: String,
    pub name: String,

    #[serde(flatten)]
    pub pricing: Pricing,

    pub image: String,

    // Ausente = estoque não controlado; o razão de estoque pula o item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl MenuItem {
    pub fn tracks_stock(&self) -> bool {
        self.stock.is_some()
    }

    // Baixa de estoque na colocação do pedido, com piso em zero.
    pub fn deduct_stock(&mut self, quantity: u32) {
        if let Some(stock) = self.stock {
            self.stock = Some(stock.saturating_sub(quantity));
        }
    }

    // Estorno no cancelamento; sem teto (escopo de demo).
    pub fn restore_stock(&mut self, quantity: u32) {
        if let Some(stock) = self.stock {
            self.stock = Some(stock.saturating_add(quantity));
        }
    }
}
