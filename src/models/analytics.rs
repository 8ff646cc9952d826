// src/models/analytics.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

// 1. Resumo (os cards do topo do painel)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersSummary {
    pub total_orders: usize,
    pub delivered: usize,
    pub cancelled: usize,
    // Receita exclui pedidos cancelados.
    pub revenue: Decimal,
    // Média sobre os pedidos não cancelados; zero quando não há nenhum.
    pub average_order: Decimal,
}

// 2. Itens mais vendidos (quantidade, cancelados fora)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItemEntry {
    pub name: String,
    pub quantity: u32,
}

// 3. Receita por dia (YYYY-MM-DD)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEntry {
    pub date: NaiveDate,
    pub total: Decimal,
}

// 4. Entregas por entregador (pedidos atribuídos não cancelados)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderPerformanceEntry {
    pub username: String,
    pub full_name: String,
    pub deliveries: u32,
}

// 5. Médias de avaliação. `average` fica None sem avaliações, nunca zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRating {
    pub name: String,
    pub average: Option<u8>,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderRating {
    pub username: String,
    pub average: Option<u8>,
    pub count: u32,
}
