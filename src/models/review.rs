// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Avaliação de um produto dentro de um pedido entregue.
// No máximo uma por (orderId, product, customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub id: String,
    pub order_id: String,
    pub product: String,
    pub customer: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub time: DateTime<Utc>,
}

// Avaliação do entregador de um pedido entregue.
// No máximo uma por (orderId, rider, customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderReview {
    pub id: String,
    pub order_id: String,
    pub rider: String,
    pub customer: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub time: DateTime<Utc>,
}

// Ids no formato `R-<millis>-<frag>` / `RR-<millis>-<frag>`, gerados quando
// o chamador não fornece um.
pub fn generate_review_id(at: DateTime<Utc>) -> String {
    format!("R-{}-{}", at.timestamp_millis(), id_fragment())
}

pub fn generate_rider_review_id(at: DateTime<Utc>) -> String {
    format!("RR-{}-{}", at.timestamp_millis(), id_fragment())
}

fn id_fragment() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..6].to_string()
}

// --- Payloads ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    #[validate(length(min = 1, message = "O pedido é obrigatório."))]
    pub order_id: String,

    #[validate(length(min = 1, message = "O produto é obrigatório."))]
    pub product: String,

    #[validate(length(min = 1, message = "O cliente é obrigatório."))]
    pub customer: String,

    #[validate(range(min = 1, max = 5, message = "A nota deve estar entre 1 e 5."))]
    pub rating: u8,

    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RiderReviewPayload {
    #[validate(length(min = 1, message = "O pedido é obrigatório."))]
    pub order_id: String,

    #[validate(length(min = 1, message = "O entregador é obrigatório."))]
    pub rider: String,

    #[validate(length(min = 1, message = "O cliente é obrigatório."))]
    pub customer: String,

    #[validate(range(min = 1, max = 5, message = "A nota deve estar entre 1 e 5."))]
    pub rating: u8,

    #[serde(default)]
    pub comment: String,
}

// Nota dada a um item no modal de avaliação; 0 = item pulado.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRatingEntry {
    pub product: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

// Lote de avaliações de um pedido: uma entrada opcional por item do pedido
// mais uma avaliação opcional do entregador (rating 0 = pulado).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReviewsSubmission {
    pub order_id: String,
    pub customer: String,
    #[serde(default)]
    pub items: Vec<ItemRatingEntry>,
    #[serde(default)]
    pub rider_rating: u8,
    #[serde(default)]
    pub rider_comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_the_expected_prefix() {
        let now = Utc::now();
        let id = generate_review_id(now);
        let rid = generate_rider_review_id(now);

        assert!(id.starts_with(&format!("R-{}-", now.timestamp_millis())));
        assert!(rid.starts_with(&format!("RR-{}-", now.timestamp_millis())));
        assert_ne!(id, rid);
    }

    #[test]
    fn rating_outside_range_fails_validation() {
        let payload = ReviewPayload {
            order_id: "FC1001".to_string(),
            product: "Whisk".to_string(),
            customer: "faith".to_string(),
            rating: 6,
            comment: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
