// src/services/review_service.rs

use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{OrderRepository, ReviewRepository},
    models::order::Order,
    models::review::{
        OrderReviewsSubmission, ProductReview, ReviewPayload, RiderReview, RiderReviewPayload,
        generate_review_id, generate_rider_review_id,
    },
};

// Coletor de avaliações. Toda avaliação nasce amarrada a um pedido entregue
// do próprio cliente. A chave (pedido, produto, cliente), ou (pedido,
// entregador, cliente) no caso do entregador, admite no máximo um registro,
// com upsert no lugar de append.
#[derive(Clone)]
pub struct ReviewService {
    reviews_repo: ReviewRepository,
    orders_repo: OrderRepository,
}

impl ReviewService {
    pub fn new(reviews_repo: ReviewRepository, orders_repo: OrderRepository) -> Self {
        Self {
            reviews_repo,
            orders_repo,
        }
    }

    // --- ESCRITA ---

    pub async fn add_review(&self, payload: ReviewPayload) -> Result<ProductReview, AppError> {
        payload.validate()?;
        let order = self.reviewable_order(&payload.order_id, &payload.customer).await?;

        // O produto precisa estar entre os itens do pedido avaliado.
        if !order.items.iter().any(|item| item.name == payload.product) {
            return Err(AppError::ProductNotInOrder(payload.product));
        }

        let mut reviews = self.reviews_repo.load_reviews().await;
        let review = upsert_product_review(
            &mut reviews,
            &order.id,
            &payload.product,
            &payload.customer,
            payload.rating,
            payload.comment,
        );
        self.reviews_repo.save_reviews(&reviews).await?;
        Ok(review)
    }

    pub async fn add_rider_review(
        &self,
        payload: RiderReviewPayload,
    ) -> Result<RiderReview, AppError> {
        payload.validate()?;
        let order = self.reviewable_order(&payload.order_id, &payload.customer).await?;

        if order.assigned_rider.as_deref() != Some(payload.rider.as_str()) {
            return Err(AppError::RiderNotAssigned(payload.rider));
        }

        let mut rider_reviews = self.reviews_repo.load_rider_reviews().await;
        let review = upsert_rider_review(
            &mut rider_reviews,
            &order.id,
            &payload.rider,
            &payload.customer,
            payload.rating,
            payload.comment,
        );
        self.reviews_repo.save_rider_reviews(&rider_reviews).await?;
        Ok(review)
    }

    // Lote do modal de avaliação: uma nota opcional por item do pedido mais
    // uma nota opcional do entregador. Nota zero significa "pular"; nada é
    // gravado para aquela entrada. Devolve quantos registros foram escritos,
    // num único commit sobre as duas coleções.
    pub async fn submit_order_reviews(
        &self,
        submission: OrderReviewsSubmission,
    ) -> Result<usize, AppError> {
        let order = self
            .reviewable_order(&submission.order_id, &submission.customer)
            .await?;

        let mut reviews = self.reviews_repo.load_reviews().await;
        let mut rider_reviews = self.reviews_repo.load_rider_reviews().await;
        let mut written = 0;

        for entry in submission.items {
            if entry.rating == 0 {
                continue;
            }
            // Reaproveita a validação do payload unitário (nota 1 a 5).
            let payload = ReviewPayload {
                order_id: order.id.clone(),
                product: entry.product,
                customer: submission.customer.clone(),
                rating: entry.rating,
                comment: entry.comment,
            };
            payload.validate()?;
            if !order.items.iter().any(|item| item.name == payload.product) {
                return Err(AppError::ProductNotInOrder(payload.product));
            }
            upsert_product_review(
                &mut reviews,
                &order.id,
                &payload.product,
                &payload.customer,
                payload.rating,
                payload.comment,
            );
            written += 1;
        }

        if submission.rider_rating > 0 {
            let rider = order
                .assigned_rider
                .clone()
                .ok_or_else(|| AppError::RiderNotAssigned(String::new()))?;
            let payload = RiderReviewPayload {
                order_id: order.id.clone(),
                rider,
                customer: submission.customer.clone(),
                rating: submission.rider_rating,
                comment: submission.rider_comment,
            };
            payload.validate()?;
            upsert_rider_review(
                &mut rider_reviews,
                &order.id,
                &payload.rider,
                &payload.customer,
                payload.rating,
                payload.comment,
            );
            written += 1;
        }

        self.reviews_repo
            .save_both(&reviews, &rider_reviews)
            .await?;
        Ok(written)
    }

    // --- CONSULTAS ---

    pub async fn reviews(&self) -> Vec<ProductReview> {
        self.reviews_repo.load_reviews().await
    }

    pub async fn rider_reviews(&self) -> Vec<RiderReview> {
        self.reviews_repo.load_rider_reviews().await
    }

    // Avaliações já existentes de um pedido, para pré-preencher o modal.
    pub async fn reviews_for_order(&self, order_id: &str) -> Vec<ProductReview> {
        self.reviews_repo
            .load_reviews()
            .await
            .into_iter()
            .filter(|review| review.order_id == order_id)
            .collect()
    }

    pub async fn rider_review_for_order(&self, order_id: &str) -> Option<RiderReview> {
        self.reviews_repo
            .load_rider_reviews()
            .await
            .into_iter()
            .find(|review| review.order_id == order_id)
    }

    // Pré-condições comuns: o pedido existe, pertence ao cliente e já foi
    // entregue.
    async fn reviewable_order(&self, order_id: &str, customer: &str) -> Result<Order, AppError> {
        let order = self
            .orders_repo
            .find_by_id(order_id)
            .await
            .ok_or(AppError::OrderNotFound)?;
        if order.customer != customer {
            return Err(AppError::NotOrderCustomer);
        }
        if !order.status.allows_review() {
            return Err(AppError::OrderNotDelivered);
        }
        Ok(order)
    }
}

// Atualiza a avaliação existente da chave (pedido, produto, cliente) ou anexa
// uma nova. Atualização preserva o id original; só nota, comentário e horário
// mudam.
fn upsert_product_review(
    reviews: &mut Vec<ProductReview>,
    order_id: &str,
    product: &str,
    customer: &str,
    rating: u8,
    comment: String,
) -> ProductReview {
    let now = Utc::now();
    match reviews.iter_mut().find(|r| {
        r.order_id == order_id && r.product == product && r.customer == customer
    }) {
        Some(existing) => {
            existing.rating = rating;
            existing.comment = comment;
            existing.time = now;
            existing.clone()
        }
        None => {
            let review = ProductReview {
                id: generate_review_id(now),
                order_id: order_id.to_string(),
                product: product.to_string(),
                customer: customer.to_string(),
                rating,
                comment,
                time: now,
            };
            reviews.push(review.clone());
            review
        }
    }
}

fn upsert_rider_review(
    reviews: &mut Vec<RiderReview>,
    order_id: &str,
    rider: &str,
    customer: &str,
    rating: u8,
    comment: String,
) -> RiderReview {
    let now = Utc::now();
    match reviews
        .iter_mut()
        .find(|r| r.order_id == order_id && r.rider == rider && r.customer == customer)
    {
        Some(existing) => {
            existing.rating = rating;
            existing.comment = comment;
            existing.time = now;
            existing.clone()
        }
        None => {
            let review = RiderReview {
                id: generate_rider_review_id(now),
                order_id: order_id.to_string(),
                rider: rider.to_string(),
                customer: customer.to_string(),
                rating,
                comment,
                time: now,
            };
            reviews.push(review.clone());
            review
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_overwrites_in_place_and_keeps_the_id() {
        let mut reviews = Vec::new();
        let first = upsert_product_review(
            &mut reviews,
            "FC1002",
            "Air Fryer",
            "faith",
            4,
            "bom".to_string(),
        );
        let second = upsert_product_review(
            &mut reviews,
            "FC1002",
            "Air Fryer",
            "faith",
            2,
            "mudei de ideia".to_string(),
        );

        assert_eq!(reviews.len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(reviews[0].rating, 2);
        assert_eq!(reviews[0].comment, "mudei de ideia");
    }

    #[test]
    fn distinct_keys_get_distinct_records() {
        let mut reviews = Vec::new();
        upsert_product_review(&mut reviews, "FC1002", "Air Fryer", "faith", 4, String::new());
        upsert_product_review(&mut reviews, "FC1002", "Whisk", "faith", 5, String::new());
        upsert_product_review(&mut reviews, "FC1003", "Air Fryer", "faith", 3, String::new());

        assert_eq!(reviews.len(), 3);
    }
}
