// src/db/reviews_repo.rs

use crate::common::error::AppError;
use crate::db::{Datastore, datastore};
use crate::models::review::{ProductReview, RiderReview};
use crate::storage::keys;

// O repositório das avaliações de produtos e de entregadores.
#[derive(Clone)]
pub struct ReviewRepository {
    datastore: Datastore,
}

impl ReviewRepository {
    pub fn new(datastore: Datastore) -> Self {
        Self { datastore }
    }

    pub async fn load_reviews(&self) -> Vec<ProductReview> {
        self.datastore.load(keys::KEY_REVIEWS)
    }

    pub async fn save_reviews(&self, reviews: &[ProductReview]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_REVIEWS, reviews)
    }

    pub async fn load_rider_reviews(&self) -> Vec<RiderReview> {
        self.datastore.load(keys::KEY_RIDER_REVIEWS)
    }

    pub async fn save_rider_reviews(&self, reviews: &[RiderReview]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_RIDER_REVIEWS, reviews)
    }

    // O lote do modal de avaliação toca as duas coleções; a gravação conjunta
    // sai num único commit.
    pub async fn save_both(
        &self,
        reviews: &[ProductReview],
        rider_reviews: &[RiderReview],
    ) -> Result<(), AppError> {
        let entries = vec![
            (keys::KEY_REVIEWS.to_string(), datastore::encode(reviews)?),
            (
                keys::KEY_RIDER_REVIEWS.to_string(),
                datastore::encode(rider_reviews)?,
            ),
        ];
        self.datastore.commit(entries)
    }
}
