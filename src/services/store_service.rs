// src/services/store_service.rs

use crate::common::error::AppError;
use crate::db::{
    Datastore, MenuRepository, OrderRepository, ReviewRepository, UserRepository,
};
use crate::models::menu::MenuItem;
use crate::models::order::Order;
use crate::models::review::{ProductReview, RiderReview};
use crate::models::user::{PendingUserRequest, User};

// Fachada de carga e gravação das coleções persistidas, espelhando o par
// load/save por coleção que o restante da aplicação consome. Toda carga passa
// pela checagem de seed do Datastore.
#[derive(Clone)]
pub struct StoreService {
    datastore: Datastore,
    users_repo: UserRepository,
    menu_repo: MenuRepository,
    orders_repo: OrderRepository,
    reviews_repo: ReviewRepository,
}

impl StoreService {
    pub fn new(
        datastore: Datastore,
        users_repo: UserRepository,
        menu_repo: MenuRepository,
        orders_repo: OrderRepository,
        reviews_repo: ReviewRepository,
    ) -> Self {
        Self {
            datastore,
            users_repo,
            menu_repo,
            orders_repo,
            reviews_repo,
        }
    }

    // --- USUÁRIOS ---

    pub async fn load_users(&self) -> Vec<User> {
        self.users_repo.load_users().await
    }

    pub async fn save_users(&self, users: &[User]) -> Result<(), AppError> {
        self.users_repo.save_users(users).await
    }

    pub async fn load_user_requests(&self) -> Vec<PendingUserRequest> {
        self.users_repo.load_requests().await
    }

    pub async fn save_user_requests(
        &self,
        requests: &[PendingUserRequest],
    ) -> Result<(), AppError> {
        self.users_repo.save_requests(requests).await
    }

    // --- CATÁLOGO ---

    pub async fn load_menu(&self) -> Vec<MenuItem> {
        self.menu_repo.load_menu().await
    }

    pub async fn save_menu(&self, menu: &[MenuItem]) -> Result<(), AppError> {
        self.menu_repo.save_menu(menu).await
    }

    // --- PEDIDOS ---

    pub async fn load_orders(&self) -> Vec<Order> {
        self.orders_repo.load_orders().await
    }

    pub async fn save_orders(&self, orders: &[Order]) -> Result<(), AppError> {
        self.orders_repo.save_orders(orders).await
    }

    // --- AVALIAÇÕES ---

    pub async fn load_reviews(&self) -> Vec<ProductReview> {
        self.reviews_repo.load_reviews().await
    }

    pub async fn save_reviews(&self, reviews: &[ProductReview]) -> Result<(), AppError> {
        self.reviews_repo.save_reviews(reviews).await
    }

    pub async fn load_rider_reviews(&self) -> Vec<RiderReview> {
        self.reviews_repo.load_rider_reviews().await
    }

    pub async fn save_rider_reviews(&self, reviews: &[RiderReview]) -> Result<(), AppError> {
        self.reviews_repo.save_rider_reviews(reviews).await
    }

    // --- UTILITÁRIO DE DESENVOLVIMENTO ---

    // Reaplica todos os seeds, inclusive sobre coleções preservadas.
    pub async fn reset_to_defaults(&self) -> bool {
        self.datastore.reset_to_defaults()
    }
}
