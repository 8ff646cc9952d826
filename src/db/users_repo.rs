// src/db/users_repo.rs

use crate::common::error::AppError;
use crate::db::Datastore;
use crate::models::user::{PendingUserRequest, User};
use crate::storage::keys;

// O repositório de usuários, responsável pelas coleções de contas e de
// solicitações de cadastro pendentes.
#[derive(Clone)]
pub struct UserRepository {
    datastore: Datastore,
}

impl UserRepository {
    pub fn new(datastore: Datastore) -> Self {
        Self { datastore }
    }

    // A carga nunca falha: dados ausentes ou ilegíveis voltam ao seed.
    pub async fn load_users(&self) -> Vec<User> {
        self.datastore.load(keys::KEY_USERS)
    }

    pub async fn save_users(&self, users: &[User]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_USERS, users)
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.load_users()
            .await
            .into_iter()
            .find(|user| user.username == username)
    }

    pub async fn load_requests(&self) -> Vec<PendingUserRequest> {
        self.datastore.load(keys::KEY_USER_REQUESTS)
    }

    pub async fn save_requests(&self, requests: &[PendingUserRequest]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_USER_REQUESTS, requests)
    }
}
