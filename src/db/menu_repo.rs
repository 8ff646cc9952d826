// src/db/menu_repo.rs

use crate::common::error::AppError;
use crate::db::Datastore;
use crate::models::menu::MenuItem;
use crate::storage::keys;

// O repositório do catálogo de produtos.
#[derive(Clone)]
pub struct MenuRepository {
    datastore: Datastore,
}

impl MenuRepository {
    pub fn new(datastore: Datastore) -> Self {
        Self { datastore }
    }

    pub async fn load_menu(&self) -> Vec<MenuItem> {
        self.datastore.load(keys::KEY_MENU)
    }

    pub async fn save_menu(&self, menu: &[MenuItem]) -> Result<(), AppError> {
        self.datastore.save(keys::KEY_MENU, menu)
    }

    pub async fn find_by_name(&self, name: &str) -> Option<MenuItem> {
        self.load_menu()
            .await
            .into_iter()
            .find(|item| item.name == name)
    }
}
