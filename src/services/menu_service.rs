// src/services/menu_service.rs

use crate::{common::error::AppError, db::MenuRepository, models::menu::MenuItem};

// CRUD do catálogo de produtos. O nome do item é a chave: não há id substituto.
#[derive(Clone)]
pub struct MenuService {
    menu_repo: MenuRepository,
}

impl MenuService {
    pub fn new(menu_repo: MenuRepository) -> Self {
        Self { menu_repo }
    }

    pub async fn menu(&self) -> Vec<MenuItem> {
        self.menu_repo.load_menu().await
    }

    pub async fn find_item(&self, name: &str) -> Option<MenuItem> {
        self.menu_repo.find_by_name(name).await
    }

    pub async fn add_menu_item(&self, item: MenuItem) -> Result<(), AppError> {
        let mut menu = self.menu_repo.load_menu().await;
        menu.push(item);
        self.menu_repo.save_menu(&menu).await
    }

    // Devolve false quando não existe item com esse nome.
    pub async fn update_menu_item(
        &self,
        name: &str,
        updated: MenuItem,
    ) -> Result<bool, AppError> {
        let mut menu = self.menu_repo.load_menu().await;
        let idx = match menu.iter().position(|item| item.name == name) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        menu[idx] = updated;
        self.menu_repo.save_menu(&menu).await?;
        Ok(true)
    }

    pub async fn delete_menu_item(&self, name: &str) -> Result<bool, AppError> {
        let mut menu = self.menu_repo.load_menu().await;
        let before = menu.len();
        menu.retain(|item| item.name != name);
        if menu.len() == before {
            return Ok(false);
        }
        self.menu_repo.save_menu(&menu).await?;
        Ok(true)
    }
}
