// src/services/cart_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::cart::{CartItem, CartTotals},
    models::order::LineItem,
    storage::{StorageArea, keys},
};

// Carrinho por usuário, guardado na área de sessão sob `cart_<username>`:
// fechar o navegador esvazia o carrinho, mas ele sobrevive à navegação.
// A mesclagem é por nome de item; o preço fica registrado na primeira adição.
#[derive(Clone)]
pub struct CartService {
    session: Arc<dyn StorageArea>,
}

impl CartService {
    pub fn new(session: Arc<dyn StorageArea>) -> Self {
        Self { session }
    }

    pub async fn load_cart(&self, username: &str) -> Vec<CartItem> {
        let raw = match self.session.get_item(&keys::cart_key(username)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("Falha ao ler o carrinho de '{}': {}", username, err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!("Carrinho ilegível de '{}': {}", username, err);
                Vec::new()
            }
        }
    }

    async fn save_cart(&self, username: &str, cart: &[CartItem]) -> Result<(), AppError> {
        let json = serde_json::to_string(cart).map_err(anyhow::Error::new)?;
        self.session.set_item(&keys::cart_key(username), &json)?;
        Ok(())
    }

    pub async fn add_to_cart(
        &self,
        username: &str,
        name: &str,
        price: Decimal,
        quantity: u32,
    ) -> Result<Vec<CartItem>, AppError> {
        let mut cart = self.load_cart(username).await;
        match cart.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => cart.push(CartItem {
                name: name.to_string(),
                price,
                quantity,
            }),
        }
        self.save_cart(username, &cart).await?;
        Ok(cart)
    }

    // Ajusta a quantidade pelo delta; chegar a zero (ou menos) remove o item,
    // e passar do teto de u32 satura nele. Item inexistente é um no-op.
    pub async fn change_quantity(
        &self,
        username: &str,
        name: &str,
        delta: i64,
    ) -> Result<Vec<CartItem>, AppError> {
        let mut cart = self.load_cart(username).await;
        let idx = match cart.iter().position(|item| item.name == name) {
            Some(idx) => idx,
            None => return Ok(cart),
        };

        let updated = i64::from(cart[idx].quantity) + delta;
        if updated <= 0 {
            cart.remove(idx);
        } else {
            cart[idx].quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
        self.save_cart(username, &cart).await?;
        Ok(cart)
    }

    pub async fn remove_item(
        &self,
        username: &str,
        name: &str,
    ) -> Result<Vec<CartItem>, AppError> {
        let mut cart = self.load_cart(username).await;
        cart.retain(|item| item.name != name);
        self.save_cart(username, &cart).await?;
        Ok(cart)
    }

    pub async fn clear_cart(&self, username: &str) -> Result<(), AppError> {
        self.session.remove_item(&keys::cart_key(username))?;
        Ok(())
    }

    // Após o checkout, remove do carrinho as entradas compradas. A
    // correspondência é por nome E preço, uma entrada por item comprado.
    pub async fn remove_purchased(
        &self,
        username: &str,
        purchased: &[LineItem],
    ) -> Result<(), AppError> {
        let mut cart = self.load_cart(username).await;
        for line in purchased {
            if let Some(idx) = cart
                .iter()
                .position(|item| item.name == line.name && item.price == line.price)
            {
                cart.remove(idx);
            }
        }
        self.save_cart(username, &cart).await
    }

    pub fn cart_totals(&self, cart: &[CartItem]) -> CartTotals {
        let subtotal: Decimal = cart.iter().map(|item| item.line_total()).sum();
        CartTotals {
            subtotal,
            total: subtotal,
        }
    }

    pub fn item_count(&self, cart: &[CartItem]) -> u32 {
        cart.iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }
}
