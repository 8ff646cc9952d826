// src/storage/keys.rs

// Chaves das coleções persistidas. Uma coleção = um valor JSON por chave.
pub const KEY_USERS: &str = "kitchencraft_users";
pub const KEY_MENU: &str = "kitchencraft_menu";
pub const KEY_ORDERS: &str = "kitchencraft_orders";
pub const KEY_REVIEWS: &str = "kitchencraft_reviews";
pub const KEY_RIDER_REVIEWS: &str = "kitchencraft_rider_reviews";
pub const KEY_USER_REQUESTS: &str = "kitchencraft_user_requests";

// Hashes do seed embutido, usados para detectar mudança de seed entre versões.
pub const KEY_USERS_SEED_HASH: &str = "kitchencraft_users_seedHash";
pub const KEY_MENU_SEED_HASH: &str = "kitchencraft_menu_seedHash";

// Prefixo dos carrinhos por usuário (área de sessão).
pub const CART_KEY_PREFIX: &str = "cart_";

pub fn cart_key(username: &str) -> String {
    format!("{CART_KEY_PREFIX}{username}")
}

// Sessão autenticada corrente (área de sessão: fechar o navegador desloga).
pub const KEY_CURRENT_USER: &str = "currentUser";
