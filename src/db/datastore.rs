// src/db/datastore.rs

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::error::AppError;
use crate::db::seed;
use crate::models::order::Order;
use crate::models::review::{ProductReview, RiderReview};
use crate::models::user::{PendingUserRequest, User};
use crate::storage::{StorageArea, keys};

// Fachada sobre a área de armazenamento chave/valor. Cada coleção vive como
// um array JSON sob uma chave fixa; o Datastore garante que os seeds embutidos
// estejam presentes antes de qualquer leitura.
#[derive(Clone)]
pub struct Datastore {
    storage: Arc<dyn StorageArea>,
    preserve_users: bool,
    preserve_menu: bool,
}

impl Datastore {
    pub fn new(storage: Arc<dyn StorageArea>, preserve_users: bool, preserve_menu: bool) -> Self {
        Self {
            storage,
            preserve_users,
            preserve_menu,
        }
    }

    // ---
    // Leitura e escrita de coleções
    // ---

    // Carrega a coleção da chave indicada. Dados ausentes ou ilegíveis nunca
    // derrubam a chamada: o seed é reaplicado e o resultado relido.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.ensure_seed();
        self.read_parsed(key).unwrap_or_default()
    }

    pub fn save<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), AppError> {
        let json = encode(values)?;
        self.storage.set_item(key, &json)?;
        Ok(())
    }

    // Grava várias chaves num único commit da área de armazenamento, para que
    // escritas relacionadas (pedidos + cardápio) não fiquem pela metade.
    pub fn commit(&self, entries: Vec<(String, String)>) -> Result<(), AppError> {
        self.storage.set_items(&entries)?;
        Ok(())
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Falha ao ler a chave '{}': {}", key, err);
                None
            }
        }
    }

    fn read_parsed<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(values) => Some(values),
            Err(err) => {
                tracing::warn!("Conteúdo ilegível na chave '{}': {}", key, err);
                None
            }
        }
    }

    // ---
    // Seeding
    // ---

    // Contrato de seeding: na primeira carga toda coleção ausente (ou
    // corrompida) recebe o seed embutido. Usuários e cardápio também guardam
    // o hash do seed; quando o seed embutido muda entre versões, o hash
    // gravado deixa de bater e a coleção é reescrita, a menos que a flag
    // "preserve" correspondente esteja ativa.
    pub fn ensure_seed(&self) {
        self.seed_hashed(
            keys::KEY_USERS,
            keys::KEY_USERS_SEED_HASH,
            self.preserve_users,
            &seed::default_users(),
        );
        self.seed_hashed(
            keys::KEY_MENU,
            keys::KEY_MENU_SEED_HASH,
            self.preserve_menu,
            &seed::default_menu(),
        );
        self.seed_if_missing(keys::KEY_ORDERS, &seed::default_orders());
        self.seed_if_missing(keys::KEY_REVIEWS, &seed::default_reviews());
        self.seed_if_missing(keys::KEY_RIDER_REVIEWS, &seed::default_rider_reviews());
        self.seed_if_missing(
            keys::KEY_USER_REQUESTS,
            &Vec::<PendingUserRequest>::new(),
        );
    }

    fn seed_hashed<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        hash_key: &str,
        preserve: bool,
        defaults: &[T],
    ) {
        let json = match encode(defaults) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!("Falha ao serializar o seed de '{}': {}", key, err);
                return;
            }
        };
        let hash = seed_hash(&json);
        let stored_hash = self.read_raw(hash_key);

        let missing = self.read_parsed::<T>(key).is_none();
        let outdated = !preserve && stored_hash.as_deref() != Some(hash.as_str());
        if !missing && !outdated {
            return;
        }

        if let Err(err) = self.storage.set_item(key, &json) {
            tracing::error!("Falha ao semear '{}': {}", key, err);
            return;
        }
        if let Err(err) = self.storage.set_item(hash_key, &hash) {
            tracing::error!("Falha ao gravar o hash de seed de '{}': {}", key, err);
        }
        tracing::info!("🌱 Coleção '{}' semeada ({} registros)", key, defaults.len());
    }

    fn seed_if_missing<T: Serialize + DeserializeOwned>(&self, key: &str, defaults: &[T]) {
        if self.read_parsed::<T>(key).is_some() {
            return;
        }
        let json = match encode(defaults) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!("Falha ao serializar o seed de '{}': {}", key, err);
                return;
            }
        };
        if let Err(err) = self.storage.set_item(key, &json) {
            tracing::error!("Falha ao semear '{}': {}", key, err);
            return;
        }
        tracing::info!("🌱 Coleção '{}' semeada ({} registros)", key, defaults.len());
    }

    // Reescreve todas as coleções com os seeds embutidos, ignorando as flags
    // de preservação. Helper de desenvolvimento: nunca propaga erro, apenas
    // informa se o reset foi concluído.
    pub fn reset_to_defaults(&self) -> bool {
        match self.try_reset() {
            Ok(()) => {
                tracing::info!("Armazenamento restaurado para os seeds embutidos");
                true
            }
            Err(err) => {
                tracing::error!("Falha ao restaurar os seeds: {}", err);
                false
            }
        }
    }

    fn try_reset(&self) -> Result<(), AppError> {
        let users = encode(&seed::default_users())?;
        let menu = encode(&seed::default_menu())?;
        let entries = vec![
            (keys::KEY_USERS_SEED_HASH.to_string(), seed_hash(&users)),
            (keys::KEY_MENU_SEED_HASH.to_string(), seed_hash(&menu)),
            (keys::KEY_USERS.to_string(), users),
            (keys::KEY_MENU.to_string(), menu),
            (keys::KEY_ORDERS.to_string(), encode(&seed::default_orders())?),
            (keys::KEY_REVIEWS.to_string(), encode(&seed::default_reviews())?),
            (
                keys::KEY_RIDER_REVIEWS.to_string(),
                encode(&seed::default_rider_reviews())?,
            ),
            (
                keys::KEY_USER_REQUESTS.to_string(),
                encode(&Vec::<PendingUserRequest>::new())?,
            ),
        ];
        self.commit(entries)
    }

    // ---
    // Conveniências tipadas por coleção
    // ---

    pub fn users(&self) -> Vec<User> {
        self.load(keys::KEY_USERS)
    }

    pub fn orders(&self) -> Vec<Order> {
        self.load(keys::KEY_ORDERS)
    }

    pub fn reviews(&self) -> Vec<ProductReview> {
        self.load(keys::KEY_REVIEWS)
    }

    pub fn rider_reviews(&self) -> Vec<RiderReview> {
        self.load(keys::KEY_RIDER_REVIEWS)
    }
}

pub fn encode<T: Serialize>(values: &[T]) -> Result<String, AppError> {
    let json = serde_json::to_string(values).map_err(anyhow::Error::new)?;
    Ok(json)
}

// Hash djb2 do JSON serializado, em hexadecimal. O mesmo seed produz sempre o
// mesmo hash, então uma mudança nos dados embutidos é detectável na carga.
pub fn seed_hash(serialized: &str) -> String {
    let mut hash: u32 = 5381;
    for byte in serialized.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(u32::from(byte));
    }
    format!("{:x}", hash)
}
