// src/storage.rs

pub mod keys;
pub mod memory;

pub use memory::MemoryStorage;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Armazenamento indisponível: {0}")]
    Unavailable(String),
}

// Abstração da área de armazenamento chave/valor (o substrato "do navegador").
// Cada coleção é persistida como um único valor serializado por chave.
//
// `set_items` grava várias chaves como uma unidade; é o caminho usado para
// manter pedido + estoque sincronizados numa única escrita.
pub trait StorageArea: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn set_items(&self, entries: &[(String, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }
}
