// src/storage/memory.rs

use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageArea, StorageError};

// Implementação em memória da área de armazenamento. Faz o papel do
// localStorage/sessionStorage quando a biblioteca roda fora do navegador
// (demos e testes). Escopo de sessão: nada sobrevive ao processo.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> StorageError {
        StorageError::Unavailable("lock envenenado".to_string())
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| Self::lock_poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::lock_poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::lock_poisoned())?;
        entries.remove(key);
        Ok(())
    }

    // Todas as chaves entram sob um único lock de escrita: ou tudo, ou nada
    // visível pela metade para outros leitores.
    fn set_items(&self, items: &[(String, String)]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::lock_poisoned())?;
        for (key, value) in items {
            entries.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
