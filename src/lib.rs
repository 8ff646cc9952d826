// src/lib.rs

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod storage;

// Reexportações principais para os consumidores da biblioteca
pub use common::error::AppError;
pub use config::{AppState, Settings};

// Inicializa o logger. O host (ou os testes) chama isso uma vez;
// chamadas repetidas são ignoradas em vez de dar panic.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}
