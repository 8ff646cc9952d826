// src/db.rs

// Camada de dados: seeds embutidos, o Datastore e os repositórios.

pub mod datastore;
pub use datastore::Datastore;

pub mod seed;

pub mod users_repo;
pub use users_repo::UserRepository;

pub mod menu_repo;
pub use menu_repo::MenuRepository;

pub mod orders_repo;
pub use orders_repo::OrderRepository;

pub mod reviews_repo;
pub use reviews_repo::ReviewRepository;
