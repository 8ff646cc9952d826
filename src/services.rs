// src/services.rs

// Camada de serviços: toda a lógica de negócio mora aqui. Os handlers de UI
// conversam apenas com estes serviços, nunca com os repositórios diretamente.

pub mod store_service;
pub use store_service::StoreService;

pub mod auth;
pub use auth::AuthService;

pub mod menu_service;
pub use menu_service::MenuService;

pub mod inventory_service;
pub use inventory_service::InventoryService;

pub mod cart_service;
pub use cart_service::CartService;

pub mod order_service;
pub use order_service::OrderService;

pub mod review_service;
pub use review_service::ReviewService;

pub mod tracking_service;
pub use tracking_service::TrackingService;

pub mod analytics_service;
pub use analytics_service::AnalyticsService;
