// src/config.rs

use std::{env, sync::Arc, time::Duration};

use crate::{
    db::{Datastore, MenuRepository, OrderRepository, ReviewRepository, UserRepository},
    services::{
        AnalyticsService, AuthService, CartService, InventoryService, MenuService, OrderService,
        ReviewService, StoreService, TrackingService,
    },
    storage::{MemoryStorage, StorageArea},
};

// Flags de ambiente lidas na subida:
// - KITCHENCRAFT_PRESERVE_USERS / KITCHENCRAFT_PRESERVE_MENU: "true" suprime
//   o reseed automático quando o seed embutido muda (nunca o seed inicial).
// - KITCHENCRAFT_REFRESH_SECS: intervalo do rastreador, padrão 10 segundos.
#[derive(Debug, Clone)]
pub struct Settings {
    pub preserve_users: bool,
    pub preserve_menu: bool,
    pub refresh_interval: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        let refresh_secs = env::var("KITCHENCRAFT_REFRESH_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(10);

        Self {
            preserve_users: env_flag("KITCHENCRAFT_PRESERVE_USERS"),
            preserve_menu: env_flag("KITCHENCRAFT_PRESERVE_MENU"),
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|raw| raw == "true").unwrap_or(false)
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store_service: StoreService,
    pub auth_service: AuthService,
    pub menu_service: MenuService,
    pub inventory_service: InventoryService,
    pub cart_service: CartService,
    pub order_service: OrderService,
    pub review_service: ReviewService,
    pub tracking_service: TrackingService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let settings = Settings::from_env();

        // Área local (coleções duráveis) e área de sessão (sessão e
        // carrinhos), ambas em memória neste processo.
        let local: Arc<dyn StorageArea> = Arc::new(MemoryStorage::new());
        let session: Arc<dyn StorageArea> = Arc::new(MemoryStorage::new());
        Self::with_storage(settings, local, session).await
    }

    // Injeção das áreas de armazenamento: os testes passam suas próprias
    // instâncias para isolar cada cenário.
    pub async fn with_storage(
        settings: Settings,
        local: Arc<dyn StorageArea>,
        session: Arc<dyn StorageArea>,
    ) -> anyhow::Result<Self> {
        let datastore = Datastore::new(local, settings.preserve_users, settings.preserve_menu);
        datastore.ensure_seed();
        tracing::info!("✅ Armazenamento pronto e coleções semeadas");

        // --- Monta o gráfico de dependências ---
        let users_repo = UserRepository::new(datastore.clone());
        let menu_repo = MenuRepository::new(datastore.clone());
        let orders_repo = OrderRepository::new(datastore.clone());
        let reviews_repo = ReviewRepository::new(datastore.clone());

        let store_service = StoreService::new(
            datastore,
            users_repo.clone(),
            menu_repo.clone(),
            orders_repo.clone(),
            reviews_repo.clone(),
        );
        let auth_service = AuthService::new(users_repo.clone(), session.clone());
        let menu_service = MenuService::new(menu_repo.clone());
        let inventory_service = InventoryService::new();
        let cart_service = CartService::new(session);
        let order_service = OrderService::new(
            orders_repo.clone(),
            menu_repo.clone(),
            inventory_service.clone(),
            cart_service.clone(),
        );
        let review_service = ReviewService::new(reviews_repo.clone(), orders_repo.clone());
        let tracking_service =
            TrackingService::new(order_service.clone(), settings.refresh_interval);
        let analytics_service =
            AnalyticsService::new(orders_repo, menu_repo, users_repo, reviews_repo);

        Ok(Self {
            settings,
            store_service,
            auth_service,
            menu_service,
            inventory_service,
            cart_service,
            order_service,
            review_service,
            tracking_service,
            analytics_service,
        })
    }
}
