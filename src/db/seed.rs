// src/db/seed.rs

// Dados embutidos que populam o armazenamento na primeira carga. O catálogo
// e os usuários são os mesmos do storefront de demonstração; os pedidos de
// exemplo dão conteúdo ao rastreador e ao painel de análise sem exigir um
// checkout manual.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::menu::{MenuItem, Pricing};
use crate::models::order::{LineItem, Order, OrderStatus, PaymentMethod};
use crate::models::review::{ProductReview, RiderReview};
use crate::models::user::{User, UserRole};

fn priced(category: &str, name: &str, price: u32, image: &str, stock: Option<u32>) -> MenuItem {
    MenuItem {
        category: category.to_string(),
        name: name.to_string(),
        pricing: Pricing::Price(Decimal::from(price)),
        image: image.to_string(),
        stock,
    }
}

fn sized(
    category: &str,
    name: &str,
    sizes: &[(&str, u32)],
    image: &str,
    stock: Option<u32>,
) -> MenuItem {
    let sizes = sizes
        .iter()
        .map(|(label, price)| ((*label).to_string(), Decimal::from(*price)))
        .collect();
    MenuItem {
        category: category.to_string(),
        name: name.to_string(),
        pricing: Pricing::Sizes(sizes),
        image: image.to_string(),
        stock,
    }
}

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        // Essenciais
        sized(
            "essentials",
            "Chef\u{2019}s Knife",
            &[("6\"", 400), ("8\"", 600), ("10\"", 800)],
            "/static/images/knife.png",
            Some(24),
        ),
        priced(
            "essentials",
            "Wood Cutting Board",
            450,
            "/static/images/cuttingboard.png",
            Some(30),
        ),
        sized(
            "essentials",
            "Nonstick Frying Pan",
            &[("8\"", 450), ("10\"", 600), ("12\"", 750)],
            "/static/images/fryingpan.png",
            Some(18),
        ),
        priced(
            "essentials",
            "Measuring Cups (set)",
            350,
            "/static/images/measuringcups.png",
            Some(40),
        ),
        // Sem controle de estoque: o razão pula este item.
        priced(
            "essentials",
            "Spoons (set)",
            250,
            "/static/images/spoons.png",
            None,
        ),
        // Eletroportáteis
        priced(
            "appliances",
            "Air Fryer",
            5200,
            "/static/images/airfryer.png",
            Some(10),
        ),
        priced(
            "appliances",
            "Blender",
            3200,
            "/static/images/blender.png",
            Some(12),
        ),
        priced(
            "appliances",
            "Electric Kettle",
            1500,
            "/static/images/kettle.png",
            Some(25),
        ),
        priced(
            "appliances",
            "Toaster Oven",
            4200,
            "/static/images/toasteroven.png",
            Some(8),
        ),
        priced(
            "appliances",
            "Coffee Maker",
            2800,
            "/static/images/coffeemaker.png",
            Some(15),
        ),
        // Utensílios
        priced(
            "gadgets",
            "Digital Instant-Read Thermometer",
            850,
            "/static/images/thermometer.png",
            Some(35),
        ),
        priced("gadgets", "Tongs", 220, "/static/images/tong.png", Some(50)),
        priced("gadgets", "Whisk", 180, "/static/images/whisk.png", Some(60)),
        priced(
            "gadgets",
            "Microplane Zester",
            600,
            "/static/images/zester.png",
            Some(20),
        ),
        priced(
            "gadgets",
            "Vegetable Peeler",
            140,
            "/static/images/peeler.png",
            Some(45),
        ),
        // Armazenamento e limpeza
        sized(
            "storage",
            "Airtight Food Storage Container Set",
            &[("Small", 350), ("Medium", 500), ("Large", 700)],
            "/static/images/container.png",
            Some(22),
        ),
        sized(
            "storage",
            "Glass Storage Jars",
            &[("Small", 250), ("Medium", 350), ("Large", 450)],
            "/static/images/jar.png",
            Some(28),
        ),
        priced(
            "storage",
            "Dish Drying Rack",
            650,
            "/static/images/rack.png",
            Some(16),
        ),
        priced("storage", "Sponge", 60, "/static/images/sponge.png", None),
    ]
}

pub fn default_users() -> Vec<User> {
    vec![
        User {
            full_name: "Admin".to_string(),
            username: "admin".to_string(),
            email: "faithm.valencia5@gmail.com".to_string(),
            password: Some("admin123".to_string()),
            role: UserRole::Admin,
            address: "San Pedro, Bauan, Batangas".to_string(),
            contact_number: "09938564677".to_string(),
        },
        User {
            full_name: "Faith Valencia".to_string(),
            username: "faith".to_string(),
            email: "faithmaramotvalencia05@gmail.com".to_string(),
            password: Some("faith123".to_string()),
            role: UserRole::Customer,
            address: "San Pedro, Bauan, Batangas".to_string(),
            contact_number: "09938564676".to_string(),
        },
        // Entregadores do seed não têm senha e não fazem login.
        User {
            full_name: "Ramon Santos".to_string(),
            username: "rider1".to_string(),
            email: "ramon@gmail.com".to_string(),
            password: None,
            role: UserRole::Rider,
            address: "Local Depot".to_string(),
            contact_number: "09170000001".to_string(),
        },
        User {
            full_name: "Liza Cruz".to_string(),
            username: "rider2".to_string(),
            email: "liza@gmail.com".to_string(),
            password: None,
            role: UserRole::Rider,
            address: "Rider Hub".to_string(),
            contact_number: "09170000002".to_string(),
        },
        User {
            full_name: "Pedro Reyes".to_string(),
            username: "rider3".to_string(),
            email: "pedro@gmail.com".to_string(),
            password: None,
            role: UserRole::Rider,
            address: "Central Station".to_string(),
            contact_number: "09170000003".to_string(),
        },
    ]
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

// Dois pedidos da cliente do seed: um em andamento (aparece no rastreador) e
// um entregue com avaliações aninhadas, das quais as coleções de avaliações
// de nível superior são derivadas.
pub fn default_orders() -> Vec<Order> {
    let delivered_at = ts(2025, 8, 9, 14, 5);
    let reviewed_at = ts(2025, 8, 9, 14, 10);

    vec![
        Order {
            id: "FC1001".to_string(),
            customer: "faith".to_string(),
            items: vec![
                LineItem {
                    name: "Wood Cutting Board".to_string(),
                    price: Decimal::from(450),
                    quantity: 1,
                },
                LineItem {
                    name: "Tongs".to_string(),
                    price: Decimal::from(220),
                    quantity: 2,
                },
            ],
            subtotal: Decimal::from(890),
            shipping_fee: Decimal::from(30),
            total: Decimal::from(920),
            status: OrderStatus::Ready,
            order_time: ts(2025, 8, 20, 9, 30),
            placed_time: Some(ts(2025, 8, 20, 9, 30)),
            preparing_time: Some(ts(2025, 8, 20, 9, 36)),
            ready_time: Some(ts(2025, 8, 20, 9, 52)),
            pickedup_time: None,
            delivered_time: None,
            cancelled_time: None,
            assigned_rider: Some("rider1".to_string()),
            delivery_address: Some("San Pedro, Bauan, Batangas".to_string()),
            contact_number: Some("09938564676".to_string()),
            payment_method: PaymentMethod::Cash,
            reviews: Vec::new(),
            rider_reviews: Vec::new(),
        },
        Order {
            id: "FC1002".to_string(),
            customer: "faith".to_string(),
            items: vec![
                LineItem {
                    name: "Air Fryer".to_string(),
                    price: Decimal::from(5200),
                    quantity: 1,
                },
                LineItem {
                    name: "Whisk".to_string(),
                    price: Decimal::from(180),
                    quantity: 2,
                },
            ],
            subtotal: Decimal::from(5560),
            shipping_fee: Decimal::from(15),
            total: Decimal::from(5575),
            status: OrderStatus::Delivered,
            order_time: ts(2025, 8, 9, 13, 0),
            placed_time: Some(ts(2025, 8, 9, 13, 0)),
            preparing_time: Some(ts(2025, 8, 9, 13, 5)),
            ready_time: Some(ts(2025, 8, 9, 13, 25)),
            pickedup_time: Some(ts(2025, 8, 9, 13, 40)),
            delivered_time: Some(delivered_at),
            cancelled_time: None,
            assigned_rider: Some("rider2".to_string()),
            delivery_address: Some("San Pedro, Bauan, Batangas".to_string()),
            contact_number: Some("09938564676".to_string()),
            payment_method: PaymentMethod::Gcash,
            reviews: vec![
                ProductReview {
                    id: format!("R-{}-seed01", reviewed_at.timestamp_millis()),
                    order_id: "FC1002".to_string(),
                    product: "Air Fryer".to_string(),
                    customer: "faith".to_string(),
                    rating: 4,
                    comment: "Heats evenly and the basket fits a whole batch.".to_string(),
                    time: reviewed_at,
                },
                ProductReview {
                    id: format!("R-{}-seed02", reviewed_at.timestamp_millis()),
                    order_id: "FC1002".to_string(),
                    product: "Whisk".to_string(),
                    customer: "faith".to_string(),
                    rating: 5,
                    comment: String::new(),
                    time: reviewed_at,
                },
            ],
            rider_reviews: vec![RiderReview {
                id: format!("RR-{}-seed01", reviewed_at.timestamp_millis()),
                order_id: "FC1002".to_string(),
                rider: "rider2".to_string(),
                customer: "faith".to_string(),
                rating: 5,
                comment: "Arrived early and the box was well wrapped.".to_string(),
                time: reviewed_at,
            }],
        },
    ]
}

// As coleções de avaliações começam com o que os pedidos do seed carregam
// aninhado, para que o painel nunca parta de listas vazias.
pub fn default_reviews() -> Vec<ProductReview> {
    default_orders()
        .into_iter()
        .flat_map(|order| order.reviews)
        .collect()
}

pub fn default_rider_reviews() -> Vec<RiderReview> {
    default_orders()
        .into_iter()
        .flat_map(|order| order.rider_reviews)
        .collect()
}
