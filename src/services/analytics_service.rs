// src/services/analytics_service.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    db::{MenuRepository, OrderRepository, ReviewRepository, UserRepository},
    models::analytics::{
        OrdersSummary, ProductRating, RevenueEntry, RiderPerformanceEntry, RiderRating,
        TopItemEntry,
    },
    models::order::{Order, OrderStatus},
    models::user::UserRole,
};

// Agregados do painel do admin. Todos são derivados na leitura, nada é
// materializado: pedidos cancelados ficam fora da receita e das contagens
// de volume, e médias de avaliação sem nenhuma nota reportam None.
#[derive(Clone)]
pub struct AnalyticsService {
    orders_repo: OrderRepository,
    menu_repo: MenuRepository,
    users_repo: UserRepository,
    reviews_repo: ReviewRepository,
}

impl AnalyticsService {
    pub fn new(
        orders_repo: OrderRepository,
        menu_repo: MenuRepository,
        users_repo: UserRepository,
        reviews_repo: ReviewRepository,
    ) -> Self {
        Self {
            orders_repo,
            menu_repo,
            users_repo,
            reviews_repo,
        }
    }

    // 1. Resumo dos cards do topo
    pub async fn summary(&self) -> OrdersSummary {
        let orders = self.orders_repo.load_orders().await;

        let delivered = count_with_status(&orders, OrderStatus::Delivered);
        let cancelled = count_with_status(&orders, OrderStatus::Cancelled);
        let revenue: Decimal = orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum();

        // A média considera só os pedidos que geram receita.
        let non_cancelled = orders.len() - cancelled;
        let average_order = if non_cancelled > 0 {
            revenue / Decimal::from(non_cancelled as u64)
        } else {
            Decimal::ZERO
        };

        OrdersSummary {
            total_orders: orders.len(),
            delivered,
            cancelled,
            revenue,
            average_order,
        }
    }

    // 2. Itens mais vendidos por quantidade, cancelados fora
    pub async fn top_items(&self, limit: usize) -> Vec<TopItemEntry> {
        let orders = self.orders_repo.load_orders().await;

        let mut counts: Vec<TopItemEntry> = Vec::new();
        for order in orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
        {
            for line in &order.items {
                match counts.iter_mut().find(|entry| entry.name == line.name) {
                    Some(entry) => entry.quantity = entry.quantity.saturating_add(line.quantity),
                    None => counts.push(TopItemEntry {
                        name: line.name.clone(),
                        quantity: line.quantity,
                    }),
                }
            }
        }

        counts.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.name.cmp(&b.name)));
        counts.truncate(limit);
        counts
    }

    // 3. Receita agregada por dia do pedido, em ordem cronológica
    pub async fn revenue_by_date(&self) -> Vec<RevenueEntry> {
        let orders = self.orders_repo.load_orders().await;

        let mut by_date: BTreeMap<chrono::NaiveDate, Decimal> = BTreeMap::new();
        for order in orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
        {
            *by_date.entry(order.order_time.date_naive()).or_default() += order.total;
        }

        by_date
            .into_iter()
            .map(|(date, total)| RevenueEntry { date, total })
            .collect()
    }

    // 4. Entregas por entregador: pedidos atribuídos não cancelados. Todo
    //    entregador cadastrado aparece, mesmo com zero.
    pub async fn rider_performance(&self) -> Vec<RiderPerformanceEntry> {
        let orders = self.orders_repo.load_orders().await;
        let users = self.users_repo.load_users().await;

        users
            .into_iter()
            .filter(|user| user.role == UserRole::Rider)
            .map(|rider| {
                let deliveries = orders
                    .iter()
                    .filter(|order| {
                        order.status != OrderStatus::Cancelled
                            && order.assigned_rider.as_deref() == Some(rider.username.as_str())
                    })
                    .count() as u32;
                RiderPerformanceEntry {
                    username: rider.username,
                    full_name: rider.full_name,
                    deliveries,
                }
            })
            .collect()
    }

    // 5. Médias de avaliação por produto. O mapa parte do catálogo inteiro,
    //    então produtos sem nota aparecem com média None; produtos avaliados
    //    que saíram do catálogo entram no fim.
    pub async fn product_ratings(&self) -> Vec<ProductRating> {
        let menu = self.menu_repo.load_menu().await;
        let reviews = self.reviews_repo.load_reviews().await;

        let mut totals: Vec<(String, u32, u32)> = menu
            .into_iter()
            .map(|item| (item.name, 0, 0))
            .collect();
        for review in &reviews {
            if review.rating == 0 {
                continue;
            }
            match totals.iter_mut().find(|(name, _, _)| *name == review.product) {
                Some((_, sum, count)) => {
                    *sum += u32::from(review.rating);
                    *count += 1;
                }
                None => totals.push((review.product.clone(), u32::from(review.rating), 1)),
            }
        }

        totals
            .into_iter()
            .map(|(name, sum, count)| ProductRating {
                name,
                average: rounded_average(sum, count),
                count,
            })
            .collect()
    }

    pub async fn rider_ratings(&self) -> Vec<RiderRating> {
        let users = self.users_repo.load_users().await;
        let reviews = self.reviews_repo.load_rider_reviews().await;

        let mut totals: Vec<(String, u32, u32)> = users
            .into_iter()
            .filter(|user| user.role == UserRole::Rider)
            .map(|rider| (rider.username, 0, 0))
            .collect();
        for review in &reviews {
            if review.rating == 0 {
                continue;
            }
            match totals.iter_mut().find(|(name, _, _)| *name == review.rider) {
                Some((_, sum, count)) => {
                    *sum += u32::from(review.rating);
                    *count += 1;
                }
                None => totals.push((review.rider.clone(), u32::from(review.rating), 1)),
            }
        }

        totals
            .into_iter()
            .map(|(username, sum, count)| RiderRating {
                username,
                average: rounded_average(sum, count),
                count,
            })
            .collect()
    }
}

fn count_with_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|order| order.status == status).count()
}

// Média inteira arredondada e presa a [1, 5]; None quando não há notas.
fn rounded_average(sum: u32, count: u32) -> Option<u8> {
    if count == 0 {
        return None;
    }
    let average = (f64::from(sum) / f64::from(count)).round();
    Some(average.clamp(1.0, 5.0) as u8)
}
