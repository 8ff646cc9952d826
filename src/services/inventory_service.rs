// src/services/inventory_service.rs

use crate::models::menu::MenuItem;
use crate::models::order::LineItem;

// Razão de estoque: mantém o campo `stock` do catálogo consistente com o
// volume de pedidos não cancelados. Opera sobre o catálogo em memória; quem
// persiste é o serviço de pedidos, no mesmo commit que grava o pedido.
#[derive(Clone, Default)]
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    // Baixa na colocação do pedido. Itens sem correspondência no catálogo ou
    // sem estoque controlado são pulados em silêncio.
    pub fn deduct_for_order(&self, menu: &mut [MenuItem], items: &[LineItem]) {
        for line in items {
            match self.resolve(menu, &line.name) {
                Some(idx) => menu[idx].deduct_stock(line.quantity),
                None => {
                    tracing::debug!("Sem item de catálogo para a baixa de '{}'", line.name);
                }
            }
        }
    }

    // Estorno quando o pedido é cancelado a partir de um status não cancelado.
    pub fn restock_for_order(&self, menu: &mut [MenuItem], items: &[LineItem]) {
        for line in items {
            if let Some(idx) = self.resolve(menu, &line.name) {
                menu[idx].restore_stock(line.quantity);
            }
        }
    }

    // Resolve o item de catálogo de um item de pedido: igualdade exata ou
    // prefixo seguido de espaço ou parêntese, para tolerar nomes qualificados
    // por tamanho ("Chef's Knife (8\")" casa com "Chef's Knife").
    fn resolve(&self, menu: &[MenuItem], line_name: &str) -> Option<usize> {
        if let Some(idx) = menu.iter().position(|item| item.name == line_name) {
            return Some(idx);
        }
        menu.iter().position(|item| {
            line_name
                .strip_prefix(item.name.as_str())
                .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('('))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::Pricing;
    use rust_decimal::Decimal;

    fn item(name: &str, stock: Option<u32>) -> MenuItem {
        MenuItem {
            category: "essentials".to_string(),
            name: name.to_string(),
            pricing: Pricing::Price(Decimal::from(100)),
            image: String::new(),
            stock,
        }
    }

    fn line(name: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.to_string(),
            price: Decimal::from(100),
            quantity,
        }
    }

    #[test]
    fn exact_match_deducts_stock() {
        let ledger = InventoryService::new();
        let mut menu = vec![item("Chefs Knife", Some(12))];

        ledger.deduct_for_order(&mut menu, &[line("Chefs Knife", 2)]);
        assert_eq!(menu[0].stock, Some(10));
    }

    #[test]
    fn size_qualified_name_matches_by_prefix() {
        let ledger = InventoryService::new();
        let mut menu = vec![item("Chefs Knife", Some(12))];

        ledger.deduct_for_order(&mut menu, &[line("Chefs Knife (8\")", 3)]);
        assert_eq!(menu[0].stock, Some(9));

        ledger.deduct_for_order(&mut menu, &[line("Chefs Knife 8-inch", 1)]);
        assert_eq!(menu[0].stock, Some(8));
    }

    #[test]
    fn unrelated_longer_name_does_not_match() {
        let ledger = InventoryService::new();
        let mut menu = vec![item("Chefs Knife", Some(12))];

        // Prefixo continuado por letra não é um qualificador de tamanho.
        ledger.deduct_for_order(&mut menu, &[line("Chefs Knifes", 2)]);
        assert_eq!(menu[0].stock, Some(12));
    }

    #[test]
    fn missing_or_untracked_items_are_skipped() {
        let ledger = InventoryService::new();
        let mut menu = vec![item("Sponge", None)];

        ledger.deduct_for_order(
            &mut menu,
            &[line("Sponge", 2), line("Produto Fantasma", 1)],
        );
        assert_eq!(menu[0].stock, None);
    }

    #[test]
    fn deduction_floors_at_zero_and_restock_is_unbounded() {
        let ledger = InventoryService::new();
        let mut menu = vec![item("Whisk", Some(3))];

        ledger.deduct_for_order(&mut menu, &[line("Whisk", 5)]);
        assert_eq!(menu[0].stock, Some(0));

        ledger.restock_for_order(&mut menu, &[line("Whisk", 5)]);
        assert_eq!(menu[0].stock, Some(5));
    }

    #[test]
    fn exact_match_wins_over_prefix() {
        let ledger = InventoryService::new();
        let mut menu = vec![
            item("Glass Storage", Some(10)),
            item("Glass Storage Jars", Some(10)),
        ];

        ledger.deduct_for_order(&mut menu, &[line("Glass Storage Jars", 1)]);
        assert_eq!(menu[0].stock, Some(10));
        assert_eq!(menu[1].stock, Some(9));
    }
}
