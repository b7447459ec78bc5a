use crate::entities::{EntityId, Order};
use crate::repository::OrderRepository;

/// Order capabilities the orders controller relies on
pub trait OrderService {
    fn list_orders(&self) -> Vec<Order>;
    fn get_order(&self, id: EntityId) -> Option<Order>;
    fn save_order(&self, order: Order) -> Order;
    fn update_order(&self, id: EntityId, order: Order) -> Option<Order>;
    fn delete_order(&self, id: EntityId) -> bool;
}

#[derive(Clone, Copy)]
pub struct RepositoryOrderService<'a> {
    repo: &'a OrderRepository,
}

impl<'a> RepositoryOrderService<'a> {
    pub fn new(repo: &'a OrderRepository) -> Self {
        Self { repo }
    }
}

impl OrderService for RepositoryOrderService<'_> {
    fn list_orders(&self) -> Vec<Order> {
        self.repo.list()
    }

    fn get_order(&self, id: EntityId) -> Option<Order> {
        self.repo.get(id)
    }

    fn save_order(&self, order: Order) -> Order {
        self.repo.add(order)
    }

    fn update_order(&self, id: EntityId, order: Order) -> Option<Order> {
        self.repo.update(id, order)
    }

    fn delete_order(&self, id: EntityId) -> bool {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_order_service_round_trip() {
        let repo = OrderRepository::new();
        let service = RepositoryOrderService::new(&repo);

        let saved = service.save_order(Order::new("Ada", Decimal::new(2500, 2)));
        assert_eq!(saved.order_id, 1);

        let updated = service
            .update_order(1, Order::new("Ada Lovelace", Decimal::new(3000, 2)))
            .unwrap();
        assert_eq!(updated.order_id, 1);
        assert_eq!(service.get_order(1), Some(updated));

        assert!(service.delete_order(1));
        assert!(service.list_orders().is_empty());
    }
}
