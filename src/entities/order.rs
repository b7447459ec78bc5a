// 🧾 Order Entity
//
// Wire shape: { "orderId": int, "customerName": string, "totalAmount": number }

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: EntityId,
    pub customer_name: String,
    /// Sign is not enforced
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
}

impl Order {
    pub fn new(customer_name: impl Into<String>, total_amount: Decimal) -> Self {
        Order {
            order_id: 0,
            customer_name: customer_name.into(),
            total_amount,
        }
    }
}

impl Entity for Order {
    fn id(&self) -> EntityId {
        self.order_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.order_id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.customer_name = other.customer_name;
        self.total_amount = other.total_amount;
    }
}

/// Body of POST/PUT /api/orders (camelCase or PascalCase names)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(alias = "CustomerName")]
    pub customer_name: String,
    #[serde(
        alias = "TotalAmount",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub total_amount: Decimal,
}

impl From<OrderPayload> for Order {
    fn from(payload: OrderPayload) -> Self {
        Order::new(payload.customer_name, payload.total_amount)
    }
}
