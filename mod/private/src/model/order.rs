use openshop_core::Page;
use serde::{Deserialize, Serialize};

use crate::model::Product;

/// Order lifecycle status, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEnum {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl StatusEnum {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl Default for StatusEnum {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for StatusEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,

    pub order_number: String,

    #[serde(default)]
    pub status: StatusEnum,

    /// Decimal amount as a string, exactly as the backend serializes it.
    pub total_amount: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// Line items, embedded by the read serializer.
    pub items: Vec<OrderItem>,
}

/// Request body for creating or replacing an order.
///
/// Items are managed through the order-items endpoints, not inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderWritable {
    pub order_number: String,

    pub total_amount: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusEnum>,
}

/// Partial-update body. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatchedOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusEnum>,
}

/// A line item of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: i64,

    /// Product, embedded by the read serializer.
    pub product: Product,

    pub quantity: u32,

    /// Unit price at order time, decimal-as-string.
    pub price: String,
}

/// Request body for adding a line item to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemWritable {
    pub product_id: i64,

    pub quantity: u32,
}

/// Partial-update body for a line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatchedOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// One page of orders.
pub type PaginatedOrderList = Page<Order>;

/// One page of order items.
pub type PaginatedOrderItemList = Page<OrderItem>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn sample_order() -> Order {
        Order {
            id: 100,
            order_number: "ORD-2026-0100".into(),
            status: StatusEnum::Processing,
            total_amount: "154.49".into(),
            created_at: "2026-03-05T16:20:00Z".into(),
            items: vec![OrderItem {
                id: 1,
                product: Product {
                    id: 11,
                    name: "Mechanical keyboard".into(),
                    description: "Tenkeyless".into(),
                    price: "129.99".into(),
                    category: Category {
                        id: 3,
                        name: "Peripherals".into(),
                        description: None,
                        is_active: Some(true),
                    },
                    stock: Some(39),
                    created_at: "2026-02-10T10:00:00Z".into(),
                },
                quantity: 1,
                price: "129.99".into(),
            }],
        }
    }

    #[test]
    fn status_wire_values_are_lowercase() {
        for (status, wire) in [
            (StatusEnum::Pending, "\"pending\""),
            (StatusEnum::Processing, "\"processing\""),
            (StatusEnum::Shipped, "\"shipped\""),
            (StatusEnum::Delivered, "\"delivered\""),
            (StatusEnum::Cancelled, "\"cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<StatusEnum>(wire).unwrap(), status);
        }
    }

    #[test]
    fn status_terminal_states() {
        assert!(StatusEnum::Delivered.is_terminal());
        assert!(StatusEnum::Cancelled.is_terminal());
        assert!(!StatusEnum::Pending.is_terminal());
        assert!(!StatusEnum::Processing.is_terminal());
        assert!(!StatusEnum::Shipped.is_terminal());
    }

    #[test]
    fn status_display_matches_wire() {
        assert_eq!(StatusEnum::Shipped.to_string(), "shipped");
        assert_eq!(StatusEnum::default(), StatusEnum::Pending);
    }

    #[test]
    fn order_json_roundtrip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }

    #[test]
    fn order_status_defaults_to_pending() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 101,
                "order_number": "ORD-2026-0101",
                "total_amount": "10.00",
                "created_at": "2026-03-06T09:00:00Z",
                "items": []
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, StatusEnum::Pending);
    }

    #[test]
    fn order_writable_omits_unset_status() {
        let body = OrderWritable {
            order_number: "ORD-2026-0102".into(),
            total_amount: "10.00".into(),
            status: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(!obj.contains_key("status"));
    }

    #[test]
    fn paginated_order_list_shape() {
        let json = format!(
            r#"{{"count": 1, "next": null, "previous": null, "results": [{}]}}"#,
            serde_json::to_string(&sample_order()).unwrap()
        );
        let page: PaginatedOrderList = serde_json::from_str(&json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].status, StatusEnum::Processing);
    }
}
