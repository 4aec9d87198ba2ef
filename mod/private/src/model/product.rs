use openshop_core::Page;
use serde::{Deserialize, Serialize};

use crate::model::Category;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Decimal amount as a string, exactly as the backend serializes it.
    pub price: String,

    /// Category, embedded by the read serializer.
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Request body for creating or replacing a product.
///
/// Writable fields only — `id`, `category` and `created_at` are
/// server-assigned; the category is referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductWritable {
    pub name: String,

    pub description: String,

    pub price: String,

    pub category_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Partial-update body. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatchedProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// One page of products.
pub type PaginatedProductList = Page<Product>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 11,
            name: "Mechanical keyboard".into(),
            description: "Tenkeyless, hot-swappable".into(),
            price: "129.99".into(),
            category: Category {
                id: 3,
                name: "Peripherals".into(),
                description: None,
                is_active: Some(true),
            },
            stock: Some(40),
            created_at: "2026-02-10T10:00:00Z".into(),
        }
    }

    #[test]
    fn product_json_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }

    #[test]
    fn product_price_stays_a_string() {
        let value = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(value["price"], "129.99");
    }

    #[test]
    fn product_without_stock_field() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 12,
                "name": "USB hub",
                "description": "4 ports",
                "price": "24.50",
                "category": {"id": 3, "name": "Peripherals"},
                "created_at": "2026-02-11T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(product.stock, None);
    }

    #[test]
    fn product_writable_references_category_by_id() {
        let body = ProductWritable {
            name: "USB hub".into(),
            description: "4 ports".into(),
            price: "24.50".into(),
            category_id: 3,
            stock: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["category_id"], 3);
        assert!(!obj.contains_key("category"));
        assert!(!obj.contains_key("stock"));
    }
}
