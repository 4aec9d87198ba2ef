//! Typed operations for the commerce resources.
//!
//! Discrete-argument methods over [`Client`]; list endpoints take a
//! [`ListQuery`], filter actions add their own query parameters on top.

use openshop_client::Client;
use openshop_core::{ApiError, ListQuery};
use serde::Serialize;

use crate::model::{
    Category, CategoryWritable, Order, OrderItem, OrderItemWritable, OrderWritable,
    PaginatedCategoryList, PaginatedOrderItemList, PaginatedOrderList, PaginatedProductList,
    PatchedCategory, PatchedOrder, PatchedOrderItem, PatchedProduct, Product, ProductWritable,
    StatusEnum,
};

/// Query for `products/by_category/` — the category filter plus the common
/// list parameters.
#[derive(Serialize)]
struct ByCategoryQuery<'a> {
    category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordering: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

/// Query for `orders/by_status/` — the status filter plus the common list
/// parameters.
#[derive(Serialize)]
struct ByStatusQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordering: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

/// Typed client for the private module. All calls require a bearer token on
/// the underlying [`Client`].
#[derive(Debug, Clone)]
pub struct PrivateApi {
    client: Client,
}

impl PrivateApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    // ── categories ──────────────────────────────────────────────────

    /// `GET /api/private_api/categories/`
    pub fn categories_list(&self, query: &ListQuery) -> Result<PaginatedCategoryList, ApiError> {
        self.client.get("/api/private_api/categories/", Some(query))
    }

    /// `POST /api/private_api/categories/`
    pub fn categories_create(&self, body: &CategoryWritable) -> Result<Category, ApiError> {
        self.client.post("/api/private_api/categories/", body)
    }

    /// `GET /api/private_api/categories/{id}/`
    pub fn categories_retrieve(&self, id: i64) -> Result<Category, ApiError> {
        self.client
            .get(&format!("/api/private_api/categories/{id}/"), None::<&()>)
    }

    /// `PUT /api/private_api/categories/{id}/`
    pub fn categories_update(&self, id: i64, body: &CategoryWritable) -> Result<Category, ApiError> {
        self.client
            .put(&format!("/api/private_api/categories/{id}/"), body)
    }

    /// `PATCH /api/private_api/categories/{id}/`
    pub fn categories_partial_update(
        &self,
        id: i64,
        body: &PatchedCategory,
    ) -> Result<Category, ApiError> {
        self.client
            .patch(&format!("/api/private_api/categories/{id}/"), body)
    }

    /// `DELETE /api/private_api/categories/{id}/`
    pub fn categories_destroy(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/private_api/categories/{id}/"))
    }

    /// `GET /api/private_api/categories/active/`
    pub fn categories_active(&self, query: &ListQuery) -> Result<PaginatedCategoryList, ApiError> {
        self.client
            .get("/api/private_api/categories/active/", Some(query))
    }

    // ── products ────────────────────────────────────────────────────

    /// `GET /api/private_api/products/`
    pub fn products_list(&self, query: &ListQuery) -> Result<PaginatedProductList, ApiError> {
        self.client.get("/api/private_api/products/", Some(query))
    }

    /// `POST /api/private_api/products/`
    pub fn products_create(&self, body: &ProductWritable) -> Result<Product, ApiError> {
        self.client.post("/api/private_api/products/", body)
    }

    /// `GET /api/private_api/products/{id}/`
    pub fn products_retrieve(&self, id: i64) -> Result<Product, ApiError> {
        self.client
            .get(&format!("/api/private_api/products/{id}/"), None::<&()>)
    }

    /// `PUT /api/private_api/products/{id}/`
    pub fn products_update(&self, id: i64, body: &ProductWritable) -> Result<Product, ApiError> {
        self.client
            .put(&format!("/api/private_api/products/{id}/"), body)
    }

    /// `PATCH /api/private_api/products/{id}/`
    pub fn products_partial_update(
        &self,
        id: i64,
        body: &PatchedProduct,
    ) -> Result<Product, ApiError> {
        self.client
            .patch(&format!("/api/private_api/products/{id}/"), body)
    }

    /// `DELETE /api/private_api/products/{id}/`
    pub fn products_destroy(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/private_api/products/{id}/"))
    }

    /// `GET /api/private_api/products/by_category/`
    pub fn products_by_category(
        &self,
        category_id: i64,
        query: &ListQuery,
    ) -> Result<PaginatedProductList, ApiError> {
        let query = ByCategoryQuery {
            category_id,
            ordering: query.ordering.as_deref(),
            page: query.page,
            search: query.search.as_deref(),
        };
        self.client
            .get("/api/private_api/products/by_category/", Some(&query))
    }

    /// `GET /api/private_api/products/low_stock/`
    pub fn products_low_stock(&self, query: &ListQuery) -> Result<PaginatedProductList, ApiError> {
        self.client
            .get("/api/private_api/products/low_stock/", Some(query))
    }

    // ── orders ──────────────────────────────────────────────────────

    /// `GET /api/private_api/orders/`
    pub fn orders_list(&self, query: &ListQuery) -> Result<PaginatedOrderList, ApiError> {
        self.client.get("/api/private_api/orders/", Some(query))
    }

    /// `POST /api/private_api/orders/`
    pub fn orders_create(&self, body: &OrderWritable) -> Result<Order, ApiError> {
        self.client.post("/api/private_api/orders/", body)
    }

    /// `GET /api/private_api/orders/{id}/`
    pub fn orders_retrieve(&self, id: i64) -> Result<Order, ApiError> {
        self.client
            .get(&format!("/api/private_api/orders/{id}/"), None::<&()>)
    }

    /// `PUT /api/private_api/orders/{id}/`
    pub fn orders_update(&self, id: i64, body: &OrderWritable) -> Result<Order, ApiError> {
        self.client
            .put(&format!("/api/private_api/orders/{id}/"), body)
    }

    /// `PATCH /api/private_api/orders/{id}/`
    pub fn orders_partial_update(&self, id: i64, body: &PatchedOrder) -> Result<Order, ApiError> {
        self.client
            .patch(&format!("/api/private_api/orders/{id}/"), body)
    }

    /// `DELETE /api/private_api/orders/{id}/`
    pub fn orders_destroy(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/private_api/orders/{id}/"))
    }

    /// `POST /api/private_api/orders/{id}/cancel/` — body-less action.
    pub fn orders_cancel(&self, id: i64) -> Result<Order, ApiError> {
        self.client
            .post_empty(&format!("/api/private_api/orders/{id}/cancel/"))
    }

    /// `GET /api/private_api/orders/by_status/`
    pub fn orders_by_status(
        &self,
        status: Option<StatusEnum>,
        query: &ListQuery,
    ) -> Result<PaginatedOrderList, ApiError> {
        let query = ByStatusQuery {
            status: status.map(|s| s.as_str()),
            ordering: query.ordering.as_deref(),
            page: query.page,
            search: query.search.as_deref(),
        };
        self.client
            .get("/api/private_api/orders/by_status/", Some(&query))
    }

    // ── order items (nested under an order) ─────────────────────────

    /// `GET /api/private_api/orders/{order_id}/items/`
    pub fn order_items_list(
        &self,
        order_id: i64,
        query: &ListQuery,
    ) -> Result<PaginatedOrderItemList, ApiError> {
        self.client.get(
            &format!("/api/private_api/orders/{order_id}/items/"),
            Some(query),
        )
    }

    /// `POST /api/private_api/orders/{order_id}/items/`
    pub fn order_items_create(
        &self,
        order_id: i64,
        body: &OrderItemWritable,
    ) -> Result<OrderItem, ApiError> {
        self.client
            .post(&format!("/api/private_api/orders/{order_id}/items/"), body)
    }

    /// `GET /api/private_api/orders/{order_id}/items/{id}/`
    pub fn order_items_retrieve(&self, order_id: i64, id: i64) -> Result<OrderItem, ApiError> {
        self.client.get(
            &format!("/api/private_api/orders/{order_id}/items/{id}/"),
            None::<&()>,
        )
    }

    /// `PUT /api/private_api/orders/{order_id}/items/{id}/`
    pub fn order_items_update(
        &self,
        order_id: i64,
        id: i64,
        body: &OrderItemWritable,
    ) -> Result<OrderItem, ApiError> {
        self.client.put(
            &format!("/api/private_api/orders/{order_id}/items/{id}/"),
            body,
        )
    }

    /// `PATCH /api/private_api/orders/{order_id}/items/{id}/`
    pub fn order_items_partial_update(
        &self,
        order_id: i64,
        id: i64,
        body: &PatchedOrderItem,
    ) -> Result<OrderItem, ApiError> {
        self.client.patch(
            &format!("/api/private_api/orders/{order_id}/items/{id}/"),
            body,
        )
    }

    /// `DELETE /api/private_api/orders/{order_id}/items/{id}/`
    pub fn order_items_destroy(&self, order_id: i64, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/private_api/orders/{order_id}/items/{id}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_category_query_carries_filter_and_list_params() {
        let list = ListQuery {
            ordering: Some("-created_at".into()),
            page: Some(3),
            search: None,
        };
        let query = ByCategoryQuery {
            category_id: 3,
            ordering: list.ordering.as_deref(),
            page: list.page,
            search: list.search.as_deref(),
        };
        let value = serde_json::to_value(&query).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["category_id"], 3);
        assert_eq!(obj["ordering"], "-created_at");
        assert_eq!(obj["page"], 3);
        assert!(!obj.contains_key("search"));
    }

    #[test]
    fn by_status_query_uses_wire_value() {
        let query = ByStatusQuery {
            status: Some(StatusEnum::Shipped.as_str()),
            ordering: None,
            page: None,
            search: None,
        };
        let value = serde_json::to_value(&query).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["status"], "shipped");
    }
}
