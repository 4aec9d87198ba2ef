//! Private module — commerce administration: categories, products, orders.
//!
//! Mounted at `/api/private_api/` on the backend; every call requires a bearer
//! token. Besides plain CRUD each resource carries a handful of filter
//! actions (`active/`, `by_category/`, `low_stock/`, `by_status/`,
//! `{id}/items/`) and orders can be cancelled.
//!
//! [`PrivateApi`] performs the actual calls.

pub mod api;
pub mod model;

pub use api::*;
pub use model::*;
