//! Public module — storefront content: blog posts and their authors.
//!
//! Mounted at `/api/public_api/` on the backend; readable without credentials.
//!
//! # Types
//!
//! - [`Post`] / [`PostWritable`] / [`PatchedPost`] — the post resource and its
//!   request bodies
//! - [`User`] — post author as embedded in post payloads
//! - [`PaginatedPostList`] — one page of posts
//! - `Posts*Data` / `Posts*Response` — one request/response shape pair per
//!   posts endpoint
//!
//! [`PublicApi`] performs the actual calls.

pub mod api;
pub mod model;

pub use api::*;
pub use model::*;
