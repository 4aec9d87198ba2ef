//! Single import surface over the three OpenShop API modules.
//!
//! Declarations only — no logic, no state, no I/O. Everything here is a
//! re-export; removing a type from a module crate breaks this crate at
//! compile time rather than at a caller's runtime.
//!
//! # Namespaces
//!
//! The three module crates stay reachable under stable local names, so any
//! module member — aliased below or not — can always be spelled via its
//! namespace:
//!
//! - [`public`] — storefront content (posts, authors)
//! - [`private`] — commerce administration (categories, products, orders)
//! - [`accounts`] — customer identity (profiles, registration, tokens)
//!
//! # Flattened aliases
//!
//! The names callers reach for constantly are additionally lifted to the
//! crate root, grouped by concern below. The flat list is curated, not
//! exhaustive: request-body variants and the per-resource page aliases of
//! the private and accounts modules stay namespace-only. Adding an alias
//! later is additive and breaks nobody.
//!
//! # Usage
//!
//! ```ignore
//! use openshop_api::{Client, ListQuery, Post, PublicApi};
//!
//! let client = Client::new("https://shop.example.com")?;
//! let api = PublicApi::new(client);
//! let page = api.posts_list(&Default::default())?;
//! let first: Option<&Post> = page.results.first();
//! ```

// ── Namespaces ──

pub use openshop_accounts as accounts;
pub use openshop_private as private;
pub use openshop_public as public;

// ── Storefront content ──

pub use openshop_public::{PaginatedPostList, Post, PostWritable, User};

pub use openshop_public::{
    PostsByAuthorData, PostsByAuthorResponse, PostsCreateData, PostsCreateResponse,
    PostsDestroyData, PostsDestroyResponse, PostsListData, PostsListResponse,
    PostsPartialUpdateData, PostsPartialUpdateResponse, PostsPublishData, PostsPublishResponse,
    PostsPublishedData, PostsPublishedResponse, PostsRetrieveData, PostsRetrieveResponse,
    PostsUnpublishData, PostsUnpublishResponse, PostsUpdateData, PostsUpdateResponse,
};

// ── Commerce ──

pub use openshop_private::{Category, Order, OrderItem, Product, StatusEnum};

// ── Identity ──

pub use openshop_accounts::{
    PatchedUserProfile, TokenRefresh, TokenRefreshWritable, UserCreate, UserProfile,
};

// ── Plumbing ──

pub use openshop_accounts::AccountsApi;
pub use openshop_client::Client;
pub use openshop_core::{ApiError, ListQuery, Page};
pub use openshop_private::PrivateApi;
pub use openshop_public::PublicApi;
