//! Accounts module — customer identity: profiles, registration, JWT refresh.
//!
//! Mounted at `/api/users/` on the backend. Profile and directory endpoints
//! require a bearer token; registration and token refresh do not.
//!
//! [`AccountsApi`] performs the actual calls.

pub mod api;
pub mod model;

pub use api::*;
pub use model::*;
