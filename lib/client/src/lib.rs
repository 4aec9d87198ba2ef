//! Blocking HTTP transport for the OpenShop backend.
//!
//! [`Client`] carries the base URL and an optional bearer token; the module
//! API types (`PublicApi`, `PrivateApi`, `AccountsApi`) layer typed endpoint
//! operations on top of it.

pub mod http;

pub use http::Client;
