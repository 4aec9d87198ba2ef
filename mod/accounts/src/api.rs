//! Typed operations for the accounts resources.

use openshop_client::Client;
use openshop_core::{ApiError, ListQuery};

use crate::model::{
    PaginatedUserProfileList, PatchedUserProfile, TokenRefresh, TokenRefreshWritable, UserCreate,
    UserProfile,
};

/// Typed client for the accounts module.
#[derive(Debug, Clone)]
pub struct AccountsApi {
    client: Client,
}

impl AccountsApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// `GET /api/users/profile/` — the authenticated user's own profile.
    pub fn profile_retrieve(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/api/users/profile/", None::<&()>)
    }

    /// `PUT /api/users/profile/`
    pub fn profile_update(&self, body: &UserProfile) -> Result<UserProfile, ApiError> {
        self.client.put("/api/users/profile/", body)
    }

    /// `PATCH /api/users/profile/`
    pub fn profile_partial_update(
        &self,
        body: &PatchedUserProfile,
    ) -> Result<UserProfile, ApiError> {
        self.client.patch("/api/users/profile/", body)
    }

    /// `GET /api/users/list/` — the user directory.
    pub fn users_list(&self, query: &ListQuery) -> Result<PaginatedUserProfileList, ApiError> {
        self.client.get("/api/users/list/", Some(query))
    }

    /// `POST /api/users/register/` — no token required.
    pub fn register(&self, body: &UserCreate) -> Result<UserProfile, ApiError> {
        self.client.post("/api/users/register/", body)
    }

    /// `POST /api/users/token/refresh/` — exchange a refresh token for a
    /// fresh access token. No bearer token required.
    pub fn token_refresh(&self, body: &TokenRefreshWritable) -> Result<TokenRefresh, ApiError> {
        self.client.post("/api/users/token/refresh/", body)
    }
}
