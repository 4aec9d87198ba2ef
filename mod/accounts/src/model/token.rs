use serde::{Deserialize, Serialize};

/// JWT refresh response: a fresh access token plus the (possibly rotated)
/// refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRefresh {
    pub access: String,

    pub refresh: String,
}

/// JWT refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRefreshWritable {
    pub refresh: String,
}
