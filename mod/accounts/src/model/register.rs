use serde::{Deserialize, Serialize};

/// Registration request body.
///
/// The backend validates that `password` and `password_confirm` match;
/// everything beyond the credentials is optional profile seed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreate {
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub password: String,

    pub password_confirm: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// ISO 8601 date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter_subscription: Option<bool>,
}

impl UserCreate {
    /// Minimal registration body: credentials only.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: None,
            password: password.into(),
            password_confirm: password_confirm.into(),
            first_name: None,
            last_name: None,
            bio: None,
            avatar: None,
            phone: None,
            date_of_birth: None,
            website: None,
            location: None,
            email_notifications: None,
            newsletter_subscription: None,
        }
    }
}
