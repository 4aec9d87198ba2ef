use serde::{Deserialize, Serialize};

/// A post author, as embedded in post payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// RFC 3339 registration timestamp.
    pub date_joined: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_roundtrip() {
        let user = User {
            id: 1,
            username: "alice".into(),
            email: Some("alice@example.com".into()),
            first_name: Some("Alice".into()),
            last_name: None,
            date_joined: "2026-01-15T09:30:00Z".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn user_minimal_json() {
        // Optional fields may be absent entirely.
        let user: User = serde_json::from_str(
            r#"{"id": 2, "username": "bob", "date_joined": "2026-02-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.email, None);
        assert_eq!(user.first_name, None);
    }
}
