use openshop_core::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Blocking JSON client for one OpenShop server.
///
/// All request paths are absolute (`/api/public_api/posts/`) and keep the
/// backend's trailing slash. The `Authorization: Bearer` header is only sent
/// when a token is set, so anonymous access to public endpoints stays
/// anonymous.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    /// Create a client for the given base URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ApiError::Config("server URL is empty".into()));
        }
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or clear the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'), "paths must be absolute: {path}");
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// GET `path`, optionally with query parameters.
    pub fn get<Q, T>(&self, path: &str, query: Option<&Q>) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.authed(self.http.get(self.url(path)));
        if let Some(q) = query {
            req = req.query(q);
        }
        self.run("GET", path, req)
    }

    /// POST `body` as JSON to `path`.
    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.authed(self.http.post(self.url(path))).json(body);
        self.run("POST", path, req)
    }

    /// POST to `path` with no body (custom actions: publish, cancel, ...).
    pub fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let req = self.authed(self.http.post(self.url(path)));
        self.run("POST", path, req)
    }

    /// PUT `body` as JSON to `path`.
    pub fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.authed(self.http.put(self.url(path))).json(body);
        self.run("PUT", path, req)
    }

    /// PATCH `body` as JSON to `path`.
    pub fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.authed(self.http.patch(self.url(path))).json(body);
        self.run("PATCH", path, req)
    }

    /// DELETE `path`. The backend answers 204 with an empty body.
    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.authed(self.http.delete(self.url(path)));
        let resp = req.send().map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        debug!(path, %status, "DELETE");
        if !status.is_success() {
            warn!(path, %status, "DELETE failed");
            return Err(error_from(resp));
        }
        Ok(())
    }

    fn run<T>(
        &self,
        method: &str,
        path: &str,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        debug!(method, path, %status, "request");
        if !status.is_success() {
            warn!(method, path, %status, "request failed");
            return Err(error_from(resp));
        }
        resp.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Build an [`ApiError`] from a non-success response.
///
/// The backend's error bodies are JSON objects carrying the message under
/// `detail` (or occasionally `message`/`error`); fall back to the raw text.
fn error_from(resp: reqwest::blocking::Response) -> ApiError {
    let status = resp.status().as_u16();
    let text = resp.text().unwrap_or_default();
    let message = extract_message(&text)
        .unwrap_or_else(|| {
            if text.is_empty() {
                format!("request failed with status {status}")
            } else {
                text
            }
        });
    ApiError::from_status(status, message)
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "message", "error"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/public_api/posts/"),
            "http://localhost:8000/api/public_api/posts/"
        );

        let client = Client::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.url("/api/public_api/posts/7/"),
            "http://localhost:8000/api/public_api/posts/7/"
        );
    }

    #[test]
    fn empty_base_url_is_config_error() {
        let err = Client::new("").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn token_state() {
        let mut client = Client::new("http://x").unwrap();
        assert_eq!(client.token(), None);

        client = client.with_token("abc");
        assert_eq!(client.token(), Some("abc"));

        client.set_token(Some("def".into()));
        assert_eq!(client.token(), Some("def"));

        client.set_token(None);
        assert_eq!(client.token(), None);
    }

    #[test]
    fn extract_message_reads_detail() {
        assert_eq!(
            extract_message(r#"{"detail": "Not found."}"#),
            Some("Not found.".to_string())
        );
        assert_eq!(
            extract_message(r#"{"message": "no access"}"#),
            Some("no access".to_string())
        );
        assert_eq!(
            extract_message(r#"{"error": "bad input"}"#),
            Some("bad input".to_string())
        );
    }

    #[test]
    fn extract_message_rejects_non_json() {
        assert_eq!(extract_message("<html>gateway timeout</html>"), None);
        assert_eq!(extract_message(""), None);
        // JSON, but no known message key.
        assert_eq!(extract_message(r#"{"code": "NOT_FOUND"}"#), None);
    }
}
