use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Callers should match on [`ApiError::error_code`] when they need to branch
/// on a failure kind. Codes never change; messages may be reworded.
pub mod error_code {
    pub const CONFIG: &str = "CONFIG";
    pub const TRANSPORT: &str = "TRANSPORT";
    pub const DECODE: &str = "DECODE";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
}

// ── ApiError ────────────────────────────────────────────────────────

/// Unified client error type used by every module API.
///
/// Response statuses map onto variants via [`ApiError::from_status`]; the
/// transport-level variants (`Config`, `Transport`, `Decode`) never carry a
/// status because no response was produced or its body was unusable.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client is misconfigured (empty server URL, missing context).
    #[error("{0}")]
    Config(String),

    /// The server could not be reached (DNS, TCP, TLS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),

    /// Request data was rejected. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials. HTTP 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but lacks permission. HTTP 403.
    #[error("{0}")]
    PermissionDenied(String),

    /// Resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate key / resource already exists. HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// Any other non-success status, including 5xx.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Map a non-success response status to the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ApiError::Validation(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::PermissionDenied(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// The originating HTTP status, if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Config(_) | ApiError::Transport(_) | ApiError::Decode(_) => None,
            ApiError::Validation(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::PermissionDenied(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::Server { status, .. } => Some(*status),
        }
    }

    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Config(_) => error_code::CONFIG,
            ApiError::Transport(_) => error_code::TRANSPORT,
            ApiError::Decode(_) => error_code::DECODE,
            ApiError::Validation(_) => error_code::VALIDATION_FAILED,
            ApiError::Unauthorized(_) => error_code::UNAUTHENTICATED,
            ApiError::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            ApiError::NotFound(_) => error_code::NOT_FOUND,
            ApiError::Conflict(_) => error_code::ALREADY_EXISTS,
            ApiError::Server { .. } => error_code::SERVER_ERROR,
        }
    }
}
