//! Error type shared by every remote operation.

use thiserror::Error;

/// Failure modes of a Taskwell API call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, fetch aborted, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the raw
    /// response body text when the server sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not decode into the expected shape.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint path did not form a valid URL.
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ApiError {
    /// Build a status error, falling back to `fallback` when the body is empty.
    pub fn status(status: reqwest::StatusCode, body: String, fallback: &str) -> Self {
        let message = if body.trim().is_empty() {
            fallback.to_string()
        } else {
            body
        };
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// 401: the session is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// 403: the session exists but the resource belongs to someone else.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Status { status: 403, .. })
    }

    /// 404: the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Result type alias for Taskwell operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_body_text() {
        let err = ApiError::status(
            reqwest::StatusCode::BAD_REQUEST,
            "Title is required".into(),
            "Task creation failed",
        );
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn status_error_falls_back_on_empty_body() {
        let err = ApiError::status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "  ".into(),
            "Task creation failed",
        );
        assert_eq!(err.to_string(), "Task creation failed");
    }

    #[test]
    fn predicates_match_their_statuses() {
        let unauthorized = ApiError::status(reqwest::StatusCode::UNAUTHORIZED, String::new(), "x");
        let forbidden = ApiError::status(reqwest::StatusCode::FORBIDDEN, String::new(), "x");
        let missing = ApiError::status(reqwest::StatusCode::NOT_FOUND, String::new(), "x");
        assert!(unauthorized.is_unauthorized() && !unauthorized.is_forbidden());
        assert!(forbidden.is_forbidden() && !forbidden.is_not_found());
        assert!(missing.is_not_found() && !missing.is_unauthorized());
    }
}
