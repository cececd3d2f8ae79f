//! REST client errors.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by every backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached or the connection failed mid-request.
    #[error("could not reach the backend")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("the backend did not respond in time")]
    Timeout,

    /// The requested resource does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The backend answered with a body that could not be understood.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = extract_message(status, body);

        if status == StatusCode::NOT_FOUND {
            Self::NotFound { message }
        } else {
            Self::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// HTTP status equivalent of this error, when one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(source) => source.status().map(|status| status.as_u16()),
            Self::Timeout | Self::UnexpectedResponse(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message supplied by the backend, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Rejected { message, .. } => Some(message.as_str()),
            Self::Transport(_) | Self::Timeout | Self::UnexpectedResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::UnexpectedResponse(error.to_string())
        } else {
            Self::Transport(error)
        }
    }
}

/// Pull a human readable message out of an error body.
///
/// The backend sends either `{"message": ...}`, `{"error": ...}`, plain text,
/// or nothing at all.
fn extract_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "error"].into_iter().find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(ToString::to_string)
        })
    });

    if let Some(message) = from_json {
        return message;
    }

    let body = body.trim();

    if !body.is_empty() && !body.starts_with('{') {
        return body.to_string();
    }

    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, "");

        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.backend_message(), Some("Not Found"));
    }

    #[test]
    fn message_field_is_preferred() {
        let error = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"Insufficient stock","error":"bad request"}"#,
        );

        assert_eq!(error.status(), Some(400));
        assert_eq!(error.backend_message(), Some("Insufficient stock"));
    }

    #[test]
    fn error_field_is_used_when_message_is_blank() {
        let error = ApiError::from_status(
            StatusCode::CONFLICT,
            r#"{"message":"  ","error":"Cart locked"}"#,
        );

        assert_eq!(error.backend_message(), Some("Cart locked"));
    }

    #[test]
    fn plain_text_body_is_kept() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, " Shopping cart is empty \n");

        assert_eq!(error.backend_message(), Some("Shopping cart is empty"));
    }

    #[test]
    fn empty_body_falls_back_to_reason_phrase() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, "");

        assert_eq!(
            error.to_string(),
            "request rejected with status 400: Bad Request"
        );
    }

    #[test]
    fn timeout_has_no_status() {
        assert_eq!(ApiError::Timeout.status(), None);
        assert_eq!(ApiError::Timeout.backend_message(), None);
    }
}
