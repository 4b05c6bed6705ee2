//! Client error types
//!
//! Every gateway call ends in one of these. Controllers turn them into the
//! status line shown to the user; nothing here retries.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network unreachable, timed out or aborted
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        /// Parsed JSON body, the raw text when it was not JSON, or null when empty
        detail: serde_json::Value,
    },

    /// 2xx response whose body does not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Client-side precondition not met
    #[error("{0}")]
    Validation(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file access while preparing an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build a server failure from the status and the response body
    pub fn server(status: StatusCode, detail: serde_json::Value) -> Self {
        let message = server_message(status, &detail);
        Self::Server {
            status: status.as_u16(),
            message,
            detail,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status for server failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human readable text for the status line
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Prefer the backend's `detail` / `message` field, else a generic line
fn server_message(status: StatusCode, detail: &serde_json::Value) -> String {
    let field = detail
        .get("detail")
        .or_else(|| detail.get("message"))
        .filter(|v| !v.is_null());

    match field {
        Some(serde_json::Value::String(text)) if !text.is_empty() => text.clone(),
        Some(serde_json::Value::String(_)) | None => format!(
            "Request failed: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )
        .trim_end()
        .to_string(),
        // FastAPI validation errors put a list here
        Some(other) => other.to_string(),
    }
}

/// Response body as read off the wire
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Parse as JSON only when the text is non-empty and well-formed
    pub(crate) fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    fn into_detail(self) -> serde_json::Value {
        match self {
            Self::Empty => serde_json::Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => serde_json::Value::String(text),
        }
    }
}

/// Turn a status and body text into a typed result
pub(crate) fn interpret_response<T: DeserializeOwned>(
    status: StatusCode,
    text: &str,
) -> ClientResult<T> {
    let body = ResponseBody::parse(text);

    if !status.is_success() {
        return Err(ClientError::server(status, body.into_detail()));
    }

    match body {
        ResponseBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
        }
        ResponseBody::Empty => Err(ClientError::Decode("empty response body".into())),
        ResponseBody::Text(_) => Err(ClientError::Decode("response body is not JSON".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rows {
        rows: u64,
    }

    #[test]
    fn test_success_json_is_decoded() {
        let rows: Rows = interpret_response(StatusCode::OK, r#"{"rows": 500}"#).unwrap();
        assert_eq!(rows, Rows { rows: 500 });
    }

    #[test]
    fn test_success_with_wrong_shape_is_decode_failure() {
        let err = interpret_response::<Rows>(StatusCode::OK, r#"{"count": 1}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_success_with_empty_or_text_body_is_decode_failure() {
        let err = interpret_response::<Rows>(StatusCode::OK, "").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let err = interpret_response::<Rows>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_server_failure_uses_detail_field() {
        let err = interpret_response::<Rows>(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Customer not found"}"#,
        )
        .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Customer not found");
        match err {
            ClientError::Server { detail, .. } => {
                assert_eq!(detail["detail"], "Customer not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_failure_falls_back_to_message_field() {
        let err = interpret_response::<Rows>(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Please upload a .csv file"}"#,
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Please upload a .csv file");
    }

    #[test]
    fn test_server_failure_with_raw_text_keeps_text_as_detail() {
        let err =
            interpret_response::<Rows>(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();

        assert_eq!(err.user_message(), "Request failed: 502 Bad Gateway");
        match err {
            ClientError::Server { detail, .. } => {
                assert_eq!(detail, serde_json::Value::String("upstream down".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_failure_with_list_detail() {
        let err = interpret_response::<Rows>(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"msg": "field required"}]}"#,
        )
        .unwrap_err();
        assert!(err.user_message().contains("field required"));
    }

    #[test]
    fn test_server_failure_with_empty_body() {
        let err = interpret_response::<Rows>(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert_eq!(err.user_message(), "Request failed: 500 Internal Server Error");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ClientError::validation("Please choose a CSV file first.");
        assert_eq!(err.user_message(), "Please choose a CSV file first.");
        assert!(err.status().is_none());
    }
}
