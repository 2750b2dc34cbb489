use axum::{http::StatusCode, Json};
use std::fmt;

pub const FALLBACK_FETCH_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Everything that can go wrong fetching stats. The dashboard only ever
/// shows the `Display` text.
#[derive(Debug)]
pub enum FetchError {
    Transport(String),
    Status { status: u16, message: String },
    Decode(String),
}

impl FetchError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_FETCH_MESSAGE.to_string());
        Self::Status { status, message }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) | Self::Decode(message) => f.write_str(message),
            Self::Status { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_server_message_verbatim() {
        let err = FetchError::status(400, Some("bad year".to_string()));
        assert_eq!(err.to_string(), "bad year");
    }

    #[test]
    fn status_error_without_message_uses_fallback() {
        assert_eq!(FetchError::status(500, None).to_string(), FALLBACK_FETCH_MESSAGE);
        assert_eq!(
            FetchError::status(500, Some(String::new())).to_string(),
            FALLBACK_FETCH_MESSAGE
        );
    }

    #[test]
    fn decode_error_keeps_parser_message() {
        let err: FetchError = serde_json::from_str::<Vec<u32>>("not json").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }
}
