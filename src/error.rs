use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid `{param}` parameter: expected an integer, got `{value}`")]
    Validation { param: &'static str, value: String },

    #[error("`{param}` is out of range")]
    OutOfRange { param: &'static str },

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn invalid_param(param: &'static str, value: impl Into<String>) -> Self {
        Self::Validation {
            param,
            value: value.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation { param, value } => {
                tracing::debug!(param = %param, value = %value, "rejected duration parameter");
            }
            Self::OutOfRange { param } => tracing::debug!(param = %param, "duration out of range"),
            Self::Signing(e) => tracing::error!(error = %e, "token signing failed"),
        }

        (self.status(), self.to_string()).into_response()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("malformed token: {0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("JWT_SECRET is set to the well-known default `{0}`; choose a real secret")]
    InsecureSecret(&'static str),

    #[error("invalid LISTEN_ADDR `{value}`: {source}")]
    InvalidListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}
