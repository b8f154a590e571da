use super::state::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use enlist_derive::api_model;
use enlist_domain::constants::MSG_SERVER_ERROR;
use std::borrow::Cow;

/// Flat JSON error body returned by every failing endpoint.
#[api_model]
pub struct ErrorResponse {
    /// Human-readable reason
    pub error: String,
}

/// Error surfaced at the HTTP boundary.
///
/// Only `message` reaches the client; `context` stays server-side.
#[enlist_derive::enlist_error]
pub enum ApiError {
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    /// A 500 with the generic client message.
    #[must_use]
    pub fn server_error(context: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal { message: MSG_SERVER_ERROR.into(), context: Some(context.into()) }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        tracing::error!(error = %err, "API state lookup failed");
        Self::server_error(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (Self::BadRequest { message, .. } | Self::Internal { message, .. }) = self;
        (status, Json(ErrorResponse { error: message.into_owned() })).into_response()
    }
}
