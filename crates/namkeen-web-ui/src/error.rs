use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use namkeen_core::fmt::error_chain;
use serde::Serialize;
use snafu::Snafu;
use tracing::{debug, warn};

use crate::LOG_TARGET;
use crate::routes::AppJson;

#[derive(Debug, Snafu)]
pub enum RequestError {
    /// API-side rejection. One fixed message for every failure mode;
    /// callers can't tell absent from tampered from expired.
    #[snafu(visibility(pub(crate)))]
    AuthRequired,
    #[snafu(visibility(pub(crate)))]
    #[snafu(display("InternalServerError: {msg}"))]
    InternalServerError { msg: &'static str },
}

pub type RequestResult<T> = std::result::Result<T, RequestError>;

// How we want user error responses to be serialized
#[derive(Serialize)]
pub struct UserErrorResponse {
    pub message: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        debug!(
            target: LOG_TARGET,
            err = %error_chain(&self),
            "Request Error"
        );

        let (status_code, message) = match self {
            RequestError::AuthRequired => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_owned(),
            ),
            err => {
                warn!(
                    target: LOG_TARGET,
                    err = %error_chain(&err),
                    "Unexpected Request Error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Service Error".to_owned(),
                )
            }
        };

        (status_code, AppJson(UserErrorResponse { message })).into_response()
    }
}
