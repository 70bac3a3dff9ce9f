//! Maps core errors onto HTTP responses with a `PublicError` JSON body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_core::error::GameError;
use tower_core::gateway::GatewayError;

#[derive(Debug)]
pub struct ApiError(pub GameError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GameError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GameError::UnknownWord { .. } | GameError::WordAlreadyUsed { .. } => {
                StatusCode::BAD_REQUEST
            }
            GameError::NoShufflesLeft => StatusCode::FORBIDDEN,
            GameError::WordResolution { .. } => StatusCode::BAD_GATEWAY,
            GameError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err.into())
    }
}

/// Body decode failures keep axum's message but use the `PublicError` shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(GameError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0.to_public())).into_response()
    }
}
