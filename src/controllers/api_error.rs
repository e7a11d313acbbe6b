use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::PlannerError;

/// HTTP face of a [`PlannerError`].
///
/// Handlers return `Result<_, ApiError>`; `?` lifts planner errors and body
/// rejections into the `{"error", "message"}` JSON body.
#[derive(Debug)]
pub struct ApiError(pub PlannerError);

impl ApiError {
    /// Stable machine-readable tag used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self.0 {
            PlannerError::InvalidInput(_) => "invalid_input",
            PlannerError::Precondition(_) => "precondition_failed",
            PlannerError::NotFound { .. } => "not_found",
            PlannerError::DivisionByZero(_) => "division_by_zero",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            PlannerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlannerError::Precondition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlannerError::NotFound { .. } => StatusCode::NOT_FOUND,
            PlannerError::DivisionByZero(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

// Malformed or mistyped request bodies are bad input like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PlannerError::invalid(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.kind(),
            "message": self.0.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
