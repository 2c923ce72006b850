use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use model::errors::ReportError;

pub struct ApiError(ReportError);

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ReportError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            err @ ReportError::Internal(_) => {
                error!("Report failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
