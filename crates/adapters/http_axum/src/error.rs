//! HTTP error response mapping.

use std::error::Error as _;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use squadup_domain::error::SquadUpError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SquadUpError`] to an HTTP response with appropriate status code.
pub struct ApiError(SquadUpError);

impl From<SquadUpError> for ApiError {
    fn from(err: SquadUpError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SquadUpError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SquadUpError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SquadUpError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadup_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(SquadUpError::from(NotFoundError {
            entity: "Ad",
            id: "x".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        let err = ApiError::from(SquadUpError::from(ValidationError::InvalidTimeOfDay(
            "9".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_storage_to_500() {
        let err = ApiError::from(SquadUpError::Storage("disk on fire".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
