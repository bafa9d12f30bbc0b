use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::customer::CustomerError;

// ============================================================================
// HTTP mapping for domain errors
// ============================================================================
//
// NotFound  → 404
// Duplicate → 409
// Store     → 500 (cause logged, generic body)
//
// ============================================================================

impl ResponseError for CustomerError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomerError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomerError::Duplicate(_) => StatusCode::CONFLICT,
            CustomerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            CustomerError::Store(e) => {
                tracing::error!(error = %e, "Customer store failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
