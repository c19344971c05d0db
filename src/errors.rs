use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// HTTP boundary error. Maps the domain failure taxonomy onto status codes:
/// validation → 400, not-found → 404, everything collaborator-caused → 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid order: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Order saved but event publication failed: {0}")]
    Publish(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound => AppError::NotFound,
            DomainError::Persistence(msg) => AppError::Internal(msg),
            DomainError::Publish(msg) => AppError::Publish(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
            // The order is durably saved at this point; the body says so
            // explicitly so operators can reconcile the lost event.
            AppError::Publish(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Order saved but event publication failed"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn validation_returns_400() {
        let resp = AppError::Validation("order has no items".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn publish_error_returns_500() {
        let err = AppError::Publish("broker unavailable".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn validation_display_carries_the_rule_message() {
        assert_eq!(
            AppError::Validation("order has no items".to_string()).to_string(),
            "Invalid order: order has no items"
        );
    }

    #[test]
    fn domain_validation_maps_to_app_validation() {
        let app_err: AppError = DomainError::Validation("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(_)));
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_persistence_maps_to_app_internal() {
        let app_err: AppError = DomainError::Persistence("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }

    #[test]
    fn domain_publish_stays_distinguishable() {
        let app_err: AppError = DomainError::Publish("lost".to_string()).into();
        assert!(matches!(app_err, AppError::Publish(_)));
    }
}
