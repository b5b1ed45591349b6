use actix_web::HttpResponse;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    JWT(#[from] jsonwebtoken::errors::Error),

    #[error("Stripe error: {0}")]
    Stripe(#[from] stripe::StripeError),

    // === APPLICATION ERRORS ===
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "success": false, "message": err_msg })
            } else {
                serde_json::json!({ "success": false, "message": "Internal server error" })
            }
        };

        let to_json = |err_msg: &str| serde_json::json!({ "success": false, "message": err_msg });

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::JWT(error) => {
                log::error!("JWT error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Stripe(error) => {
                log::error!("Stripe error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthorized(_) => {
                HttpResponse::Unauthorized().json(to_json(&self.to_string()))
            }
            AppError::Forbidden(_) => HttpResponse::Forbidden().json(to_json(&self.to_string())),
            AppError::NotFound(_) => HttpResponse::NotFound().json(to_json(&self.to_string())),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(to_json(&self.to_string())),
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("Tutor and date are required".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Tutor and date are required");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Booking not found".to_string());
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_and_forbidden_statuses() {
        let unauth = AppError::Unauthorized("No authorization token provided".to_string());
        assert_eq!(unauth.error_response().status(), StatusCode::UNAUTHORIZED);

        let forbidden = AppError::Forbidden("Access denied. Admin only.".to_string());
        assert_eq!(forbidden.error_response().status(), StatusCode::FORBIDDEN);
    }
}
