use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::shared::ErrorEnvelope;
use crate::db::StoreError;
use crate::services::validation::ValidationErrors;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("invalid category_id: {0}")]
    UnknownCategory(i64),

    #[error("no videos found")]
    NoVideos,

    #[error("no categories found")]
    NoCategories,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            AppError::NoVideos | AppError::NoCategories => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::Store(e) => {
                log::error!("Store failure: {}", e);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(ErrorEnvelope::new(status, message))
    }
}
