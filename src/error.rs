use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::request::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("Garden '{0}' not found.")]
    GardenNotFound(String),
    #[error("Element '{element}' not found in garden '{garden}'.")]
    ElementNotFound { garden: String, element: String },
    #[error("Plant '{0}' not found.")]
    PlantNotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("Element '{element}' would overlap {} other element(s).", .colliding.len())]
    Collision {
        element: String,
        colliding: Vec<String>,
    },
    #[error("Malformed element: {0}")]
    MalformedElement(#[from] serde_json::Error),
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::GardenNotFound(_) | Self::ElementNotFound { .. } | Self::PlantNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Validation(_) | Self::MalformedElement(_) => StatusCode::BAD_REQUEST,
            Self::Collision { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// JSON extractor config that answers malformed bodies with `400 { "error": ... }`.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}
