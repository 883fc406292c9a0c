use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Malformed JSON in request body: {0}")]
    MalformedJsonError(String),
}

// Custom Error type
#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

// Implement ResponseError for CustomError
impl ResponseError for CustomError {
    fn error_response(&self) -> HttpResponse {
        let api_error = ApiError {
            code: match self {
                CustomError::MalformedJsonError(_) => 400,
            },
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        match self {
            CustomError::MalformedJsonError(_) => HttpResponse::BadRequest().json(response),
        }
    }
}
