// API error taxonomy
//
// Only two things can go wrong: the addressed entity does not exist, or the
// request body could not be bound.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with an empty body
    #[error("resource not found")]
    NotFound,

    /// 400 with a `ValidationProblem` body
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// Body returned with a 400
#[derive(Debug, Serialize)]
pub struct ValidationProblem {
    pub title: &'static str,
    pub status: u16,
    pub errors: Vec<String>,
}

impl ValidationProblem {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            title: "One or more validation errors occurred.",
            status: StatusCode::BAD_REQUEST.as_u16(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationProblem::new(vec![detail])),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidBody("missing field `price`".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_problem_shape() {
        let problem = ValidationProblem::new(vec!["missing field `price`".to_string()]);
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["status"], 400);
        assert_eq!(json["errors"][0], "missing field `price`");
        assert!(json["title"].is_string());
    }
}
