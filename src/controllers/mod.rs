// HTTP Controllers
//
// Map HTTP verbs on /api/books and /api/orders onto service calls.

pub mod books;
pub mod orders;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose every rejection becomes a 400 `ApiError::InvalidBody`
///
/// Covers malformed JSON, missing or null fields, wrong types, and a missing
/// `Content-Type: application/json` header.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        Ok(ValidatedJson(value))
    }
}
