use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// `Json<T>` whose rejections (bad syntax, missing fields, wrong content
/// type) come back as 400 `{"error": ...}` envelopes.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(JsonApiError::bad_request(rejection.body_text())),
        }
    }
}

/// `Query<T>` with the same 400 `{"error": ...}` rejection as [`JsonBody`].
pub struct JsonQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(JsonQuery(value)),
            Err(rejection) => Err(JsonApiError::bad_request(rejection.body_text())),
        }
    }
}
