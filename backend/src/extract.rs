//! Request extractors that validate before the handler runs
//!
//! Deserialization failures and `validator` rule violations both surface as
//! a 400 `VALIDATION_ERROR`, never reaching the model or a provider.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, rejection::QueryRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use shared::first_validation_error;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `Validate` rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// Query string that has passed its `Validate` rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

fn check<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(|errors| {
        let (field, message) = first_validation_error(&errors);
        AppError::Validation { field, message }
    })
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
        check(&value)?;
        Ok(ValidatedJson(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::ValidationError(rejection.body_text()))?;
        check(&value)?;
        Ok(ValidatedQuery(value))
    }
}
