//! Request extractors shared by the domain routers

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON body that has passed its `validator` rules.
///
/// A body that is not JSON, lacks a field or breaks a rule is rejected with
/// 400 `VALIDATION_ERROR`, including a wrong or missing content type.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub struct ValidatedJsonRejection(Error);

impl From<JsonRejection> for ValidatedJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::Validation(rejection.body_text()))
    }
}

impl From<ValidationErrors> for ValidatedJsonRejection {
    fn from(errors: ValidationErrors) -> Self {
        Self(Error::Validation(format!("Validation failed: {errors}")))
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
