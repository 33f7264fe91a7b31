//! Request extractors that enforce input contracts before a handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use campus_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then checked with its
/// [`Validate`] rules.
///
/// Malformed JSON, a wrong content type or a missing required field is
/// rejected as `400 BAD_REQUEST`; a field that parses but breaks a rule is
/// rejected as `400 VALIDATION_ERROR`. Neither reaches the repositories.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))?;

        Ok(Self(value))
    }
}
