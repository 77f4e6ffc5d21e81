use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use vas_core::VasError;

/// JSON body extractor that rejects with [`VasError::decoding_error`]
///
/// Behaves like [`axum::Json`] otherwise, including the content-type
/// check. The axum rejection text is kept as the internal diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = VasError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(VasError::decoding_error(anyhow::anyhow!(rejection.body_text()))),
        }
    }
}

/// Unwrap a required request field or fail with `MISSING_FIELD`
pub fn require_field<T>(name: &str, value: Option<T>) -> Result<T, VasError> {
    value.ok_or_else(|| VasError::missing_field(name))
}
