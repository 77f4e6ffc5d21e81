use axum::Json;
use serde::{Deserialize, Serialize};
use vas_core::VasError;

use crate::extract::{JsonBody, require_field};

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub message: String,
}

/// Return the posted message
///
/// Fails with `JSON_DECODING_ERROR` on a malformed body, `MISSING_FIELD`
/// without `message`, and `INVALID_DATA` when `message` is blank.
pub async fn echo_handler(JsonBody(request): JsonBody<EchoRequest>) -> Result<Json<EchoResponse>, VasError> {
    let message = require_field("message", request.message)?;

    if message.trim().is_empty() {
        return Err(VasError::invalid_data(
            "message",
            anyhow::anyhow!("message is blank ({} bytes of whitespace)", message.len()),
        ));
    }

    tracing::debug!(bytes = message.len(), "echoing message");

    Ok(Json(EchoResponse { message }))
}
