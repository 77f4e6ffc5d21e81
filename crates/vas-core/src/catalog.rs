//! Constructors for every recognized failure condition
//!
//! Each constructor fixes the id, name and status for its condition. Only
//! the description and the internal diagnostic depend on the arguments.
//! None of them validate their input.

use http::{Method, StatusCode};
use itertools::Itertools;

use crate::{ErrorId, VasError};

const TOO_MANY_REQUESTS: &str = "You have been sending too many requests recently!";

fn wait_description(cooldown_secs: u64) -> String {
    format!("Please wait {cooldown_secs} seconds before trying again")
}

impl VasError {
    /// Client at `ip` exceeded a rate limit
    pub fn rate_limited(ip: &str) -> Self {
        Self::new(ErrorId::RateLimited, TOO_MANY_REQUESTS, StatusCode::TOO_MANY_REQUESTS)
            .with_internal(anyhow::anyhow!("ip {ip} sending too many requests"))
    }

    /// Client at `ip` tripped the named limiter and must wait `cooldown_secs`
    pub fn rate_limited_cooldown(ip: &str, cooldown_secs: u64, limiter: &str) -> Self {
        Self::new(
            ErrorId::RateLimitedCooldown,
            TOO_MANY_REQUESTS,
            StatusCode::TOO_MANY_REQUESTS,
        )
        .with_description(wait_description(cooldown_secs))
        .with_internal(anyhow::anyhow!(
            "ip {ip} hit rate limiter '{limiter}', cooldown {cooldown_secs}s"
        ))
    }

    /// Too many login attempts for `user_id` from `ip`
    pub fn rate_limited_login(ip: &str, user_id: &str, cooldown_secs: u64) -> Self {
        Self::new(
            ErrorId::RateLimitedLogin,
            "Too many login attempts!",
            StatusCode::TOO_MANY_REQUESTS,
        )
        .with_description(wait_description(cooldown_secs))
        .with_internal(anyhow::anyhow!(
            "ip {ip} exceeded login attempts for user {user_id}, cooldown {cooldown_secs}s"
        ))
    }

    /// Unexpected failure while handling a request
    ///
    /// `category` is a short label for the failing subsystem (e.g. `db`),
    /// kept in the internal diagnostic as `[category] failure`.
    pub fn processing_error(category: &str, err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self::new(
            ErrorId::ProcessingError,
            "An error occurred processing your request!",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_description("Please try again. If the error persists, please contact the administrators!")
        .with_internal(anyhow::anyhow!("[{category}] {err:#}"))
    }

    /// Request body could not be decoded as JSON
    pub fn decoding_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self::new(
            ErrorId::JsonDecodingError,
            "An error occurred decoding JSON request data",
            StatusCode::BAD_REQUEST,
        )
        .with_description("Please check documentation for the correct JSON schema for the request")
        .with_internal(anyhow::anyhow!("JSON decoding: {err:#}"))
    }

    /// Caller lacks the permission for this action
    pub fn unauthorized(err: Option<anyhow::Error>) -> Self {
        let value = Self::new(ErrorId::Unauthorized, "Unauthorized access!", StatusCode::UNAUTHORIZED)
            .with_description("You lack the permission required to perform this action!");

        match err {
            Some(err) => value.with_internal(err),
            None => value,
        }
    }

    /// `method` is not served here; `allowed` lists what is, in order
    pub fn unsupported_method(method: &Method, allowed: &[Method]) -> Self {
        Self::new(
            ErrorId::UnsupportedMethod,
            "Unsupported request method!",
            StatusCode::METHOD_NOT_ALLOWED,
        )
        .with_description(format!("Allowed methods: {}", allowed.iter().map(Method::as_str).join(", ")))
        .with_internal(anyhow::anyhow!("method {method} is not supported"))
    }

    /// Supplied credentials were rejected
    pub fn invalid_credentials(err: impl Into<anyhow::Error>) -> Self {
        Self::new(
            ErrorId::InvalidCredentials,
            "Invalid credentials!",
            StatusCode::UNAUTHORIZED,
        )
        .with_description("The provided credentials could not be verified")
        .with_internal(err)
    }

    /// Required `field` is absent from the request
    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorId::MissingField, "Missing required field!", StatusCode::BAD_REQUEST)
            .with_description(format!("The field '{field}' is required"))
    }

    /// `field` is present but its value was rejected
    pub fn invalid_data(field: &str, err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self::new(ErrorId::InvalidData, "Invalid field data!", StatusCode::NOT_ACCEPTABLE)
            .with_description(format!("The field '{field}' contains invalid data"))
            .with_internal(anyhow::anyhow!("field {field}: {err:#}"))
    }
}
