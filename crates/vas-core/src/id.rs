use serde::{Deserialize, Serialize};

/// Machine-readable identifier of an error kind
///
/// Rendered as `SCREAMING_SNAKE_CASE` both by `Display` and on the wire.
/// Clients branch on this value, so existing variants never change their
/// string form.
#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorId {
    /// Generic per-IP rate limit
    RateLimited,
    /// Rate limit with a known cooldown window
    RateLimitedCooldown,
    /// Too many login attempts
    RateLimitedLogin,
    /// Unexpected failure while handling the request
    ProcessingError,
    /// Request body is not valid JSON for the endpoint
    JsonDecodingError,
    /// Caller lacks permission
    Unauthorized,
    /// Route exists but not for this method
    UnsupportedMethod,
    /// Supplied credentials were rejected
    InvalidCredentials,
    /// Required request field is absent
    MissingField,
    /// Request field is present but unusable
    InvalidData,
}

impl ErrorId {
    /// Wire representation of this id
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
