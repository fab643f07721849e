use thiserror::Error;

/// The validation failure type the plugin host expects when model
/// credentials are rejected.
#[derive(Debug, Error)]
#[error("credentials validation failed: {0}")]
pub struct CredentialsValidateFailed(pub String);

/// Failures surfaced from a model invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Credentials(#[from] CredentialsValidateFailed),

    #[error("malformed invoke request: {0}")]
    BadRequest(#[from] serde_json::Error),
}
