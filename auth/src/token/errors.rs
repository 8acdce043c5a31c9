use thiserror::Error;

/// Error type for token signing operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Credential is incomplete: {0}")]
    IncompleteCredential(String),

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
