use thiserror::Error;

use crate::client::ClientError;
use crate::otp::OtpError;

/// Top-level error for a smoke run, carrying the step that failed.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Step {step} failed: {source}")]
    Api {
        step: &'static str,
        source: ClientError,
    },

    #[error("Nonce lookup failed: {0}")]
    Otp(#[from] OtpError),

    #[error("Service token minting failed: {0}")]
    Token(#[from] auth::TokenError),
}
