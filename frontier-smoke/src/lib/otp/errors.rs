use thiserror::Error;

/// Error type for one-time code lookups.
#[derive(Debug, Clone, Error)]
pub enum OtpError {
    #[error("No pending login flow found for email: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}
