pub mod errors;
pub mod postgres;

pub use errors::OtpError;
pub use postgres::PostgresOtpSource;

use async_trait::async_trait;

/// Source of the one-time code the service mailed out.
///
/// The smoke test short-circuits email delivery by reading the code
/// straight from the service's backing store; tests substitute a fixed
/// value.
#[async_trait]
pub trait OtpSource: Send + Sync {
    async fn nonce_for_email(&self, email: &str) -> Result<String, OtpError>;
}
