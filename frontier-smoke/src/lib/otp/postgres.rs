use async_trait::async_trait;
use sqlx::PgPool;

use super::errors::OtpError;
use super::OtpSource;

/// Reads the one-time code from the service's `flows` table.
pub struct PostgresOtpSource {
    pool: PgPool,
}

impl PostgresOtpSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpSource for PostgresOtpSource {
    async fn nonce_for_email(&self, email: &str) -> Result<String, OtpError> {
        // Runtime query: the flows table belongs to the service under
        // test, not to this crate.
        let nonce: Option<String> =
            sqlx::query_scalar("SELECT nonce FROM flows WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| OtpError::Database(e.to_string()))?;

        match nonce {
            Some(nonce) => Ok(nonce.trim().to_string()),
            None => Err(OtpError::NotFound(email.to_string())),
        }
    }
}
