use thiserror::Error;

/// Error type for calls against the Frontier API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Response is missing required field: {0}")]
    MissingField(&'static str),

    #[error("sid cookie not found in response")]
    MissingSessionCookie,
}
