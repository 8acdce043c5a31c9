pub mod api;
pub mod errors;
pub mod messages;

pub use api::ApiClient;
pub use api::AuthStart;
pub use api::Credential;
pub use api::Session;
pub use errors::ClientError;
