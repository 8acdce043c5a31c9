use std::env;

use auth::KeyCredential;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub login: LoginConfig,
    pub service_account: ServiceAccountConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the Frontier deployment under test
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Connection string for the service's backing Postgres
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoginConfig {
    /// Email the one-time code is issued for
    pub email: String,
    /// Auth strategy to exercise
    pub strategy: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceAccountConfig {
    pub private_key: String,
    pub key_type: String,
    pub key_id: String,
    pub principal_id: String,
    /// Issuer string the deployment expects in minted tokens
    pub issuer: String,
    /// Validity of minted tokens, in hours
    pub validity_hours: i64,
    /// Organization fetched with the service-account token
    pub organization_id: String,
}

impl ServiceAccountConfig {
    pub fn credential(&self) -> KeyCredential {
        KeyCredential {
            private_key: self.private_key.clone(),
            key_type: self.key_type.clone(),
            key_id: self.key_id.clone(),
            principal_id: self.principal_id.clone(),
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Plain variables the original script used (EMAIL, FRONTIER_*)
    /// 2. Environment variables (SERVICE__BASE_URL, DATABASE__URL, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults pointing at the local deployment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("service.base_url", "http://localhost:8002")?
            .set_default("database.url", "postgres://frontier@localhost:5432")?
            .set_default("login.email", "")?
            .set_default("login.strategy", "mailotp")?
            .set_default("service_account.private_key", "")?
            .set_default("service_account.key_type", "")?
            .set_default("service_account.key_id", "")?
            .set_default("service_account.principal_id", "")?
            .set_default("service_account.issuer", "abhishek-made-this")?
            .set_default("service_account.validity_hours", 12)?
            .set_default(
                "service_account.organization_id",
                "e674dbb1-14b4-4ce9-b834-adc2c34948d3",
            )?
            // Layer on the default configuration file
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: SERVICE__BASE_URL=http://... overrides service.base_url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let mut config: Config = configuration.try_deserialize()?;

        // The original script reads these directly; keep them working.
        if let Ok(email) = env::var("EMAIL") {
            config.login.email = email;
        }
        if let Ok(key) = env::var("FRONTIER_PRIVATE_KEY") {
            config.service_account.private_key = key;
        }
        if let Ok(key_type) = env::var("FRONTIER_KEY_TYPE") {
            config.service_account.key_type = key_type;
        }
        if let Ok(kid) = env::var("FRONTIER_KEY_ID") {
            config.service_account.key_id = kid;
        }
        if let Ok(principal) = env::var("FRONTIER_PRINCIPAL_ID") {
            config.service_account.principal_id = principal;
        }

        Ok(config)
    }
}
