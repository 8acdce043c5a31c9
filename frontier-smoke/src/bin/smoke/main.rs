use std::sync::Arc;

use frontier_smoke::config::Config;
use frontier_smoke::console;
use frontier_smoke::otp::PostgresOtpSource;
use frontier_smoke::ApiClient;
use frontier_smoke::SmokeFlow;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load environment variables from .env file
    if dotenvy::dotenv().is_err() {
        console::warning("Error loading .env file");
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontier_smoke=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    if config.login.email.is_empty() {
        console::error("EMAIL environment variable is not set");
        println!(
            "{}Usage: EMAIL=your@email.com frontier-smoke{}",
            console::WHITE,
            console::NC
        );
        std::process::exit(1);
    }

    tracing::info!(
        base_url = %config.service.base_url,
        database_url = %config.database.url,
        email = %config.login.email,
        strategy = %config.login.strategy,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;
    tracing::info!(database = "postgresql", "Database connection established");

    let api = ApiClient::new(&config.service.base_url);
    let otp = Arc::new(PostgresOtpSource::new(pg_pool));

    let flow = SmokeFlow::new(
        api,
        otp,
        config.login.clone(),
        config.service_account.clone(),
    );

    if let Err(e) = flow.run().await {
        console::error(&format!("{}", e));
        std::process::exit(1);
    }

    Ok(())
}
