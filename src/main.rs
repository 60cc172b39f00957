//! Demo CLI: lists published restaurants from the configured backend.
//!
//! Mostly a smoke test for the wiring in README terms: config from the
//! environment, the file-backed session storage, and the public read
//! path. `API_BASE_URL` selects the backend.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tavolo::adapters::http::ReqwestTransport;
use tavolo::adapters::navigation::TracingNavigator;
use tavolo::adapters::storage::FileStore;
use tavolo::api::ApiClient;
use tavolo::config::ApiConfig;
use tavolo::session::SessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let storage = Arc::new(FileStore::new(".tavolo/storage.json"));
    let session = Arc::new(SessionStore::new(storage.clone()));
    let client = ApiClient::new(
        ApiConfig::from_env(),
        Arc::new(ReqwestTransport::new()),
        storage,
        session,
        Arc::new(TracingNavigator),
    );

    match client.list_public().await {
        Ok(restaurants) => {
            if restaurants.is_empty() {
                println!("No published restaurants.");
                return ExitCode::SUCCESS;
            }
            for restaurant in restaurants {
                let category = restaurant.category.as_deref().unwrap_or("-");
                println!("{:<30} {:<15} /r/{}", restaurant.name, category, restaurant.slug);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "failed to list public restaurants");
            ExitCode::FAILURE
        }
    }
}
