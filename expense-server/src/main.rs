#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::auth::{static_token_validator, Authorization};
use expense_lib::config::Config;

const SERVICE_NAME: &str = "expense-server";

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "loading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("no config file found, reading environment");
            Config::from_env()?
        }
    };

    let telemetry_layer = config
        .honeycomb_api_key
        .as_deref()
        .map(|api_key| expense_lib::tracing::create_opentelemetry_layer(SERVICE_NAME, api_key))
        .transpose()?;

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up subscriber")?;
    drop(tracing_guard);

    let expense_repo =
        expense_repo::sqlx_repo::create_repo(&config.database_url, config.max_pool_size).await?;

    let authorization = Authorization::new(static_token_validator(config.auth_token.clone()));

    let server_repo = expense_repo.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(
                server_repo.clone(),
                authorization.clone(),
            ))
    })
    .shutdown_timeout(config.shutdown_timeout)
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Unable to bind to port {}", config.port))?;

    info!(port = config.port, "server started");
    // Stops on SIGINT/SIGTERM once in-flight requests finish or the timeout expires
    let result = server.run().await;

    expense_repo.close().await;
    info!("bye bye!");

    result.context("Server error")
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
