use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

const DEFAULT_PORT: u16 = 2565;
const DEFAULT_MAX_POOL_SIZE: u32 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT: u64 = 10;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub auth_token: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// Seconds in-flight requests get to finish after a termination signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
    pub honeycomb_api_key: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

fn default_shutdown_timeout() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Self::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        toml::from_str(config).context("Unable to parse config")
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = read_env("DATABASE_URL")?;
        let auth_token = read_env("AUTH_TOKEN")?;
        let port = match env::var("PORT") {
            Ok(port) => parse_port(&port)?,
            Err(_) => DEFAULT_PORT,
        };
        let max_pool_size = parse_env_or("MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?;
        let shutdown_timeout = parse_env_or("SHUTDOWN_TIMEOUT", DEFAULT_SHUTDOWN_TIMEOUT)?;
        let honeycomb_api_key = env::var("HONEYCOMB_API_KEY").ok();

        let config = Config {
            database_url,
            port,
            auth_token,
            max_pool_size,
            shutdown_timeout,
            honeycomb_api_key,
        };
        Ok(config)
    }
}

/// Accepts both `2565` and the listen-address form `:2565`.
fn parse_port(value: &str) -> Result<u16, anyhow::Error> {
    value
        .trim_start_matches(':')
        .parse()
        .with_context(|| format!("Unable to parse PORT value: {}", value))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Unable to parse {} value", key)),
        Err(_) => Ok(default),
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
