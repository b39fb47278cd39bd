use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_CAMPAIGN_END: &str = "2023-12-31";
pub const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub campaign_end: NaiveDate,
    pub expose_errors: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let environment: String = try_load("RUST_ENV", DEFAULT_ENVIRONMENT)?;

        Ok(Self {
            port: try_load("RUST_PORT", DEFAULT_PORT)?,
            seed_path: optional("SEED_PATH").map(PathBuf::from),
            campaign_end: try_load("CAMPAIGN_END", DEFAULT_CAMPAIGN_END)?,
            expose_errors: environment == "development",
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            seed_path: None,
            campaign_end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
            expose_errors: false,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            info!("{key} not set");
        })
        .ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Environment misconfigured! {key}={raw}: {e}")
    })
}
