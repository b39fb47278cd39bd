use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roster::Roster;

use super::config::Config;

pub type Clock = fn() -> DateTime<Utc>;

pub struct State {
    pub roster: Roster,
    pub config: Config,
    pub clock: Clock,
}

impl State {
    pub fn new() -> Result<Arc<Self>> {
        Self::from_config(Config::load()?)
    }

    pub fn from_config(config: Config) -> Result<Arc<Self>> {
        let roster = match &config.seed_path {
            Some(path) => Roster::from_path(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?,
            None => Roster::embedded().context("Failed to load embedded roster")?,
        };

        Ok(Self::from_parts(config, roster, Utc::now))
    }

    pub fn from_parts(config: Config, roster: Roster, clock: Clock) -> Arc<Self> {
        Arc::new(Self {
            roster,
            config,
            clock,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
