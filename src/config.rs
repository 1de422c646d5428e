use crate::error::BuzzError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration: defaults overridden by `BUZZ_`-prefixed
/// environment variables (e.g. `BUZZ_DATABASE_URL`, `BUZZ_LOGLEVEL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:buzz_buzz".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, BuzzError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("BUZZ_"))
            .extract()?;
        Ok(cfg)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});
