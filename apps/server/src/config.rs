use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockbook_core::config::CoreConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub core: CoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8088)),
            db_path: "./db/stockbook.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            core: CoreConfig::default(),
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the `SB_*` variables. Unset variables
    /// keep their defaults; malformed ones are reported.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = match std::env::var("SB_LISTEN_ADDR") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid SB_LISTEN_ADDR '{}'", value))?,
            Err(_) => defaults.listen_addr,
        };
        let db_path = std::env::var("SB_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = std::env::var("SB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_parse("SB_REQUEST_TIMEOUT_MS")?.unwrap_or(30000);

        let mut core = defaults.core;
        if let Some(remove) = env_parse::<bool>("SB_REMOVE_CLOSED_POSITIONS")? {
            core = core.with_remove_closed_positions(remove);
        }
        if let Some(limit) = env_parse::<i64>("SB_BALANCE_HISTORY_LIMIT")? {
            core = core.with_balance_history_limit(limit);
        }
        if let Some(limit) = env_parse::<i64>("SB_JOURNAL_RECENT_LIMIT")? {
            core = core.with_journal_recent_limit(limit);
        }

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            core,
        })
    }
}

fn env_parse<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => {
            let parsed = value
                .trim()
                .parse::<T>()
                .with_context(|| format!("Invalid {} '{}'", key, value))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
