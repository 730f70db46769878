use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use tither_core::ledger::DonorStatusThresholds;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Timezone whose calendar defines "today", "this month" and "this year".
    pub reporting_tz: Tz,
    pub donor_thresholds: DonorStatusThresholds,
}

impl Config {
    /// Reads the configuration from `TITHER_*` environment variables,
    /// loading a `.env` file first when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("TITHER_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid TITHER_LISTEN_ADDR")?;
        let db_path = var("TITHER_DB_PATH", "./db/tither.db");
        let cors_allow = var("TITHER_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("TITHER_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid TITHER_REQUEST_TIMEOUT_MS")?;
        let reporting_tz: Tz = var("TITHER_REPORTING_TZ", "UTC")
            .parse()
            .map_err(|e| anyhow!("Invalid TITHER_REPORTING_TZ: {}", e))?;
        let new_donor_days: i64 = var("TITHER_NEW_DONOR_DAYS", "30")
            .parse()
            .context("Invalid TITHER_NEW_DONOR_DAYS")?;
        let lapsed_after_days: i64 = var("TITHER_LAPSED_DONOR_DAYS", "60")
            .parse()
            .context("Invalid TITHER_LAPSED_DONOR_DAYS")?;
        let donor_thresholds = DonorStatusThresholds::new(new_donor_days, lapsed_after_days)
            .context("Invalid donor status thresholds")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            reporting_tz,
            donor_thresholds,
        })
    }
}
