use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_ttl_minutes: i64,
    pub sweep_schedule: String,
    pub rate_limit_max_sessions: usize,
    pub rate_limit_window_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(addr) => addr,
            None => {
                let port: u16 = parse_or(&lookup, "PORT", 3000)?;
                format!("0.0.0.0:{}", port)
            }
        };

        let session_ttl_minutes: i64 = parse_or(&lookup, "SESSION_TTL_MINUTES", 120)?;
        if session_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_MINUTES",
                value: session_ttl_minutes.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let rate_limit_max_sessions: usize = parse_or(&lookup, "RATE_LIMIT_MAX_SESSIONS", 20)?;
        if rate_limit_max_sessions == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_MAX_SESSIONS",
                value: rate_limit_max_sessions.to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        let rate_limit_window_secs: u64 = parse_or(&lookup, "RATE_LIMIT_WINDOW_SECS", 60)?;
        if rate_limit_window_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_WINDOW_SECS",
                value: rate_limit_window_secs.to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            session_ttl_minutes,
            sweep_schedule: lookup("SESSION_SWEEP_CRON")
                .unwrap_or_else(|| "0 */15 * * * *".to_string()),
            rate_limit_max_sessions,
            rate_limit_window_secs,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            tracing::debug!("{key} not set, using default");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
