use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_HISTORY_LEN: usize = 50;

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on records accepted by the trend endpoint.
    pub max_history_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_history_len: DEFAULT_MAX_HISTORY_LEN,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let max_history_len = match lookup("MAX_HISTORY_LEN") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_HISTORY_LEN must be a positive integer")?,
            None => DEFAULT_MAX_HISTORY_LEN,
        };
        if max_history_len == 0 {
            bail!("MAX_HISTORY_LEN must be at least 1");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_history_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_history_len, 50);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[("PORT", "3000"), ("RUST_LOG", "debug"), ("MAX_HISTORY_LEN", "5")])
            .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_history_len, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("MAX_HISTORY_LEN", "-1")]).is_err());
        assert!(load(&[("MAX_HISTORY_LEN", "0")]).is_err());
    }
}
