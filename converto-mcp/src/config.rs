//! Server configuration, read once from the environment at start-up

use std::env;
use converto_units::DEFAULT_HISTORY_LIMIT;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `EnvFilter` directive (CONVERTO_LOG, then RUST_LOG)
    pub log_filter: String,
    /// Entries kept in a session's history (CONVERTO_HISTORY_LIMIT)
    pub history_limit: usize,
    /// Problems found while reading the environment; logged once tracing is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(filter) = lookup("CONVERTO_LOG").or_else(|| lookup("RUST_LOG")) {
            if filter.trim().is_empty() {
                config.warnings.push("empty log filter, using 'info'".to_string());
            } else {
                config.log_filter = filter.trim().to_string();
            }
        }

        if let Some(raw) = lookup("CONVERTO_HISTORY_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit >= 1 => config.history_limit = limit,
                _ => config.warnings.push(format!(
                    "CONVERTO_HISTORY_LIMIT must be a positive integer, got '{}'; using {}",
                    raw, DEFAULT_HISTORY_LIMIT
                )),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(config_from(&[("RUST_LOG", "debug")]).log_filter, "debug");
        assert_eq!(
            config_from(&[("RUST_LOG", "debug"), ("CONVERTO_LOG", "converto_mcp=trace")]).log_filter,
            "converto_mcp=trace"
        );
    }

    #[test]
    fn test_history_limit() {
        assert_eq!(config_from(&[("CONVERTO_HISTORY_LIMIT", " 12 ")]).history_limit, 12);

        for bad in ["0", "-3", "many", ""] {
            let config = config_from(&[("CONVERTO_HISTORY_LIMIT", bad)]);
            assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT, "{:?}", bad);
            assert_eq!(config.warnings.len(), 1);
        }
    }

    #[test]
    fn test_blank_log_filter_warns() {
        let config = config_from(&[("CONVERTO_LOG", "  ")]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.warnings.len(), 1);
    }
}
