//! Server configuration from environment variables
//!
//! Every variable is optional; missing or unparseable values fall back to
//! the defaults below.

use std::str::FromStr;
use std::time::Duration;

use crate::analytics::DEFAULT_BASE_YEAR;
use crate::predictor::PredictorConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub predictor: PredictorConfig,
    /// JSON lines history file; in-memory store when `None`
    pub store_path: Option<String>,
    pub estimate_cache_ttl: Duration,
    pub estimate_cache_capacity: u64,
    pub trajectory_base_year: i32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            predictor: PredictorConfig::default(),
            store_path: None,
            estimate_cache_ttl: Duration::from_secs(300),
            estimate_cache_capacity: 10_000,
            trajectory_base_year: DEFAULT_BASE_YEAR,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut predictor = defaults.predictor.clone();
        if let Some(program) = lookup("PREDICTOR_PROGRAM").filter(|p| !p.trim().is_empty()) {
            predictor.program = program;
        }
        if let Some(script) = lookup("PREDICTOR_SCRIPT") {
            // An empty script runs the program with the feature arguments only
            predictor.leading_args = if script.trim().is_empty() {
                Vec::new()
            } else {
                vec![script]
            };
        }
        if let Some(ms) = parse_var(&lookup, "PREDICTOR_TIMEOUT_MS") {
            predictor.timeout = Duration::from_millis(ms);
        }
        if let Some(retries) = parse_var(&lookup, "PREDICTOR_RETRIES") {
            predictor.retries = retries;
        }

        Self {
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            predictor,
            store_path: lookup("STORE_PATH").filter(|p| !p.trim().is_empty()),
            estimate_cache_ttl: parse_var(&lookup, "ESTIMATE_CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.estimate_cache_ttl),
            estimate_cache_capacity: parse_var(&lookup, "ESTIMATE_CACHE_CAPACITY")
                .unwrap_or(defaults.estimate_cache_capacity),
            trajectory_base_year: parse_var(&lookup, "TRAJECTORY_BASE_YEAR")
                .unwrap_or(defaults.trajectory_base_year),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.predictor.program, "python3");
        assert_eq!(cfg.predictor.leading_args, vec!["ml/predict.py".to_string()]);
        assert_eq!(cfg.predictor.timeout, Duration::from_secs(10));
        assert_eq!(cfg.predictor.retries, 1);
        assert_eq!(cfg.store_path, None);
        assert_eq!(cfg.trajectory_base_year, 2026);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("PORT", "8080"),
            ("PREDICTOR_PROGRAM", "/opt/model/bin/predict"),
            ("PREDICTOR_SCRIPT", ""),
            ("PREDICTOR_TIMEOUT_MS", "2500"),
            ("PREDICTOR_RETRIES", "0"),
            ("STORE_PATH", "/var/lib/footprint/history.jsonl"),
            ("ESTIMATE_CACHE_TTL_SECS", "60"),
            ("TRAJECTORY_BASE_YEAR", "2027"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.predictor.program, "/opt/model/bin/predict");
        assert!(cfg.predictor.leading_args.is_empty());
        assert_eq!(cfg.predictor.timeout, Duration::from_millis(2500));
        assert_eq!(cfg.predictor.retries, 0);
        assert_eq!(cfg.store_path.as_deref(), Some("/var/lib/footprint/history.jsonl"));
        assert_eq!(cfg.estimate_cache_ttl, Duration::from_secs(60));
        assert_eq!(cfg.trajectory_base_year, 2027);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let cfg = config(&[("PORT", "eighty"), ("PREDICTOR_TIMEOUT_MS", "-1")]);
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.predictor.timeout, Duration::from_secs(10));
    }
}
