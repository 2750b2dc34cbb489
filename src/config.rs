use crate::view::DashboardFeatures;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATS_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub stats_api_url: String,
    pub features: DashboardFeatures,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let stats_api_url = lookup("STATS_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATS_API_URL.to_string());
        let features = lookup("DASHBOARD_FEATURES")
            .map(|value| DashboardFeatures::parse(&value))
            .unwrap_or_default();

        Self {
            port,
            stats_api_url,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.stats_api_url, DEFAULT_STATS_API_URL);
        assert_eq!(config.features, DashboardFeatures::ALL);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "9001"),
            ("STATS_API_URL", "http://stats.internal:8000"),
            ("DASHBOARD_FEATURES", "rank"),
        ]);
        assert_eq!(config.port, 9001);
        assert_eq!(config.stats_api_url, "http://stats.internal:8000");
        assert!(config.features.ranked_rows);
        assert!(!config.features.summary_cards);
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "not-a-port")]).port, DEFAULT_PORT);
    }
}
