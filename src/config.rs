use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from strategy_coach.toml and
/// environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub coach: CoachConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: std::net::SocketAddr,
    /// Optional bearer token; when set, every route except /health
    /// requires it. Loaded from the environment, never from the file.
    #[serde(skip)]
    pub bearer_token: Option<String>,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8790"
                .parse()
                .expect("default bind address should parse"),
            bearer_token: None,
            log_filter: "strategy_coach=info".to_string(),
        }
    }
}

/// Thresholds and behavior of the coaching core
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Minimum characters for the winning-aspiration step.
    pub min_chars_aspiration: usize,
    /// Minimum characters for every other step.
    pub min_chars_default: usize,
    pub max_chars: usize,
    /// Simulated processing delay standing in for a real backend call.
    pub simulate_latency: bool,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            min_chars_aspiration: 50,
            min_chars_default: 40,
            max_chars: 500,
            simulate_latency: true,
            latency_min_ms: 1500,
            latency_max_ms: 2500,
        }
    }
}

impl CoachConfig {
    /// Minimum character threshold for a step. The same values gate
    /// both advancement and feedback requests.
    pub fn min_chars_for(&self, step: crate::cascade::StepId) -> usize {
        match step {
            crate::cascade::StepId::WinningAspiration => self.min_chars_aspiration,
            _ => self.min_chars_default,
        }
    }
}

impl Config {
    /// Load configuration from the TOML file and environment variables.
    /// Uses STRATEGY_COACH_CONFIG or defaults to "strategy_coach.toml";
    /// a missing file falls back to defaults with a warning.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("STRATEGY_COACH_CONFIG")
            .unwrap_or_else(|_| "strategy_coach.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Env overrides (env-first)
        if let Ok(bind) = std::env::var("COACH_BIND") {
            config.server.bind = bind
                .parse()
                .map_err(|_| anyhow::anyhow!("COACH_BIND '{}' is not a socket address", bind))?;
        }
        config.server.bearer_token = std::env::var("COACH_BEARER_TOKEN").ok();
        if let Ok(filter) = std::env::var("COACH_LOG_FILTER") {
            config.server.log_filter = filter;
        }
        if let Ok(v) = std::env::var("COACH_SIMULATE_LATENCY") {
            config.coach.simulate_latency = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(ms) = std::env::var("COACH_LATENCY_MIN_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.coach.latency_min_ms = ms;
        }
        if let Some(ms) = std::env::var("COACH_LATENCY_MAX_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.coach.latency_max_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> anyhow::Result<()> {
        if self.coach.max_chars < self.coach.min_chars_aspiration
            || self.coach.max_chars < self.coach.min_chars_default
        {
            anyhow::bail!("max_chars must not be below the per-step minimums");
        }
        if self.coach.latency_max_ms < self.coach.latency_min_ms {
            tracing::warn!(
                "latency_max_ms {} below latency_min_ms {}, swapping",
                self.coach.latency_max_ms,
                self.coach.latency_min_ms
            );
            std::mem::swap(
                &mut self.coach.latency_min_ms,
                &mut self.coach.latency_max_ms,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::StepId;

    #[test]
    fn defaults_match_wizard_thresholds() {
        let config = Config::default();
        assert_eq!(config.coach.min_chars_for(StepId::WinningAspiration), 50);
        assert_eq!(config.coach.min_chars_for(StepId::WhereToPlay), 40);
        assert_eq!(config.coach.max_chars, 500);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[coach]\nsimulate_latency = false\n").unwrap();
        assert!(!config.coach.simulate_latency);
        assert_eq!(config.coach.min_chars_aspiration, 50);
    }

    #[test]
    fn inverted_latency_range_is_swapped() {
        let mut config = Config::default();
        config.coach.latency_min_ms = 900;
        config.coach.latency_max_ms = 100;
        config.validate().unwrap();
        assert!(config.coach.latency_min_ms <= config.coach.latency_max_ms);
    }
}
