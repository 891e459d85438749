// ============================================================================
// CONFIG - Compile-time application settings
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub delays: DelayConfig,
    pub demo_credentials: DemoCredentials,
    pub storage_keys: StorageKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            delays: DelayConfig::default(),
            demo_credentials: DemoCredentials::default(),
            storage_keys: StorageKeys::default(),
        }
    }
}

/// Simulated latencies, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayConfig {
    pub login_ms: u32,
    pub submit_ms: u32,
    pub success_redirect_ms: u32,
    pub ar_init_ms: u32,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            submit_ms: 1500,
            success_redirect_ms: 2000,
            ar_init_ms: 2000,
        }
    }
}

/// The one credential pair the mock login accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "spacecargo123".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub logged_in: String,
    pub username: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            logged_in: "spaceCargoLoggedIn".to_string(),
            username: "spaceCargoUser".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("SPACE_CARGO_ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("SPACE_CARGO_ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            delays: DelayConfig {
                login_ms: parse_or(option_env!("SPACE_CARGO_LOGIN_DELAY_MS"), defaults.delays.login_ms),
                submit_ms: parse_or(option_env!("SPACE_CARGO_SUBMIT_DELAY_MS"), defaults.delays.submit_ms),
                success_redirect_ms: parse_or(
                    option_env!("SPACE_CARGO_SUCCESS_REDIRECT_MS"),
                    defaults.delays.success_redirect_ms,
                ),
                ar_init_ms: parse_or(option_env!("SPACE_CARGO_AR_INIT_DELAY_MS"), defaults.delays.ar_init_ms),
            },
            demo_credentials: DemoCredentials {
                username: option_env!("SPACE_CARGO_DEMO_USERNAME")
                    .map(str::to_string)
                    .unwrap_or(defaults.demo_credentials.username),
                password: option_env!("SPACE_CARGO_DEMO_PASSWORD")
                    .map(str::to_string)
                    .unwrap_or(defaults.demo_credentials.password),
            },
            storage_keys: defaults.storage_keys,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// JSON dump for the startup log, password masked
    pub fn redacted_json(&self) -> String {
        let mut shown = self.clone();
        shown.demo_credentials.password = "***".to_string();
        serde_json::to_string(&shown).unwrap_or_default()
    }

    /// Max log level handed to the logger at startup
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

fn parse_or(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_mock_timings() {
        let config = AppConfig::default();
        assert_eq!(config.delays.login_ms, 1000);
        assert_eq!(config.delays.submit_ms, 1500);
        assert_eq!(config.delays.success_redirect_ms, 2000);
        assert_eq!(config.delays.ar_init_ms, 2000);
        assert_eq!(config.storage_keys.logged_in, "spaceCargoLoggedIn");
    }

    #[test]
    fn unparsable_values_fall_back() {
        assert_eq!(parse_or(Some("abc"), 7), 7);
        assert_eq!(parse_or(Some(" 250 "), 7), 250);
        assert_eq!(parse_or(None, 7), 7);
    }

    #[test]
    fn redacted_json_hides_the_password() {
        let json = AppConfig::default().redacted_json();
        assert!(json.contains("\"login_ms\":1000"));
        assert!(json.contains("spaceCargoLoggedIn"));
        assert!(!json.contains("spacecargo123"));
    }

    #[test]
    fn log_level_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.environment = "production".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
