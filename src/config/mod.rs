use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub validator: ValidatorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ValidatorSettings {
    /// Full URL of the remote endpoint that receives the bearer token.
    pub validation_url: String,
    /// Per-request timeout in seconds, after which the call is abandoned
    /// and treated as a failed validation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl ValidatorSettings {
    pub fn new(validation_url: impl Into<String>) -> Self {
        Self {
            validation_url: validation_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load settings from `config/base.yaml` (when present) with
/// `APP`-prefixed environment overrides, e.g.
/// `APP_VALIDATOR__VALIDATION_URL`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        let settings: ValidatorSettings = serde_json::from_value(serde_json::json!({
            "validation_url": "http://localhost:9096/api/tokens/validate"
        }))
        .unwrap();

        assert_eq!(settings.timeout_secs, 10);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_new_uses_default_timeout() {
        let settings = ValidatorSettings::new("http://localhost:9096/api/tokens/validate");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }
}
