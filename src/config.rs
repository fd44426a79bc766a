use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level generator configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneratorConfig {
    /// Completion backend settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Settings for the completion backend.
///
/// The model, temperature and request timeout are fixed by the provider and
/// intentionally absent here.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProviderConfig {
    /// API key for authentication (can also be set via OPENAI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for proxies or compatible servers)
    pub base_url: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Deserialize an already assembled set of configuration sources
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        settings.try_deserialize()
    }
}

/// Load configuration from `config.toml` and `RECIPE__*` environment variables
pub fn load_config() -> Result<GeneratorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE__PROVIDER__API_KEY
        .add_source(Environment::with_prefix("RECIPE").separator("__"))
        .build()?;

    GeneratorConfig::from_settings(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;

    fn settings_from_toml(toml: &str) -> Config {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn test_provider_section_from_toml() {
        let config = GeneratorConfig::from_settings(settings_from_toml(
            r#"
            [provider]
            api_key = "sk-test"
            base_url = "http://localhost:8080"
            "#,
        ))
        .unwrap();

        assert_eq!(config.provider.api_key.as_deref(), Some("sk-test"));
        assert_eq!(
            config.provider.base_url.as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let config = GeneratorConfig::from_settings(settings_from_toml("")).unwrap();
        assert!(config.provider.api_key.is_none());
        assert!(config.provider.base_url.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = GeneratorConfig::from_settings(settings_from_toml(
            r#"
            [provider]
            api_key = "sk-test"
            model = "gpt-4"
            "#,
        ))
        .unwrap();

        assert_eq!(config.provider.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_load_config_reads_recipe_env_layer() {
        env::set_var("RECIPE__PROVIDER__API_KEY", "env-layer-key");
        env::set_var("RECIPE__PROVIDER__BASE_URL", "http://localhost:9999");

        let result = load_config();

        env::remove_var("RECIPE__PROVIDER__API_KEY");
        env::remove_var("RECIPE__PROVIDER__BASE_URL");

        let config = result.unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("env-layer-key"));
        assert_eq!(
            config.provider.base_url.as_deref(),
            Some("http://localhost:9999")
        );
    }
}
