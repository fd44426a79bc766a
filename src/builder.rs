use crate::config::{GeneratorConfig, ProviderConfig};
use crate::providers::{LlmProvider, OpenAIProvider};
use crate::{GeneratorError, RecipeGenerator};

/// Builder for configuring a [`RecipeGenerator`]
#[derive(Default)]
pub struct RecipeGeneratorBuilder {
    provider: Option<Box<dyn LlmProvider>>,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl RecipeGeneratorBuilder {
    /// Set the API key for the completion backend
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the client at a different OpenAI-compatible endpoint
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .api_key("your-api-key")
    ///     .base_url("http://localhost:8080");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a custom completion backend
    ///
    /// Takes precedence over `api_key` and `base_url`.
    pub fn provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the generator
    ///
    /// Without an explicit provider or API key, settings are read from
    /// `config.toml` and `RECIPE__*` environment variables, with the key
    /// finally falling back to `OPENAI_API_KEY`.
    ///
    /// # Errors
    /// Returns `GeneratorError` if the configuration cannot be loaded or no
    /// API key is available.
    pub fn build(self) -> Result<RecipeGenerator, GeneratorError> {
        if let Some(provider) = self.provider {
            return Ok(RecipeGenerator::new(provider));
        }

        let provider_config = match self.api_key {
            Some(api_key) => ProviderConfig {
                api_key: Some(api_key),
                base_url: self.base_url,
            },
            None => {
                let mut config = GeneratorConfig::load()?.provider;
                if self.base_url.is_some() {
                    config.base_url = self.base_url;
                }
                config
            }
        };

        let provider = OpenAIProvider::new(&provider_config)?;
        Ok(RecipeGenerator::new(Box::new(provider)))
    }
}
