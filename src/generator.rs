use crate::builder::RecipeGeneratorBuilder;
use crate::error::GeneratorError;
use crate::model::Recipe;
use crate::providers::{build_prompt, LlmProvider};
use log::{debug, error, info};

/// Turns an ingredient list into a recipe with a single completion call.
///
/// Holds no mutable state, so one generator can serve concurrent callers.
pub struct RecipeGenerator {
    provider: Box<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        RecipeGenerator { provider }
    }

    /// Creates a new builder for configuring a generator
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Generate a recipe from the given ingredients.
    ///
    /// Every call goes to the backend; a failed completion is returned
    /// without attempting to parse anything.
    pub async fn generate<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> Result<Recipe, GeneratorError> {
        let prompt = build_prompt(ingredients);

        info!(
            "Generating recipe from {} ingredients using {}",
            ingredients.len(),
            self.provider.provider_name()
        );

        let completion = self.provider.complete(&prompt).await?;

        debug!("Parsing completion from {}", self.provider.provider_name());
        let recipe = Recipe::from_json(&completion).map_err(|e| {
            error!("Error parsing completion: {}", e);
            GeneratorError::ParseError(e)
        })?;

        info!("Generated recipe: {}", recipe.name);
        Ok(recipe)
    }
}
