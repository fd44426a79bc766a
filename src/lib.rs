//! Generate simple vegan recipes from a list of ingredients.
//!
//! The ingredients are embedded in a fixed prompt, sent to an OpenAI chat
//! completion endpoint, and the JSON reply is decoded into a [`Recipe`].
//!
//! # Example
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use recipe_generator::RecipeGenerator;
//!
//! let generator = RecipeGenerator::builder().api_key("sk-...").build()?;
//! let recipe = generator.generate(&["tomato", "onion", "garlic"]).await?;
//! println!("{}", recipe);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod providers;

pub use builder::RecipeGeneratorBuilder;
pub use error::{BackendError, GeneratorError};
pub use generator::RecipeGenerator;
pub use model::{parse_ingredients, Recipe};
pub use providers::{build_prompt, LlmProvider, OpenAIProvider};

/// Generate a recipe using configuration from `config.toml` and the environment.
///
/// # Errors
/// Returns `GeneratorError::NoIngredients` for an empty list, otherwise any
/// configuration, backend or parse error.
pub async fn generate_recipe<S: AsRef<str>>(
    ingredients: &[S],
) -> Result<Recipe, GeneratorError> {
    if ingredients.is_empty() {
        return Err(GeneratorError::NoIngredients);
    }

    RecipeGenerator::builder()
        .build()?
        .generate(ingredients)
        .await
}
