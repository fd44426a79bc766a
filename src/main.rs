use log::{debug, info};
use recipe_generator::{parse_ingredients, GeneratorError, RecipeGenerator};
use std::env;
use std::io::{self, Read};

const USAGE: &str = "Usage: recipe-generator [--json] [INGREDIENT ...]

Ingredients are read from stdin, one per line, when none are given.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut json_output = false;
    let mut ingredients = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => ingredients.push(arg),
        }
    }

    if ingredients.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        ingredients = parse_ingredients(&input);
    }

    if ingredients.is_empty() {
        eprintln!("{}", USAGE);
        return Err(GeneratorError::NoIngredients.into());
    }

    debug!("Ingredients: {:?}", ingredients);

    let generator = RecipeGenerator::builder().build()?;
    let recipe = generator.generate(&ingredients).await?;
    info!("Generated recipe with {} steps", recipe.instructions.len());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print!("{}", recipe);
    }

    Ok(())
}
