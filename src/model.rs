use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated recipe.
///
/// Missing keys in the backend reply decode to empty values; a key present
/// with the wrong JSON type is a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Decode a completion reply of the form
    /// `{"name": "...", "ingredients": [...], "instructions": [...]}`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }

        writeln!(f, "\nInstructions:")?;
        for (i, step) in self.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step)?;
        }

        Ok(())
    }
}

/// Split newline-separated user input into an ingredient list.
///
/// Lines are trimmed and blank lines dropped, so `\r\n` input from a browser
/// form behaves like plain `\n` input.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
