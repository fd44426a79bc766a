/// The prompt template sent to the completion backend.
///
/// Loaded from `prompt.txt` at compile time; `{ingredients}` marks where the
/// joined ingredient list goes.
pub const RECIPE_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

const INGREDIENTS_PLACEHOLDER: &str = "{ingredients}";

/// Build the full prompt for an ingredient list.
pub fn build_prompt<S: AsRef<str>>(ingredients: &[S]) -> String {
    let joined = ingredients
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");

    RECIPE_PROMPT_TEMPLATE.replace(INGREDIENTS_PLACEHOLDER, &joined)
}
