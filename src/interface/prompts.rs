use dialoguer::Confirm;
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Menu;

/// Similarity a dish name must reach to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Closest menu dish name to `input`, if any is similar enough.
pub fn suggest_dish<'m>(input: &str, menu: &'m Menu) -> Option<&'m str> {
    let input = input.trim().to_lowercase();
    menu.dishes()
        .iter()
        .map(|d| (d.name(), jaro_winkler(&d.name().to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}
