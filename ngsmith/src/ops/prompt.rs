//! Interactive prompts.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use ngsmith_core::validate_class_name;

/// Prompt for a class name, rejecting anything that is not an
/// upper-camel-case identifier.
pub fn class_name(default: &str, prompt: &str, example: &str) -> Result<String> {
    let example = example.to_string();

    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(move |input: &String| validate_class_name(input, &example))
        .interact_text()
        .wrap_err("Failed to get name")
}

/// Prompt for one of `items`, returning the selected index.
pub fn select(prompt: &str, items: &[String]) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .wrap_err("Failed to get selection")
}
