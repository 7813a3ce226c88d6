//! Interactive prompts built on dialoguer

use crate::error::Result;
use crate::types::MenuItem;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

/// Let the user pick one item. None when the list is empty or the prompt is
/// cancelled.
pub fn select<T: Clone>(items: &[MenuItem<T>], prompt: &str) -> Option<T> {
    if items.is_empty() {
        return None;
    }

    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()?;

    items.get(selection).map(|item| item.value.clone())
}

/// Use `given` if present, otherwise ask. Empty answers are allowed so the
/// store can reject them.
pub fn text_or_prompt(given: Option<String>, prompt: &str) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(Into::into),
    }
}

pub fn password_or_prompt(given: Option<String>) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(Into::into),
    }
}
