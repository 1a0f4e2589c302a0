//! Credential resolution and prompts
//!
//! A credential is taken from the first source that has one: the explicit
//! argument, the client's default, then an interactive prompt.

use crate::error::Result;
use inquire::{Password, PasswordDisplayMode, Text};

/// Pick the first non-empty value, asking `prompt` only when both the
/// explicit and the default value are absent
pub fn resolve<F>(explicit: Option<String>, default: Option<String>, prompt: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<Option<String>>,
{
    if let Some(value) = non_empty(explicit).or_else(|| non_empty(default)) {
        return Ok(Some(value));
    }
    Ok(non_empty(prompt()?))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn prompt_username(message: &str) -> Result<Option<String>> {
    Ok(Some(Text::new(message).prompt()?))
}

pub fn prompt_password(message: &str) -> Result<Option<String>> {
    let password = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    Ok(Some(password))
}

/// Ask for a password that is being set, typed twice
pub fn prompt_new_password(message: &str) -> Result<Option<String>> {
    let password = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_custom_confirmation_message("Confirm password:")
        .with_custom_confirmation_error_message("The passwords don't match.")
        .prompt()?;
    Ok(Some(password))
}
