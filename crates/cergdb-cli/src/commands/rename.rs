//! `cergdb rename` command implementation

use crate::api::ApiClient;
use crate::commands::send;
use crate::error::{CliError, Result};
use colored::Colorize;

/// Rename entry `current_id` to `new_id`
pub async fn run(mut api: ApiClient, current_id: String, new_id: String) -> Result<()> {
    if current_id == new_id {
        return Err(CliError::invalid_input("The new id is the same as the current id"));
    }

    api.login(None, None).await?;

    send("Renaming entry...", api.rename(&current_id, &new_id)).await?;

    println!("{} renamed {} -> {}", "✓".green(), current_id, new_id.bold());
    Ok(())
}
