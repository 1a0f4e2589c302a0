//! `cergdb delete` command implementation

use crate::api::ApiClient;
use crate::commands::{display_body, send};
use crate::error::{CliError, Result};
use colored::Colorize;
use inquire::Confirm;

/// Delete the entry `id`, asking first unless `yes` is set
pub async fn run(mut api: ApiClient, id: String, yes: bool) -> Result<()> {
    if !yes {
        if !api.is_interactive() {
            return Err(CliError::invalid_input(format!(
                "Refusing to delete '{}' without confirmation; pass --yes",
                id
            )));
        }

        let confirmed = Confirm::new(&format!("Delete entry '{}' from the server?", id))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    api.login(None, None).await?;

    let body = send("Deleting entry...", api.delete(&id)).await?;

    println!("{} deleted {}: {}", "✓".green(), id.bold(), display_body(&body));
    Ok(())
}
