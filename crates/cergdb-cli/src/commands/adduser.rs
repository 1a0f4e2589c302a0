//! `cergdb adduser` command implementation
//!
//! Logs in as an administrator and registers a new account.

use crate::api::ApiClient;
use crate::commands::{display_body, send};
use crate::config::env_var_name;
use crate::credentials;
use crate::error::{CliError, Result};
use colored::Colorize;

/// Register `new_username`
pub async fn run(
    mut api: ApiClient,
    new_username: String,
    admin_username: String,
    admin_password: Option<String>,
    new_password: Option<String>,
) -> Result<()> {
    if new_username.trim().is_empty() {
        return Err(CliError::invalid_input("The new user name is empty"));
    }

    // The global --password belongs to the operator's own account and is
    // never sent as the administrator password
    let interactive = api.is_interactive();
    let admin_password = credentials::resolve(admin_password, None, || {
        if interactive {
            credentials::prompt_password(&format!("Password for {}:", admin_username))
        } else {
            Ok(None)
        }
    })?
    .ok_or_else(|| {
        CliError::authentication(format!(
            "no password given for administrator '{}' (use --admin-password or {})",
            admin_username,
            env_var_name("admin-password")
        ))
    })?;

    api.login(Some(&admin_username), Some(&admin_password))
        .await?;

    let password = credentials::resolve(new_password, None, || {
        if interactive {
            credentials::prompt_new_password(&format!("Password for new user {}:", new_username))
        } else {
            Ok(None)
        }
    })?
    .ok_or_else(|| {
        CliError::invalid_input(format!(
            "No password given for new user '{}' (use --new-password or CERGDB_NEW_PASSWORD)",
            new_username
        ))
    })?;

    let body = send("Registering user...", api.add_user(&new_username, &password)).await?;

    println!("{} user added: {}", "✓".green(), display_body(&body));
    Ok(())
}
