//! CERGDB CLI - Main entry point

use cergdb_cli::api::RetrieveQuery;
use cergdb_cli::submission::SubmissionFiles;
use cergdb_cli::{Cli, Commands};
use cergdb_common::logging::{init_logging, LogConfig, LogLevel};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // CERGDB_* variables may come from a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Bare `cergdb` shows the help through clap; this covers flags without a command
    let Some(command) = cli.command.as_ref() else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    let log_config = LogConfig::builder()
        .level(LogLevel::Warn)
        .log_file_prefix("cergdb")
        .build();

    // CERGDB_LOG_* fills in the defaults, --verbose wins over CERGDB_LOG_LEVEL.
    // A broken logging setup does not stop the command.
    let mut log_config = log_config.clone().merge_env().unwrap_or(log_config);
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    let _log_guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli, command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, command: &Commands) -> cergdb_cli::Result<()> {
    let api = cli.api_client()?;

    match command {
        Commands::Submit {
            submission_id,
            submission_name,
            submission_category,
            timing_results,
            synthesis_settings,
            synthesis_results,
            design_toml,
        } => {
            let files = SubmissionFiles {
                timing_results: timing_results.clone(),
                synthesis_results: synthesis_results.clone(),
                synthesis_settings: synthesis_settings.clone(),
                design_toml: design_toml.clone(),
            };
            cergdb_cli::commands::submit::run(
                api,
                submission_id.clone(),
                submission_name.clone(),
                submission_category.clone(),
                files,
            )
            .await
        }

        Commands::AddUser {
            new_username,
            admin_username,
            admin_password,
            new_password,
        } => {
            cergdb_cli::commands::adduser::run(
                api,
                new_username.clone(),
                admin_username.clone(),
                admin_password.clone(),
                new_password.clone(),
            )
            .await
        }

        Commands::Retrieve {
            output,
            limit,
            offset,
            filter,
        } => {
            let query = RetrieveQuery {
                limit: *limit,
                offset: *offset,
                filter: filter.clone(),
            };
            cergdb_cli::commands::retrieve::run(api, output.clone(), query).await
        }

        Commands::Delete { id, yes } => {
            cergdb_cli::commands::delete::run(api, id.clone(), *yes).await
        }

        Commands::Rename { current_id, new_id } => {
            cergdb_cli::commands::rename::run(api, current_id.clone(), new_id.clone()).await
        }

        Commands::Profile => cergdb_cli::commands::profile::run(api).await,
    }
}
