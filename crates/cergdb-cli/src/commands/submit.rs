//! `cergdb submit` command implementation
//!
//! Builds a submission record from the given result files and uploads it.

use crate::api::ApiClient;
use crate::commands::{display_body, send};
use crate::error::Result;
use crate::submission::SubmissionFiles;
use cergdb_common::types::Submission;
use colored::Colorize;
use tracing::info;

/// Submit benchmark results
pub async fn run(
    mut api: ApiClient,
    id: String,
    name: String,
    category: String,
    files: SubmissionFiles,
) -> Result<()> {
    // Load files before logging in so a typo in a path fails fast
    let submission = files.apply(Submission::new(id, name).with_category(category))?;
    info!(
        id = %submission.id,
        timing_rows = submission.timing.as_ref().map_or(0, Vec::len),
        "Prepared submission"
    );

    api.login(None, None).await?;

    let body = send("Submitting results...", api.submit(&submission)).await?;

    println!("{} results submitted: {}", "✓".green(), display_body(&body));
    Ok(())
}
