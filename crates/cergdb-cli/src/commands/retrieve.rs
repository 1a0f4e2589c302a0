//! `cergdb retrieve` command implementation
//!
//! Downloads stored results and writes the server's JSON answer to a file.

use crate::api::{ApiClient, RetrieveQuery};
use crate::commands::send;
use crate::error::Result;
use crate::progress::format_bytes;
use colored::Colorize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Retrieve results into `output`
pub async fn run(mut api: ApiClient, output: PathBuf, query: RetrieveQuery) -> Result<()> {
    api.login(None, None).await?;

    let body = send("Retrieving results...", api.retrieve(&query)).await?;
    let body = body.unwrap_or_else(|| {
        warn!("Server returned no JSON body; writing null");
        Value::Null
    });

    let size = write_json(&output, &body)?;
    debug!(path = %output.display(), size, "Wrote results");

    let count = body.as_array().map(Vec::len);
    match count {
        Some(n) => println!(
            "{} {} result(s) written to {} ({})",
            "✓".green(),
            n,
            output.display(),
            format_bytes(size)
        ),
        None => println!(
            "{} results written to {} ({})",
            "✓".green(),
            output.display(),
            format_bytes(size)
        ),
    }

    Ok(())
}

/// Write `value` as pretty JSON, returning the number of bytes written
pub fn write_json(path: &Path, value: &Value) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(std::fs::metadata(path)?.len())
}
