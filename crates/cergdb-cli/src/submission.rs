//! Building submission records from result files
//!
//! - timing results: CSV with a header row, one mapping per data row
//! - synthesis results: any JSON document
//! - synthesis settings: JSON object merged into the metadata
//! - design description: TOML document stored under `metadata.design`

use crate::error::{CliError, Result};
use cergdb_common::types::{Submission, TimingRow};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Metadata key holding the design description
pub const DESIGN_KEY: &str = "design";

/// Inputs for one submission, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SubmissionFiles {
    pub timing_results: Option<PathBuf>,
    pub synthesis_results: Option<PathBuf>,
    pub synthesis_settings: Option<PathBuf>,
    pub design_toml: Option<PathBuf>,
}

impl SubmissionFiles {
    /// Load every given file into `submission`
    pub fn apply(&self, mut submission: Submission) -> Result<Submission> {
        let design = self.design_toml.as_deref().map(load_toml).transpose()?;
        let settings = self
            .synthesis_settings
            .as_deref()
            .map(load_json_object)
            .transpose()?;
        submission.metadata = merge_metadata(submission.metadata, design, settings);

        if let Some(path) = &self.timing_results {
            submission.timing = Some(load_timing_csv(path)?);
        }
        if let Some(path) = &self.synthesis_results {
            submission.synthesis = Some(load_json(path)?);
        }

        Ok(submission)
    }
}

/// Merge the design description and synthesis settings into `metadata`
///
/// The design goes under [`DESIGN_KEY`] first; settings keys are inserted
/// afterwards and replace anything already there.
pub fn merge_metadata(
    mut metadata: Map<String, Value>,
    design: Option<Value>,
    settings: Option<Map<String, Value>>,
) -> Map<String, Value> {
    if let Some(design) = design {
        metadata.insert(DESIGN_KEY.to_string(), design);
    }
    if let Some(settings) = settings {
        metadata.extend(settings);
    }
    metadata
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read timing results; values are kept as strings
///
/// Short rows get `null` for their missing columns. Fields past the last
/// header are dropped.
pub fn load_timing_csv(path: &Path) -> Result<Vec<TimingRow>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            warn!(
                path = %path.display(),
                line = record.position().map(|p| p.line()),
                extra = record.len() - headers.len(),
                "Ignoring fields without a header"
            );
        }

        let row: TimingRow = headers
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let value = record
                    .get(i)
                    .map_or(Value::Null, |v| Value::String(v.to_string()));
                (key.to_string(), value)
            })
            .collect();
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded timing results");
    Ok(rows)
}

pub fn load_json(path: &Path) -> Result<Value> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a JSON file whose top level must be an object
pub fn load_json_object(path: &Path) -> Result<Map<String, Value>> {
    match load_json(path)? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::invalid_input(format!(
            "'{}' must contain a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

/// Read a TOML file as a JSON value
pub fn load_toml(path: &Path) -> Result<Value> {
    let content = read_file(path)?;
    Ok(toml::from_str(&content)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
