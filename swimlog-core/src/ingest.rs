//! Export-file ingestion.
//!
//! The mobile app exports the swim log as a JSON array of session records.
//! Parsing is tolerant where the app's own data is loose: unknown stroke
//! codes and missing optional fields degrade instead of failing the import.
//! The stats modules never touch the filesystem; this is the one boundary
//! where bytes become [`SwimSession`]s.

use crate::error::{Error, Result};
use crate::types::SwimSession;
use std::path::Path;

/// Parse an export file's contents.
pub fn parse_export(content: &str) -> Result<Vec<SwimSession>> {
    let sessions: Vec<SwimSession> = serde_json::from_str(content)?;
    tracing::debug!(count = sessions.len(), "parsed swim log export");
    Ok(sessions)
}

/// Read and parse an export file.
pub fn load_export(path: &Path) -> Result<Vec<SwimSession>> {
    let content = std::fs::read_to_string(path)?;
    parse_export(&content).map_err(|e| match e {
        Error::Json(json) => Error::Parse {
            path: path.display().to_string(),
            message: json.to_string(),
        },
        other => other,
    })
}
