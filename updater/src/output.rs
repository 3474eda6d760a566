//! Forecast document writer

use std::fs;
use std::path::Path;

use shared::models::ForecastDocument;

use crate::error::{AppError, AppResult};

/// Write the forecast document as pretty-printed JSON
///
/// Creates parent directories as needed so a fresh checkout can run the
/// updater without preparing the output path first.
pub fn write_document(path: &Path, document: &ForecastDocument) -> AppResult<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| AppError::Internal(format!("Failed to serialize forecast: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;
    Ok(())
}
