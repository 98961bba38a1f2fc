pub mod models;

use crate::error::AppError;
use models::MatchDto;
use std::fs;
use std::path::Path;

/// Read a JSON array of match records from disk.
pub fn load_matches(path: &Path) -> Result<Vec<MatchDto>, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::InputError(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| AppError::JsonError(format!("{}: {}", path.display(), e)))
}
