pub mod builtin;
pub mod schema;

use crate::error::LouvreError;
use schema::PatternSetDef;
use std::path::Path;

/// Load a pattern set from a JSON file.
pub fn load_pattern_set(path: &Path) -> Result<PatternSetDef, LouvreError> {
    let content = std::fs::read_to_string(path).map_err(|e| LouvreError::PatternSetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_pattern_set(&content, path)
}

/// Parse a pattern set from a JSON string.
pub fn parse_pattern_set(json: &str, source: &Path) -> Result<PatternSetDef, LouvreError> {
    let set: PatternSetDef =
        serde_json::from_str(json).map_err(|e| LouvreError::PatternSetLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_pattern_set(&set)?;
    Ok(set)
}

/// Parse a pattern set from a JSON string (no file path context).
pub fn parse_pattern_set_str(json: &str) -> Result<PatternSetDef, LouvreError> {
    let set: PatternSetDef = serde_json::from_str(json).map_err(LouvreError::Json)?;
    validate_pattern_set(&set)?;
    Ok(set)
}

/// Validate that a pattern set is well-formed.
pub fn validate_pattern_set(set: &PatternSetDef) -> Result<(), LouvreError> {
    if set.fallback_models.len() != 3 {
        return Err(LouvreError::PatternSetInvalid(format!(
            "fallback_models must contain exactly 3 model ids, found {}",
            set.fallback_models.len()
        )));
    }

    if set.patterns.is_empty() {
        return Err(LouvreError::PatternSetInvalid(
            "patterns must not be empty".into(),
        ));
    }

    for pattern in &set.patterns {
        if pattern.name.is_empty() {
            return Err(LouvreError::PatternSetInvalid(
                "pattern name must not be empty".into(),
            ));
        }

        if pattern.model.is_empty() {
            return Err(LouvreError::PatternSetInvalid(format!(
                "pattern '{}' has no model id",
                pattern.name
            )));
        }

        // A pattern with an empty condition would shadow every pattern
        // after it. The catch-all behaviour belongs to fallback_models.
        if pattern.when.is_empty() {
            return Err(LouvreError::PatternSetInvalid(format!(
                "pattern '{}' has an empty condition",
                pattern.name
            )));
        }
    }

    Ok(())
}
