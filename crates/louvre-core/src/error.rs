use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LouvreError {
    #[error("failed to load pattern set from {path}: {reason}")]
    PatternSetLoad { path: PathBuf, reason: String },

    #[error("invalid pattern set: {0}")]
    PatternSetInvalid(String),

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("location '{0}' is too short to resolve (minimum 3 characters)")]
    LocationTooShort(String),

    #[error("unrecognised {field}: '{value}'")]
    UnrecognisedInput { field: &'static str, value: String },

    #[error("weather service error: {0}")]
    Service(String),

    #[error("malformed service response: missing field '{0}'")]
    MissingField(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
