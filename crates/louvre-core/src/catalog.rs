use crate::error::LouvreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const BUILTIN_CATALOG_CSV: &str = include_str!("../../../data/louver-models.csv");

/// Descriptive attributes for one louvre model. Read-only for the process
/// lifetime once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Louver Model")]
    pub model: String,
    #[serde(rename = "Rain Defense Rating")]
    pub rain_defense_rating: String,
    #[serde(rename = "Airflow Rating")]
    pub airflow_rating: String,
    #[serde(rename = "Type")]
    pub louvre_type: String,
}

impl CatalogEntry {
    /// Entry substituted when a recommended model id is not in the catalog.
    pub fn placeholder(model: &str) -> CatalogEntry {
        CatalogEntry {
            model: model.to_string(),
            rain_defense_rating: "Not specified".to_string(),
            airflow_rating: "Not specified".to_string(),
            louvre_type: "Standard".to_string(),
        }
    }
}

/// The product catalog, keyed by model id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Load the catalog shipped with the crate.
    pub fn builtin() -> Result<Catalog, LouvreError> {
        Self::from_csv(BUILTIN_CATALOG_CSV.as_bytes())
    }

    /// Load a catalog from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Catalog, LouvreError> {
        let content = std::fs::read(path).map_err(|e| LouvreError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_csv(&content[..]).map_err(|e| LouvreError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse catalog rows from CSV. Rows without a model id are discarded;
    /// the first row wins on duplicate ids.
    pub fn from_csv(reader: impl std::io::Read) -> Result<Catalog, LouvreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = BTreeMap::new();
        let mut discarded = 0usize;
        for record in csv_reader.deserialize() {
            let entry: CatalogEntry = record?;
            if entry.model.is_empty() {
                discarded += 1;
                continue;
            }
            entries.entry(entry.model.clone()).or_insert(entry);
        }

        if entries.is_empty() {
            return Err(LouvreError::CatalogInvalid(
                "catalog contains no rows with a model id".into(),
            ));
        }

        debug!(
            models = entries.len(),
            discarded, "loaded louvre model catalog"
        );
        Ok(Catalog { entries })
    }

    /// Look up a model id. Unknown ids resolve to a placeholder entry
    /// rather than an error.
    pub fn lookup(&self, model: &str) -> CatalogEntry {
        self.entries
            .get(model)
            .cloned()
            .unwrap_or_else(|| CatalogEntry::placeholder(model))
    }

    pub fn contains(&self, model: &str) -> bool {
        self.entries.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}
