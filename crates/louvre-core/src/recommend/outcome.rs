use crate::catalog::CatalogEntry;
use crate::patterns::schema::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a recommendation within the returned triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    pub fn from_index(i: usize) -> Tier {
        match i {
            0 => Tier::Primary,
            1 => Tier::Secondary,
            _ => Tier::Tertiary,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Primary => write!(f, "Primary"),
            Tier::Secondary => write!(f, "Secondary"),
            Tier::Tertiary => write!(f, "Tertiary"),
        }
    }
}

/// One ranked product suggestion. Produced fresh on every recommendation
/// run; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended louvre model id.
    pub model: String,
    pub confidence: Confidence,
    pub tier: Tier,
    /// Short user-facing explanation of why this model was picked.
    pub explanation: String,
    /// Longer reasoning from the matched pattern.
    pub reasoning: String,
    /// Climate advisories for the resolved location; identical across the
    /// whole triple.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weather_notes: Vec<String>,
    /// Alternative model ids from the source pattern.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    /// Catalog attributes for the recommended model (placeholder when the
    /// id is not in the catalog).
    pub catalog: CatalogEntry,
}
