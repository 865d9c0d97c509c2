use crate::error::LouvreError;
use crate::patterns::schema::PatternSetDef;

const STANDARD_PATTERNS_JSON: &str = include_str!("../../../../patterns/standard.json");

/// Available predefined pattern sets.
pub const PRESETS: &[&str] = &["standard"];

/// Load a predefined pattern set by name.
pub fn load_preset(name: &str) -> Result<PatternSetDef, LouvreError> {
    match name {
        "standard" => {
            let set: PatternSetDef = serde_json::from_str(STANDARD_PATTERNS_JSON)?;
            Ok(set)
        }
        _ => Err(LouvreError::PatternSetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::validate_pattern_set;

    #[test]
    fn test_load_standard_preset() {
        let set = load_preset("standard").unwrap();
        assert_eq!(set.fallback_models.len(), 3);
        assert!(!set.patterns.is_empty());
    }

    #[test]
    fn test_standard_preset_validates() {
        let set = load_preset("standard").unwrap();
        validate_pattern_set(&set).unwrap();
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
