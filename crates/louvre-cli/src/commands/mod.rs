pub mod classify;
pub mod patterns;
pub mod recommend;
pub mod weather;

use clap::Args;
use louvre_core::error::LouvreError;
use louvre_core::model::{
    BuildingType, PerformancePriority, ProjectProfile, Purpose, WeatherSnapshot,
};
use louvre_core::weather::{WeatherClient, DEFAULT_BASE_URL};
use std::path::{Path, PathBuf};

/// Free-text profile overrides for classify/recommend. Parsed tolerantly,
/// so "office" means Commercial and "balanced" means "Balanced
/// cost/performance"; applied on top of the profile file.
#[derive(Debug, Default, Args)]
pub struct ProfileOverrides {
    /// Building type, free text (e.g. "office", "warehouse")
    #[arg(long, value_name = "TEXT")]
    pub building: Option<String>,

    /// Opening purpose, free text (e.g. "intake", "screening")
    #[arg(long, value_name = "TEXT")]
    pub purpose: Option<String>,

    /// Performance priority, free text (e.g. "balanced", "lowest cost")
    #[arg(long, value_name = "TEXT")]
    pub priority: Option<String>,
}

impl ProfileOverrides {
    pub fn apply(&self, profile: &mut ProjectProfile) -> Result<(), LouvreError> {
        if let Some(ref text) = self.building {
            profile.building_type = Some(BuildingType::from_str_loose(text).ok_or_else(|| {
                LouvreError::UnrecognisedInput {
                    field: "building type",
                    value: text.clone(),
                }
            })?);
        }
        if let Some(ref text) = self.purpose {
            profile.purpose = Some(Purpose::from_str_loose(text).ok_or_else(|| {
                LouvreError::UnrecognisedInput {
                    field: "purpose",
                    value: text.clone(),
                }
            })?);
        }
        if let Some(ref text) = self.priority {
            profile.priority =
                Some(PerformancePriority::from_str_loose(text).ok_or_else(|| {
                    LouvreError::UnrecognisedInput {
                        field: "performance priority",
                        value: text.clone(),
                    }
                })?);
        }
        Ok(())
    }
}

/// Service base URL: the --api flag, then LOUVRE_WEATHER_URL, then the
/// default local address.
pub fn api_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("LOUVRE_WEATHER_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

pub fn load_profile(path: &Path) -> Result<ProjectProfile, LouvreError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Weather input for classify/recommend: a snapshot file, a live lookup
/// against the service, or nothing.
pub fn load_weather(
    file: Option<PathBuf>,
    location: Option<String>,
    api: Option<String>,
) -> Result<Option<WeatherSnapshot>, LouvreError> {
    if let Some(path) = file {
        let bytes = std::fs::read(&path)?;
        return Ok(Some(serde_json::from_slice(&bytes)?));
    }
    let Some(location) = location else {
        return Ok(None);
    };
    let client = WeatherClient::new(api_base_url(api))?;
    let resolved = runtime()?.block_on(client.resolve(&location))?;
    Ok(Some(resolved.weather))
}

pub fn runtime() -> Result<tokio::runtime::Runtime, LouvreError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_loose_values() {
        let overrides = ProfileOverrides {
            building: Some("Commercial office building".to_string()),
            purpose: Some("mechanical intake".to_string()),
            priority: Some("balanced".to_string()),
        };
        let mut profile = ProjectProfile::default();
        overrides.apply(&mut profile).unwrap();
        assert_eq!(profile.building_type, Some(BuildingType::Commercial));
        assert_eq!(profile.purpose, Some(Purpose::MechanicalIntake));
        assert_eq!(profile.priority, Some(PerformancePriority::Balanced));
    }

    #[test]
    fn test_empty_overrides_leave_profile_untouched() {
        let mut profile = ProjectProfile {
            building_type: Some(BuildingType::Warehouse),
            ..Default::default()
        };
        ProfileOverrides::default().apply(&mut profile).unwrap();
        assert_eq!(profile.building_type, Some(BuildingType::Warehouse));
        assert!(profile.purpose.is_none());
    }

    #[test]
    fn test_unrecognised_override_is_an_error() {
        let overrides = ProfileOverrides {
            building: Some("igloo".to_string()),
            ..Default::default()
        };
        let err = overrides
            .apply(&mut ProjectProfile::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LouvreError::UnrecognisedInput {
                field: "building type",
                ..
            }
        ));
    }
}
