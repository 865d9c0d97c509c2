use crate::model::{BuildingType, PerformancePriority, ProjectProfile, Purpose};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern set: the ordered list of recommendation rules evaluated against
/// a project profile, plus the fallback models used to pad results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Exactly three model ids, in pad order. The first doubles as the
    /// default outcome when no pattern matches.
    pub fallback_models: Vec<String>,
    pub patterns: Vec<PatternDef>,
}

/// One condition -> recommendation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    pub name: String,
    pub when: ConditionDef,
    /// Primary model id recommended when the condition matches.
    pub model: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub confidence: Confidence,
    pub explanation: String,
    pub reasoning: String,
}

/// Predicate over a project profile. Enum lists are any-of (empty matches
/// everything); requirement flags are all-of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionDef {
    #[serde(default)]
    pub building_types: Vec<BuildingType>,
    #[serde(default)]
    pub purposes: Vec<Purpose>,
    #[serde(default)]
    pub priorities: Vec<PerformancePriority>,
    #[serde(default)]
    pub requires: Vec<RequirementFlag>,
}

impl ConditionDef {
    pub fn is_empty(&self) -> bool {
        self.building_types.is_empty()
            && self.purposes.is_empty()
            && self.priorities.is_empty()
            && self.requires.is_empty()
    }

    pub fn matches(&self, profile: &ProjectProfile) -> bool {
        if !self.building_types.is_empty() {
            match profile.building_type {
                Some(bt) if self.building_types.contains(&bt) => {}
                _ => return false,
            }
        }
        if !self.purposes.is_empty() {
            match profile.purpose {
                Some(p) if self.purposes.contains(&p) => {}
                _ => return false,
            }
        }
        if !self.priorities.is_empty() {
            match profile.priority {
                Some(p) if self.priorities.contains(&p) => {}
                _ => return false,
            }
        }
        self.requires.iter().all(|flag| flag.is_set(profile))
    }
}

/// A boolean requirement the profile must have set for the condition to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementFlag {
    Coastal,
    Acoustic,
    Security,
    HighWind,
    Hurricane,
    WaterPenetration,
    AirMovement,
    WindLoad,
}

impl fmt::Display for RequirementFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequirementFlag::Coastal => "coastal",
            RequirementFlag::Acoustic => "acoustic",
            RequirementFlag::Security => "security",
            RequirementFlag::HighWind => "high_wind",
            RequirementFlag::Hurricane => "hurricane",
            RequirementFlag::WaterPenetration => "water_penetration",
            RequirementFlag::AirMovement => "air_movement",
            RequirementFlag::WindLoad => "wind_load",
        };
        write!(f, "{name}")
    }
}

impl RequirementFlag {
    pub fn is_set(self, profile: &ProjectProfile) -> bool {
        match self {
            RequirementFlag::Coastal => profile.special.coastal,
            RequirementFlag::Acoustic => profile.special.acoustic,
            RequirementFlag::Security => profile.special.security,
            RequirementFlag::HighWind => profile.special.high_wind,
            RequirementFlag::Hurricane => profile.special.hurricane,
            RequirementFlag::WaterPenetration => profile.standards.water_penetration,
            RequirementFlag::AirMovement => profile.standards.air_movement,
            RequirementFlag::WindLoad => profile.standards.wind_load,
        }
    }
}

/// Qualitative certainty attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn rank(self) -> u8 {
        match self {
            Confidence::High => 3,
            Confidence::Medium => 2,
            Confidence::Low => 1,
        }
    }

    /// One-step downgrade used for alternative picks: High -> Medium ->
    /// Low -> Low.
    pub fn downgraded(self) -> Confidence {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium => Confidence::Low,
            Confidence::Low => Confidence::Low,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}
