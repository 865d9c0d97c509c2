use serde::{Deserialize, Serialize};
use std::fmt;

/// Rain defense protection class, A strongest through D weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RainClass {
    A,
    B,
    C,
    D,
}

impl RainClass {
    /// Protection strength rank: A=4 down to D=1.
    pub fn rank(self) -> u8 {
        match self {
            RainClass::A => 4,
            RainClass::B => 3,
            RainClass::C => 2,
            RainClass::D => 1,
        }
    }

    /// Returns whichever of the two classes offers more protection.
    pub fn stronger(self, other: RainClass) -> RainClass {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }

    pub fn from_str_loose(s: &str) -> Option<RainClass> {
        // Accepts "A", "a", "Class A" and similar; anything that is not a
        // bare class letter after the optional prefix is rejected.
        let lower = s.trim().to_ascii_lowercase();
        let letter = lower.strip_prefix("class").unwrap_or(&lower).trim_start();
        match letter {
            "a" => Some(RainClass::A),
            "b" => Some(RainClass::B),
            "c" => Some(RainClass::C),
            "d" => Some(RainClass::D),
            _ => None,
        }
    }
}

impl fmt::Display for RainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainClass::A => write!(f, "A"),
            RainClass::B => write!(f, "B"),
            RainClass::C => write!(f, "C"),
            RainClass::D => write!(f, "D"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Residential,
    Commercial,
    Industrial,
    Warehouse,
    Healthcare,
    #[serde(rename = "Data Centre")]
    DataCentre,
}

impl BuildingType {
    pub fn from_str_loose(s: &str) -> Option<BuildingType> {
        let lower = s.trim().to_lowercase();
        if lower.contains("resident") {
            Some(BuildingType::Residential)
        } else if lower.contains("commercial") || lower.contains("office") {
            Some(BuildingType::Commercial)
        } else if lower.contains("industrial") {
            Some(BuildingType::Industrial)
        } else if lower.contains("warehouse") {
            Some(BuildingType::Warehouse)
        } else if lower.contains("health") || lower.contains("hospital") {
            Some(BuildingType::Healthcare)
        } else if lower.contains("data") {
            Some(BuildingType::DataCentre)
        } else {
            None
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingType::Residential => write!(f, "Residential"),
            BuildingType::Commercial => write!(f, "Commercial"),
            BuildingType::Industrial => write!(f, "Industrial"),
            BuildingType::Warehouse => write!(f, "Warehouse"),
            BuildingType::Healthcare => write!(f, "Healthcare"),
            BuildingType::DataCentre => write!(f, "Data Centre"),
        }
    }
}

/// Primary purpose of the louvred opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    #[serde(rename = "Natural ventilation")]
    NaturalVentilation,
    #[serde(rename = "Mechanical intake")]
    MechanicalIntake,
    #[serde(rename = "Mechanical exhaust")]
    MechanicalExhaust,
    Screening,
    #[serde(rename = "Weather protection")]
    WeatherProtection,
}

impl Purpose {
    pub fn from_str_loose(s: &str) -> Option<Purpose> {
        let lower = s.trim().to_lowercase();
        if lower.contains("natural") {
            Some(Purpose::NaturalVentilation)
        } else if lower.contains("intake") {
            Some(Purpose::MechanicalIntake)
        } else if lower.contains("exhaust") {
            Some(Purpose::MechanicalExhaust)
        } else if lower.contains("screen") {
            Some(Purpose::Screening)
        } else if lower.contains("weather") || lower.contains("protection") {
            Some(Purpose::WeatherProtection)
        } else {
            None
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purpose::NaturalVentilation => write!(f, "Natural ventilation"),
            Purpose::MechanicalIntake => write!(f, "Mechanical intake"),
            Purpose::MechanicalExhaust => write!(f, "Mechanical exhaust"),
            Purpose::Screening => write!(f, "Screening"),
            Purpose::WeatherProtection => write!(f, "Weather protection"),
        }
    }
}

/// What the customer wants the selection to optimise for. Serde names match
/// the option labels used by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformancePriority {
    #[serde(rename = "Maximum airflow")]
    MaximumAirflow,
    #[serde(rename = "Maximum weather protection")]
    MaximumProtection,
    #[serde(rename = "Balanced cost/performance")]
    Balanced,
    #[serde(rename = "Lowest cost")]
    LowestCost,
}

impl PerformancePriority {
    pub fn from_str_loose(s: &str) -> Option<PerformancePriority> {
        let lower = s.trim().to_lowercase();
        if lower.contains("airflow") {
            Some(PerformancePriority::MaximumAirflow)
        } else if lower.contains("protection") || lower.contains("weather") {
            Some(PerformancePriority::MaximumProtection)
        } else if lower.contains("balanced") {
            Some(PerformancePriority::Balanced)
        } else if lower.contains("cost") {
            Some(PerformancePriority::LowestCost)
        } else {
            None
        }
    }
}

impl fmt::Display for PerformancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformancePriority::MaximumAirflow => write!(f, "Maximum airflow"),
            PerformancePriority::MaximumProtection => write!(f, "Maximum weather protection"),
            PerformancePriority::Balanced => write!(f, "Balanced cost/performance"),
            PerformancePriority::LowestCost => write!(f, "Lowest cost"),
        }
    }
}

/// Site and project flags collected on the "special requirements" screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRequirements {
    #[serde(default)]
    pub coastal: bool,
    #[serde(default)]
    pub acoustic: bool,
    #[serde(default)]
    pub security: bool,
    #[serde(default)]
    pub high_wind: bool,
    #[serde(default)]
    pub hurricane: bool,
}

/// Performance standards the project is contractually required to meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStandards {
    #[serde(default)]
    pub water_penetration: bool,
    #[serde(default)]
    pub air_movement: bool,
    #[serde(default)]
    pub wind_load: bool,
}

/// Everything the intake form collects about a project. Immutable once
/// handed to the engines for a given evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectProfile {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub building_type: Option<BuildingType>,
    #[serde(default)]
    pub purpose: Option<Purpose>,
    #[serde(default)]
    pub priority: Option<PerformancePriority>,
    #[serde(default)]
    pub special: SpecialRequirements,
    #[serde(default)]
    pub standards: PerformanceStandards,
}

/// Resolved latitude/longitude. The weather service sends these as a
/// `[lat, lon]` pair, so that is the wire shape here too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl From<[f64; 2]> for Coordinates {
    fn from(pair: [f64; 2]) -> Self {
        Coordinates {
            lat: pair[0],
            lon: pair[1],
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lon]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Climate statistics for a resolved location. Fetched once per distinct
/// location and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Average daily rainfall in mm.
    #[serde(default)]
    pub average_rainfall: Option<f64>,
    /// Average wind speed in m/s.
    #[serde(default)]
    pub average_wind_speed: Option<f64>,
    /// Average wind direction in degrees.
    #[serde(default)]
    pub average_wind_direction: Option<f64>,
    /// Average temperature in degrees C.
    #[serde(default)]
    pub average_temperature: Option<f64>,
    /// Rain class the service recommends for this climate, if it sent one.
    #[serde(default)]
    pub recommended_rain_class: Option<RainClass>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}
