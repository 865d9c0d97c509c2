use crate::model::RainClass;
use serde::{Deserialize, Serialize};

/// Result of rain-defense classification for one project evaluation.
/// Derived value, recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainDefenseResult {
    /// The class the project must meet: the stronger of the two components.
    pub final_class: RainClass,
    /// Class derived from building type, purpose and requirement flags.
    pub application_class: RainClass,
    /// Class derived from the location's climate statistics.
    pub weather_class: RainClass,
    /// Static explanation keyed by the final class letter.
    pub explanation: String,
}
