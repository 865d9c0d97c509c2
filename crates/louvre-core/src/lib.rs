pub mod catalog;
pub mod classify;
pub mod error;
pub mod model;
pub mod patterns;
pub mod recommend;
pub mod trace;
pub mod weather;

use catalog::Catalog;
use classify::outcome::RainDefenseResult;
use model::{ProjectProfile, WeatherSnapshot};
use patterns::schema::PatternSetDef;
use recommend::outcome::Recommendation;
use serde::{Deserialize, Serialize};
use trace::SelectionTrace;

/// Everything one selection run produces: the required rain defense class,
/// the ranked product triple and the decision trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    pub rain_defense: RainDefenseResult,
    pub recommendations: Vec<Recommendation>,
    pub trace: SelectionTrace,
}

/// Main API entry point: evaluate a project profile against a pattern set
/// and catalog, with optional climate data for the resolved location.
///
/// Runs the rain-defense classifier and the pattern recommender over the
/// same inputs and records every decision in the trace. Pure function of
/// its arguments.
pub fn select(
    profile: &ProjectProfile,
    weather: Option<&WeatherSnapshot>,
    patterns: &PatternSetDef,
    catalog: &Catalog,
) -> SelectionResult {
    let mut trace = SelectionTrace::default();

    let rain_defense = classify::engine::classify_traced(profile, weather, &mut trace);
    let recommendations =
        recommend::engine::recommend_traced(profile, weather, patterns, catalog, &mut trace);

    SelectionResult {
        rain_defense,
        recommendations,
        trace,
    }
}
