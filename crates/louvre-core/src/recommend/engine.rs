use crate::catalog::Catalog;
use crate::model::{ProjectProfile, RainClass, WeatherSnapshot};
use crate::patterns::schema::{Confidence, PatternDef, PatternSetDef};
use crate::recommend::outcome::{Recommendation, Tier};
use crate::trace::{SelectionTrace, TraceStepType};

/// Average wind speed (m/s) above which a wind advisory note is attached.
const WIND_NOTE_THRESHOLD_MS: f64 = 20.0;

/// How many recommendations a run always produces.
const RECOMMENDATION_COUNT: usize = 3;

/// An intermediate pick before tier assignment and catalog resolution.
struct Pick {
    model: String,
    confidence: Confidence,
    explanation: String,
    reasoning: String,
    alternatives: Vec<String>,
}

impl Pick {
    fn primary_of(pattern: &PatternDef) -> Pick {
        Pick {
            model: pattern.model.clone(),
            confidence: pattern.confidence,
            explanation: pattern.explanation.clone(),
            reasoning: pattern.reasoning.clone(),
            alternatives: pattern.alternatives.clone(),
        }
    }

    /// The pattern's first alternative, one confidence step down.
    fn alternative_of(pattern: &PatternDef) -> Option<Pick> {
        let model = pattern.alternatives.first()?.clone();
        Some(Pick {
            model,
            confidence: pattern.confidence.downgraded(),
            explanation: format!("Alternative to {}: {}", pattern.model, pattern.explanation),
            reasoning: pattern.reasoning.clone(),
            alternatives: Vec::new(),
        })
    }

    fn fallback(model: &str) -> Pick {
        Pick {
            model: model.to_string(),
            confidence: Confidence::Low,
            explanation: "General-purpose selection from the fallback range.".to_string(),
            reasoning: "No higher-confidence pattern produced a suggestion for this slot."
                .to_string(),
            alternatives: Vec::new(),
        }
    }
}

/// Produce exactly three ranked recommendations for a profile.
///
/// Pure function of (profile, weather, pattern set, catalog): identical
/// inputs always yield identical output order and content.
pub fn recommend(
    profile: &ProjectProfile,
    weather: Option<&WeatherSnapshot>,
    patterns: &PatternSetDef,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let mut trace = SelectionTrace::default();
    recommend_traced(profile, weather, patterns, catalog, &mut trace)
}

/// Recommend while appending each decision to `trace`.
pub fn recommend_traced(
    profile: &ProjectProfile,
    weather: Option<&WeatherSnapshot>,
    patterns: &PatternSetDef,
    catalog: &Catalog,
    trace: &mut SelectionTrace,
) -> Vec<Recommendation> {
    // Evaluate every pattern; multiple may match.
    let mut matching: Vec<&PatternDef> = patterns
        .patterns
        .iter()
        .filter(|p| p.when.matches(profile))
        .collect();

    for p in &matching {
        trace.step(
            TraceStepType::PatternMatch,
            format!("Pattern '{}' matched ({})", p.name, p.confidence),
        );
    }

    // Stable sort: ties keep original pattern-list order.
    matching.sort_by(|a, b| b.confidence.rank().cmp(&a.confidence.rank()));
    if matching.len() > 1 {
        trace.step(
            TraceStepType::ConfidenceSort,
            format!(
                "Ordered by confidence: {}",
                matching
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
    }

    let mut picks = build_picks(&matching, patterns, trace);
    pad_picks(&mut picks, patterns, trace);

    let notes = weather_notes(weather);

    picks
        .into_iter()
        .enumerate()
        .map(|(i, pick)| {
            let entry = catalog.lookup(&pick.model);
            if entry.rain_defense_rating == "Not specified" {
                trace.step(
                    TraceStepType::CatalogLookup,
                    format!("Model {} not in catalog; placeholder attributes used", pick.model),
                );
            }
            Recommendation {
                model: pick.model,
                confidence: pick.confidence,
                tier: Tier::from_index(i),
                explanation: pick.explanation,
                reasoning: pick.reasoning,
                weather_notes: notes.clone(),
                alternatives: pick.alternatives,
                catalog: entry,
            }
        })
        .collect()
}

fn build_picks(
    matching: &[&PatternDef],
    patterns: &PatternSetDef,
    trace: &mut SelectionTrace,
) -> Vec<Pick> {
    let mut picks = Vec::with_capacity(RECOMMENDATION_COUNT);

    let Some(best) = matching.first() else {
        // No pattern matched: the designated general-purpose default.
        trace.step(
            TraceStepType::FallbackPad,
            "No pattern matched; default outcome selected",
        );
        picks.push(Pick::fallback(&patterns.fallback_models[0]));
        return picks;
    };

    picks.push(Pick::primary_of(best));

    // Secondary: the best pattern's first alternative, else the runner-up's
    // primary.
    if let Some(alt) = Pick::alternative_of(best) {
        picks.push(alt);
    } else if let Some(second) = matching.get(1) {
        picks.push(Pick::primary_of(second));
    }

    // Tertiary: the runner-up's first alternative, else the third pattern's
    // primary.
    if let Some(alt) = matching.get(1).and_then(|p| Pick::alternative_of(p)) {
        picks.push(alt);
    } else if let Some(third) = matching.get(2) {
        picks.push(Pick::primary_of(third));
    }

    picks
}

/// Pad to exactly three picks from the fixed fallback list, preferring
/// models not already recommended.
fn pad_picks(picks: &mut Vec<Pick>, patterns: &PatternSetDef, trace: &mut SelectionTrace) {
    while picks.len() < RECOMMENDATION_COUNT {
        let used: Vec<&str> = picks.iter().map(|p| p.model.as_str()).collect();
        let model = patterns
            .fallback_models
            .iter()
            .find(|m| !used.contains(&m.as_str()))
            .unwrap_or(&patterns.fallback_models[picks.len() % patterns.fallback_models.len()]);
        trace.step(
            TraceStepType::FallbackPad,
            format!("Padded slot {} with fallback model {}", picks.len() + 1, model),
        );
        picks.push(Pick::fallback(model));
    }
    picks.truncate(RECOMMENDATION_COUNT);
}

/// Climate advisories derived from the snapshot; the same list is attached
/// to every recommendation in the triple.
fn weather_notes(weather: Option<&WeatherSnapshot>) -> Vec<String> {
    let Some(snapshot) = weather else {
        return Vec::new();
    };

    let mut notes = Vec::new();
    if snapshot.recommended_rain_class == Some(RainClass::A) {
        notes.push(
            "Local climate calls for Class A rain defense; verify the selected model's rating."
                .to_string(),
        );
    }
    if let Some(wind) = snapshot.average_wind_speed {
        if wind > WIND_NOTE_THRESHOLD_MS {
            notes.push(format!(
                "Average wind speed {:.1} m/s exceeds {:.0} m/s; check wind-load performance.",
                wind, WIND_NOTE_THRESHOLD_MS
            ));
        }
    }
    notes
}
