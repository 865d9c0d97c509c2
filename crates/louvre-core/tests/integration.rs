//! Integration tests for the select() end-to-end pipeline: classifier +
//! recommender + catalog over the builtin pattern set.

use louvre_core::catalog::Catalog;
use louvre_core::model::{
    BuildingType, PerformancePriority, ProjectProfile, Purpose, RainClass, SpecialRequirements,
    WeatherSnapshot,
};
use louvre_core::patterns::builtin::load_preset;
use louvre_core::patterns::schema::{Confidence, PatternSetDef};
use louvre_core::recommend::outcome::Tier;
use louvre_core::select;

fn setup() -> (PatternSetDef, Catalog) {
    (
        load_preset("standard").unwrap(),
        Catalog::builtin().unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Test 1: Commercial project with balanced priority — the canonical case
// ---------------------------------------------------------------------------
#[test]
fn commercial_balanced_selects_pl2075() {
    let (patterns, catalog) = setup();
    let profile = ProjectProfile {
        building_type: Some(BuildingType::Commercial),
        priority: Some(PerformancePriority::Balanced),
        ..Default::default()
    };

    let result = select(&profile, None, &patterns, &catalog);

    assert_eq!(result.rain_defense.final_class, RainClass::C);
    assert_eq!(result.recommendations.len(), 3);

    let primary = &result.recommendations[0];
    assert_eq!(primary.model, "PL-2075");
    assert_eq!(primary.confidence, Confidence::High);
    assert_eq!(primary.tier, Tier::Primary);
    assert_eq!(primary.catalog.rain_defense_rating, "B");
    assert!(!result.trace.steps.is_empty());
}

// ---------------------------------------------------------------------------
// Test 2: Hurricane warehouse — flag overrides the weak building-type class
// ---------------------------------------------------------------------------
#[test]
fn hurricane_warehouse_forces_class_a() {
    let (patterns, catalog) = setup();
    let profile = ProjectProfile {
        building_type: Some(BuildingType::Warehouse),
        special: SpecialRequirements {
            hurricane: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let result = select(&profile, None, &patterns, &catalog);

    assert_eq!(result.rain_defense.final_class, RainClass::A);
    assert_eq!(result.recommendations[0].model, "PL-3000");
    assert_eq!(result.recommendations[0].catalog.louvre_type, "Hurricane Screen");
}

// ---------------------------------------------------------------------------
// Test 3: Empty profile — fallback triple, class D
// ---------------------------------------------------------------------------
#[test]
fn empty_profile_yields_defaults() {
    let (patterns, catalog) = setup();

    let result = select(&ProjectProfile::default(), None, &patterns, &catalog);

    assert_eq!(result.rain_defense.final_class, RainClass::D);
    let models: Vec<&str> = result
        .recommendations
        .iter()
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(models, vec!["PL-1050", "PL-2075", "PL-2250"]);
    assert!(result
        .recommendations
        .iter()
        .all(|r| r.confidence == Confidence::Low));
}

// ---------------------------------------------------------------------------
// Test 4: Weather snapshot upgrades the class and attaches notes
// ---------------------------------------------------------------------------
#[test]
fn severe_weather_upgrades_class_and_adds_notes() {
    let (patterns, catalog) = setup();
    let profile = ProjectProfile {
        building_type: Some(BuildingType::Warehouse),
        ..Default::default()
    };
    let snapshot = WeatherSnapshot {
        average_rainfall: Some(11.2),
        average_wind_speed: Some(24.0),
        average_temperature: Some(8.5),
        recommended_rain_class: Some(RainClass::A),
        ..Default::default()
    };

    let result = select(&profile, Some(&snapshot), &patterns, &catalog);

    // Warehouse alone is D; the climate forces A.
    assert_eq!(result.rain_defense.application_class, RainClass::D);
    assert_eq!(result.rain_defense.weather_class, RainClass::A);
    assert_eq!(result.rain_defense.final_class, RainClass::A);

    for rec in &result.recommendations {
        assert_eq!(rec.weather_notes.len(), 2);
    }
}

// ---------------------------------------------------------------------------
// Test 5: Weather class derived locally when the service sent no class
// ---------------------------------------------------------------------------
#[test]
fn weather_class_derived_from_raw_figures() {
    let (patterns, catalog) = setup();
    let snapshot = WeatherSnapshot {
        average_rainfall: Some(6.3),
        average_wind_speed: Some(7.0),
        ..Default::default()
    };

    let result = select(&ProjectProfile::default(), Some(&snapshot), &patterns, &catalog);

    assert_eq!(result.rain_defense.weather_class, RainClass::B);
    assert_eq!(result.rain_defense.final_class, RainClass::B);
}

// ---------------------------------------------------------------------------
// Test 6: Final class never weaker than either component, whole grid
// ---------------------------------------------------------------------------
#[test]
fn final_class_dominates_components() {
    let (patterns, catalog) = setup();
    let buildings = [
        None,
        Some(BuildingType::Residential),
        Some(BuildingType::Commercial),
        Some(BuildingType::Industrial),
        Some(BuildingType::Warehouse),
        Some(BuildingType::Healthcare),
        Some(BuildingType::DataCentre),
    ];
    let classes = [RainClass::A, RainClass::B, RainClass::C, RainClass::D];

    for bt in buildings {
        for wc in classes {
            let profile = ProjectProfile {
                building_type: bt,
                ..Default::default()
            };
            let snapshot = WeatherSnapshot {
                recommended_rain_class: Some(wc),
                ..Default::default()
            };
            let result = select(&profile, Some(&snapshot), &patterns, &catalog);
            let rd = &result.rain_defense;
            assert!(rd.final_class.rank() >= rd.application_class.rank());
            assert!(rd.final_class.rank() >= rd.weather_class.rank());
        }
    }
}

// ---------------------------------------------------------------------------
// Test 7: Acoustic + coastal combination ranks coastal first (High > Medium)
// ---------------------------------------------------------------------------
#[test]
fn coastal_outranks_acoustic() {
    let (patterns, catalog) = setup();
    let profile = ProjectProfile {
        building_type: Some(BuildingType::Residential),
        special: SpecialRequirements {
            coastal: true,
            acoustic: true,
            ..Default::default()
        },
        purpose: Some(Purpose::NaturalVentilation),
        ..Default::default()
    };

    let result = select(&profile, None, &patterns, &catalog);

    // Coastal pattern is High confidence, acoustic Medium.
    assert_eq!(result.recommendations[0].model, "PL-2250");
    assert_eq!(result.recommendations[0].confidence, Confidence::High);
    // Coastal also raises the application class to B.
    assert_eq!(result.rain_defense.application_class, RainClass::B);
}

// ---------------------------------------------------------------------------
// Test 8: Result serialises cleanly (the CLI's JSON output path)
// ---------------------------------------------------------------------------
#[test]
fn selection_result_round_trips_through_json() {
    let (patterns, catalog) = setup();
    let profile = ProjectProfile {
        building_type: Some(BuildingType::Commercial),
        priority: Some(PerformancePriority::Balanced),
        ..Default::default()
    };

    let result = select(&profile, None, &patterns, &catalog);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let back: louvre_core::SelectionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.recommendations[0].model, "PL-2075");
    assert_eq!(back.rain_defense.final_class, RainClass::C);
}
