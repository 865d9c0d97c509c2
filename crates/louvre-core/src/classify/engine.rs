use crate::classify::outcome::RainDefenseResult;
use crate::model::{BuildingType, ProjectProfile, Purpose, RainClass, WeatherSnapshot};
use crate::trace::{SelectionTrace, TraceStepType};

/// Daily rainfall (mm) above which the locally derived weather class is A.
const RAINFALL_CLASS_A_MM: f64 = 8.0;
/// Daily rainfall (mm) above which the locally derived weather class is B.
const RAINFALL_CLASS_B_MM: f64 = 5.0;
/// Daily rainfall (mm) above which the locally derived weather class is C.
const RAINFALL_CLASS_C_MM: f64 = 2.0;
/// Average wind speed (m/s) that forces the derived weather class to A.
const WIND_CLASS_A_MS: f64 = 20.0;

/// Classify a project's required rain defense class.
///
/// The application class starts at D and is only ever raised; the weather
/// class comes from the service's recommendation (or is derived locally from
/// raw figures when the service sent none). The final class is whichever of
/// the two is stronger, so the result can never be weaker than either
/// component.
pub fn classify(profile: &ProjectProfile, weather: Option<&WeatherSnapshot>) -> RainDefenseResult {
    let mut trace = SelectionTrace::default();
    classify_traced(profile, weather, &mut trace)
}

/// Classify while appending each decision to `trace`.
pub fn classify_traced(
    profile: &ProjectProfile,
    weather: Option<&WeatherSnapshot>,
    trace: &mut SelectionTrace,
) -> RainDefenseResult {
    let application_class = application_class(profile, trace);
    let weather_class = weather_class(weather, trace);
    let final_class = application_class.stronger(weather_class);

    trace.step(
        TraceStepType::FinalMerge,
        format!(
            "Final class {} = stronger of application {} and weather {}",
            final_class, application_class, weather_class
        ),
    );

    RainDefenseResult {
        final_class,
        application_class,
        weather_class,
        explanation: explanation_for(final_class).to_string(),
    }
}

fn application_class(profile: &ProjectProfile, trace: &mut SelectionTrace) -> RainClass {
    let mut class = RainClass::D;

    // Building type table: overwrite, not merge.
    if let Some(bt) = profile.building_type {
        if let Some(c) = building_type_class(bt) {
            class = c;
            trace.step(
                TraceStepType::TableLookup,
                format!("Building type {} -> class {}", bt, c),
            );
        }
    }

    // Purpose table: upgrade only, never downgrade.
    if let Some(p) = profile.purpose {
        if let Some(c) = purpose_class(p) {
            if c.rank() > class.rank() {
                trace.step(
                    TraceStepType::TableLookup,
                    format!("Purpose {} upgrades class {} -> {}", p, class, c),
                );
                class = c;
            }
        }
    }

    if profile.special.coastal && class.rank() < RainClass::B.rank() {
        trace.step(
            TraceStepType::FlagOverride,
            format!("Coastal site raises class {} -> B", class),
        );
        class = RainClass::B;
    }

    if profile.special.hurricane {
        trace.step(
            TraceStepType::FlagOverride,
            "Hurricane requirement forces class A",
        );
        class = RainClass::A;
    }

    // Highest precedence: an explicit water penetration standard.
    if profile.standards.water_penetration {
        trace.step(
            TraceStepType::FlagOverride,
            "Water penetration standard forces class A",
        );
        class = RainClass::A;
    }

    class
}

fn weather_class(weather: Option<&WeatherSnapshot>, trace: &mut SelectionTrace) -> RainClass {
    let Some(snapshot) = weather else {
        return RainClass::D;
    };

    if let Some(class) = snapshot.recommended_rain_class {
        trace.step(
            TraceStepType::WeatherAdoption,
            format!("Adopted service-recommended weather class {}", class),
        );
        return class;
    }

    // No recommendation from the service: derive from raw figures.
    let derived = derive_weather_class(snapshot);
    trace.step(
        TraceStepType::WeatherAdoption,
        format!(
            "No service recommendation; derived weather class {} from rainfall {:?} mm, wind {:?} m/s",
            derived, snapshot.average_rainfall, snapshot.average_wind_speed
        ),
    );
    derived
}

/// Derive a weather class from raw climate figures when the service did not
/// recommend one. Wind-driven rain exposure scales with both rainfall volume
/// and average wind speed.
pub fn derive_weather_class(snapshot: &WeatherSnapshot) -> RainClass {
    let rainfall = snapshot.average_rainfall.unwrap_or(0.0);
    let wind = snapshot.average_wind_speed.unwrap_or(0.0);

    if wind > WIND_CLASS_A_MS || rainfall > RAINFALL_CLASS_A_MM {
        RainClass::A
    } else if rainfall > RAINFALL_CLASS_B_MM {
        RainClass::B
    } else if rainfall > RAINFALL_CLASS_C_MM {
        RainClass::C
    } else {
        RainClass::D
    }
}

fn building_type_class(bt: BuildingType) -> Option<RainClass> {
    match bt {
        BuildingType::Residential => Some(RainClass::C),
        BuildingType::Commercial => Some(RainClass::C),
        BuildingType::Industrial => Some(RainClass::C),
        BuildingType::Warehouse => Some(RainClass::D),
        BuildingType::Healthcare => Some(RainClass::B),
        BuildingType::DataCentre => Some(RainClass::B),
    }
}

fn purpose_class(p: Purpose) -> Option<RainClass> {
    match p {
        Purpose::NaturalVentilation => Some(RainClass::C),
        Purpose::MechanicalIntake => Some(RainClass::B),
        Purpose::MechanicalExhaust => Some(RainClass::C),
        Purpose::Screening => None,
        Purpose::WeatherProtection => Some(RainClass::A),
    }
}

fn explanation_for(class: RainClass) -> &'static str {
    match class {
        RainClass::A => {
            "Class A: maximum rain defense. The opening must reject virtually all \
             wind-driven rain; specify a severe-weather or hurricane-rated louvre."
        }
        RainClass::B => {
            "Class B: high rain defense. Significant wind-driven rain is expected; \
             a performance louvre with a Class B rating or better is required."
        }
        RainClass::C => {
            "Class C: moderate rain defense. A standard performance louvre is \
             adequate for typical exposure."
        }
        RainClass::D => {
            "Class D: basic rain defense. Water ingress is tolerable or the opening \
             is sheltered; a general-purpose louvre is sufficient."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PerformanceStandards, SpecialRequirements};

    fn profile(bt: Option<BuildingType>) -> ProjectProfile {
        ProjectProfile {
            building_type: bt,
            ..Default::default()
        }
    }

    #[test]
    fn test_building_type_table_drives_application_class() {
        let cases = [
            (BuildingType::Residential, RainClass::C),
            (BuildingType::Commercial, RainClass::C),
            (BuildingType::Industrial, RainClass::C),
            (BuildingType::Warehouse, RainClass::D),
            (BuildingType::Healthcare, RainClass::B),
            (BuildingType::DataCentre, RainClass::B),
        ];
        for (bt, expected) in cases {
            let result = classify(&profile(Some(bt)), None);
            assert_eq!(result.application_class, expected, "building type {bt}");
            assert_eq!(result.final_class, expected);
        }
    }

    #[test]
    fn test_empty_profile_defaults_to_d() {
        let result = classify(&ProjectProfile::default(), None);
        assert_eq!(result.application_class, RainClass::D);
        assert_eq!(result.weather_class, RainClass::D);
        assert_eq!(result.final_class, RainClass::D);
    }

    #[test]
    fn test_purpose_upgrades_but_never_downgrades() {
        // Healthcare (B) + mechanical exhaust (C): stays B.
        let mut p = profile(Some(BuildingType::Healthcare));
        p.purpose = Some(Purpose::MechanicalExhaust);
        assert_eq!(classify(&p, None).application_class, RainClass::B);

        // Warehouse (D) + mechanical intake (B): upgraded to B.
        let mut p = profile(Some(BuildingType::Warehouse));
        p.purpose = Some(Purpose::MechanicalIntake);
        assert_eq!(classify(&p, None).application_class, RainClass::B);
    }

    #[test]
    fn test_coastal_raises_to_at_least_b() {
        let mut p = profile(Some(BuildingType::Warehouse));
        p.special.coastal = true;
        assert_eq!(classify(&p, None).application_class, RainClass::B);

        // Already A: left untouched.
        p.purpose = Some(Purpose::WeatherProtection);
        assert_eq!(classify(&p, None).application_class, RainClass::A);
    }

    #[test]
    fn test_hurricane_forces_a_regardless_of_building_type() {
        let p = ProjectProfile {
            building_type: Some(BuildingType::Warehouse),
            special: SpecialRequirements {
                hurricane: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = classify(&p, None);
        assert_eq!(result.final_class, RainClass::A);
    }

    #[test]
    fn test_water_penetration_standard_forces_a() {
        let p = ProjectProfile {
            building_type: Some(BuildingType::Warehouse),
            standards: PerformanceStandards {
                water_penetration: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(classify(&p, None).final_class, RainClass::A);
    }

    #[test]
    fn test_service_weather_class_adopted_verbatim() {
        let snapshot = WeatherSnapshot {
            recommended_rain_class: Some(RainClass::A),
            average_rainfall: Some(0.1),
            ..Default::default()
        };
        let result = classify(&ProjectProfile::default(), Some(&snapshot));
        assert_eq!(result.weather_class, RainClass::A);
        assert_eq!(result.final_class, RainClass::A);
    }

    #[test]
    fn test_weather_class_derived_when_service_silent() {
        let snapshot = WeatherSnapshot {
            average_rainfall: Some(6.0),
            average_wind_speed: Some(4.0),
            ..Default::default()
        };
        let result = classify(&ProjectProfile::default(), Some(&snapshot));
        assert_eq!(result.weather_class, RainClass::B);

        let windy = WeatherSnapshot {
            average_rainfall: Some(1.0),
            average_wind_speed: Some(25.0),
            ..Default::default()
        };
        assert_eq!(derive_weather_class(&windy), RainClass::A);
    }

    #[test]
    fn test_final_class_never_weaker_than_either_component() {
        let buildings = [
            None,
            Some(BuildingType::Residential),
            Some(BuildingType::Warehouse),
            Some(BuildingType::Healthcare),
        ];
        let weather_classes = [
            None,
            Some(RainClass::A),
            Some(RainClass::B),
            Some(RainClass::C),
            Some(RainClass::D),
        ];
        for bt in buildings {
            for wc in weather_classes {
                let snapshot = wc.map(|c| WeatherSnapshot {
                    recommended_rain_class: Some(c),
                    ..Default::default()
                });
                let result = classify(&profile(bt), snapshot.as_ref());
                assert!(result.final_class.rank() >= result.application_class.rank());
                assert!(result.final_class.rank() >= result.weather_class.rank());
            }
        }
    }

    #[test]
    fn test_explanation_matches_final_class() {
        let p = ProjectProfile {
            special: SpecialRequirements {
                hurricane: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = classify(&p, None);
        assert!(result.explanation.starts_with("Class A"));
    }
}
