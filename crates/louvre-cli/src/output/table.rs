use louvre_core::classify::outcome::RainDefenseResult;
use louvre_core::model::Coordinates;
use louvre_core::weather::ResolvedLocation;
use louvre_core::SelectionResult;

pub fn print_rain_defense(result: &RainDefenseResult) {
    println!("=== Rain defense classification ===\n");
    println!("  Required class:    {}", result.final_class);
    println!("  Application class: {}", result.application_class);
    println!("  Weather class:     {}", result.weather_class);
    println!("\n  {}", result.explanation);
    println!();
}

pub fn print_selection(result: &SelectionResult, verbose: bool) {
    print_rain_defense(&result.rain_defense);

    println!("=== Recommendations ===\n");
    for rec in &result.recommendations {
        println!(
            "  {:<10} {}  ({} confidence)",
            format!("{}:", rec.tier),
            rec.model,
            rec.confidence
        );
        println!(
            "             Rain defense {}, airflow {}, type {}",
            rec.catalog.rain_defense_rating, rec.catalog.airflow_rating, rec.catalog.louvre_type
        );
        println!("             {}", rec.explanation);
        if verbose {
            println!("             {}", rec.reasoning);
            if !rec.alternatives.is_empty() {
                println!("             Alternatives: {}", rec.alternatives.join(", "));
            }
        }
        println!();
    }

    // The note list is identical across the triple; print it once.
    if let Some(first) = result.recommendations.first() {
        if !first.weather_notes.is_empty() {
            println!("  Weather notes:");
            for note in &first.weather_notes {
                println!("    - {note}");
            }
            println!();
        }
    }

    if verbose && !result.trace.steps.is_empty() {
        println!("=== Decision trace ===\n");
        for step in &result.trace.steps {
            println!("  [{:?}] {}", step.step_type, step.message);
        }
        println!();
    }
}

pub fn print_resolved(resolved: &ResolvedLocation) {
    println!("=== {} ===\n", resolved.address);
    println!("  Coordinates: {}", resolved.coordinates);

    let w = &resolved.weather;
    if let Some(v) = w.average_temperature {
        println!("  Average temperature:    {v:.1} C");
    }
    if let Some(v) = w.average_rainfall {
        println!("  Average daily rainfall: {v:.2} mm");
    }
    if let Some(v) = w.average_wind_speed {
        println!("  Average wind speed:     {v:.1} m/s");
    }
    if let Some(v) = w.average_wind_direction {
        println!("  Average wind direction: {v:.0} deg");
    }
    if let Some(class) = w.recommended_rain_class {
        println!("  Recommended rain class: {class}");
    }
    println!();
}

pub fn print_validated(address: &str, coordinates: Coordinates) {
    println!("Location resolves to: {address}");
    println!("Coordinates: {coordinates}");
}
