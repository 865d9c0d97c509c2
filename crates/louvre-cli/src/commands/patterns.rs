use louvre_core::error::LouvreError;
use louvre_core::patterns::builtin;
use louvre_core::patterns::schema::ConditionDef;
use std::path::Path;

pub fn list() -> Result<(), LouvreError> {
    println!("Available predefined pattern sets:\n");
    for name in builtin::PRESETS {
        let set = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}), {} patterns",
            name,
            set.name,
            set.version,
            set.patterns.len()
        );
        if let Some(ref desc) = set.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), LouvreError> {
    let set = builtin::load_preset(preset)?;

    println!("{} (version {})\n", set.name, set.version);

    if let Some(ref desc) = set.description {
        println!("{}\n", desc);
    }

    println!("Patterns are evaluated top to bottom; all matches are kept and");
    println!("ordered by confidence (ties keep list order). The top pattern's");
    println!("model becomes the primary recommendation.\n");

    let max_name = set
        .patterns
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<10}  {:<10}  Condition",
        "Pattern",
        "Model",
        "Confidence",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 60));
    for pattern in &set.patterns {
        println!(
            "  {:<width$}  {:<10}  {:<10}  {}",
            pattern.name,
            pattern.model,
            pattern.confidence.to_string(),
            summarise_condition(&pattern.when),
            width = max_name
        );
    }

    println!(
        "\nWhen nothing matches, the fallback models are used in order: {}.",
        set.fallback_models.join(", ")
    );
    println!();

    Ok(())
}

fn summarise_condition(cond: &ConditionDef) -> String {
    let mut parts = Vec::new();
    if !cond.building_types.is_empty() {
        let names: Vec<String> = cond.building_types.iter().map(|b| b.to_string()).collect();
        parts.push(format!("building in [{}]", names.join(", ")));
    }
    if !cond.purposes.is_empty() {
        let names: Vec<String> = cond.purposes.iter().map(|p| p.to_string()).collect();
        parts.push(format!("purpose in [{}]", names.join(", ")));
    }
    if !cond.priorities.is_empty() {
        let names: Vec<String> = cond.priorities.iter().map(|p| p.to_string()).collect();
        parts.push(format!("priority in [{}]", names.join(", ")));
    }
    if !cond.requires.is_empty() {
        let names: Vec<String> = cond.requires.iter().map(|f| f.to_string()).collect();
        parts.push(format!("requires {}", names.join(" + ")));
    }
    parts.join(" and ")
}

pub fn schema() -> Result<(), LouvreError> {
    print!(
        r#"JSON Pattern Set Schema
=======================

A pattern set file defines the ordered condition/recommendation rules
used by `louvre recommend`. Each pattern whose condition matches the
project profile becomes a candidate; candidates are ordered by
confidence (High > Medium > Low, ties keep file order) and fill the
primary/secondary/tertiary slots.

Top-level fields:
  name            (string, required)  Human-readable name of the set
  description     (string, optional)  What this set is for
  version         (string, required)  Version identifier (e.g., "2025.1")
  fallback_models (array, required)   Exactly three model ids, in pad
                                      order. The first is also the default
                                      outcome when nothing matches.
  patterns        (array, required)   Ordered list of patterns (see below)

Each pattern in the "patterns" array:
  name          (string, required)  Identifier used in traces and
                                    `louvre patterns explain`.
  when          (object, required)  Condition over the project profile.
                                    Must not be empty; the catch-all case
                                    belongs to fallback_models.
  model         (string, required)  Primary model id to recommend.
  alternatives  (array, optional)   Alternative model ids; the first one
                                    can fill the next slot at one
                                    confidence step lower.
  confidence    (string, required)  "High", "Medium" or "Low".
  explanation   (string, required)  Short user-facing line.
  reasoning     (string, required)  Longer rationale shown in verbose
                                    output.

The "when" condition (all present fields must hold):
  building_types (array)  Any-of over building types, e.g.
                          ["Commercial", "Warehouse"].
  purposes       (array)  Any-of over opening purposes, e.g.
                          ["Weather protection"].
  priorities     (array)  Any-of over performance priorities, e.g.
                          ["Balanced cost/performance"].
  requires       (array)  All-of over requirement flags: coastal,
                          acoustic, security, high_wind, hurricane,
                          water_penetration, air_movement, wind_load.

Example:
{{
  "name": "Site-specific overrides",
  "version": "1.0",
  "fallback_models": ["PL-1050", "PL-2075", "PL-2250"],
  "patterns": [
    {{
      "name": "exposed-coastal-plant",
      "when": {{
        "building_types": ["Industrial"],
        "requires": ["coastal", "high_wind"]
      }},
      "model": "PL-2250",
      "alternatives": ["PL-2075"],
      "confidence": "High",
      "explanation": "Exposed coastal plant room.",
      "reasoning": "Driven rain with salt carry-over demands a Class A blade."
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LouvreError> {
    let set = louvre_core::patterns::load_pattern_set(file)?;

    println!("Pattern set '{}' (v{}) is valid.", set.name, set.version);
    println!("  Patterns: {}", set.patterns.len());
    println!("  Fallback models: {}", set.fallback_models.join(", "));

    // Check for potential issues (warnings, not errors)
    let catalog = louvre_core::catalog::Catalog::builtin()?;
    let mut warnings = Vec::new();
    for pattern in &set.patterns {
        if !catalog.contains(&pattern.model) {
            warnings.push(format!(
                "pattern '{}' recommends '{}', which is not in the builtin catalog",
                pattern.name, pattern.model
            ));
        }
        for alt in &pattern.alternatives {
            if !catalog.contains(alt) {
                warnings.push(format!(
                    "pattern '{}' lists alternative '{}', which is not in the builtin catalog",
                    pattern.name, alt
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
