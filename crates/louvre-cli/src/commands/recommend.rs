use crate::commands::{load_profile, load_weather, ProfileOverrides};
use crate::output;
use louvre_core::catalog::Catalog;
use louvre_core::error::LouvreError;
use louvre_core::patterns;
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    profile_path: PathBuf,
    weather_file: Option<PathBuf>,
    location: Option<String>,
    api: Option<String>,
    pattern_file: Option<PathBuf>,
    catalog_file: Option<PathBuf>,
    overrides: &ProfileOverrides,
    output_format: &str,
    verbose: bool,
) -> Result<(), LouvreError> {
    let mut profile = load_profile(&profile_path)?;
    overrides.apply(&mut profile)?;
    let weather = load_weather(weather_file, location, api)?;

    let pattern_set = match pattern_file {
        Some(path) => patterns::load_pattern_set(&path)?,
        None => patterns::builtin::load_preset("standard")?,
    };

    let catalog = match catalog_file {
        Some(path) => Catalog::load(&path)?,
        None => Catalog::builtin()?,
    };

    let result = louvre_core::select(&profile, weather.as_ref(), &pattern_set, &catalog);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_selection(&result, verbose),
    }

    Ok(())
}
