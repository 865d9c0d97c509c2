use crate::commands::{load_profile, load_weather, ProfileOverrides};
use crate::output;
use louvre_core::error::LouvreError;
use std::path::PathBuf;

pub fn run(
    profile_path: PathBuf,
    weather_file: Option<PathBuf>,
    location: Option<String>,
    api: Option<String>,
    overrides: &ProfileOverrides,
    output_format: &str,
) -> Result<(), LouvreError> {
    let mut profile = load_profile(&profile_path)?;
    overrides.apply(&mut profile)?;
    let weather = load_weather(weather_file, location, api)?;

    let result = louvre_core::classify::classify(&profile, weather.as_ref());

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_rain_defense(&result),
    }

    Ok(())
}
