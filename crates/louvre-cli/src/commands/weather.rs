use crate::commands::{api_base_url, runtime};
use crate::output;
use louvre_core::error::LouvreError;
use louvre_core::weather::WeatherClient;

pub fn fetch(location: &str, api: Option<String>, output_format: &str) -> Result<(), LouvreError> {
    let client = WeatherClient::new(api_base_url(api))?;
    let resolved = runtime()?.block_on(client.resolve(location))?;

    match output_format {
        "json" => output::json::print(&resolved)?,
        _ => output::table::print_resolved(&resolved),
    }

    Ok(())
}

pub fn validate(location: &str, api: Option<String>) -> Result<(), LouvreError> {
    let client = WeatherClient::new(api_base_url(api))?;
    let (address, coordinates) = runtime()?.block_on(client.validate(location))?;
    output::table::print_validated(&address, coordinates);
    Ok(())
}

pub fn health(api: Option<String>) -> Result<(), LouvreError> {
    let base = api_base_url(api);
    let client = WeatherClient::new(base.clone())?;
    let ok = runtime()?.block_on(client.health())?;
    if ok {
        println!("Weather service at {base} is up.");
    } else {
        println!("Weather service at {base} responded but is not healthy.");
    }
    Ok(())
}
