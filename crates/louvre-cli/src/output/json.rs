use louvre_core::error::LouvreError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), LouvreError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
