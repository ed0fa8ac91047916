#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;

use crate::handlers::CliError;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
    println!("{out}");
    Ok(())
}
