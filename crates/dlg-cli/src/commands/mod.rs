pub mod actors;
pub mod batch;
pub mod build;

use serde::Serialize;

use crate::config::CliConfig;

/// Print a value as JSON on stdout, honoring the pretty flag.
fn print_json<T: Serialize>(config: &CliConfig, value: &T) -> Result<(), String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| format!("failed to encode output: {e}"))?;

    println!("{json}");
    Ok(())
}
