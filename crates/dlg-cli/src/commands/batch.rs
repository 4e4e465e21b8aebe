use std::path::Path;

use crate::config::CliConfig;
use crate::entry::EntrySpec;

pub fn run(config: &CliConfig, file: &Path) -> Result<(), String> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let entries: Vec<EntrySpec> = serde_json::from_str(&source)
        .map_err(|e| format!("{}: expected an array of entries: {e}", file.display()))?;

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .into_record(&config.actors)
                .map_err(|e| format!("entry {i}: {e}"))
        })
        .collect::<Result<Vec<_>, String>>()?;

    tracing::info!(file = %file.display(), records = records.len(), "batch built");
    super::print_json(config, &records)
}
