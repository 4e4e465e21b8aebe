//! Runtime configuration for the `dlg` commands.

use std::path::Path;

use dlg_core::ActorTable;

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Names usable as speakers.
    pub actors: ActorTable,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl CliConfig {
    /// Build the config, overlaying an actor file on the default table if given.
    pub fn load(actors_path: Option<&Path>) -> Result<Self, String> {
        let config = Self::default();
        match actors_path {
            Some(path) => {
                let actors = ActorTable::load(path).map_err(|e| e.to_string())?;
                Ok(config.with_actors(actors))
            }
            None => Ok(config),
        }
    }

    /// Replace the actor table.
    pub fn with_actors(mut self, actors: ActorTable) -> Self {
        self.actors = actors;
        self
    }

    /// Set pretty-printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
