use serde_json::Value;

use crate::config::CliConfig;
use crate::entry::{ActorRef, EntrySpec, SpeakerSpec};

/// Flag values of the `build` command.
pub struct BuildArgs {
    pub speakers: Vec<String>,
    pub pre: Option<String>,
    pub post: Option<String>,
    pub text: Option<String>,
    pub conditions: Option<String>,
    pub consequences: Option<String>,
}

pub fn run(config: &CliConfig, args: BuildArgs) -> Result<(), String> {
    let speaker = if args.speakers.is_empty() {
        None
    } else {
        Some(SpeakerSpec::Many(
            args.speakers.into_iter().map(ActorRef::Name).collect(),
        ))
    };

    let entry = EntrySpec {
        speaker,
        pre_state: args.pre,
        conditions: parse_list("--conditions", args.conditions.as_deref())?,
        text: args.text,
        post_state: args.post,
        consequences: parse_list("--consequences", args.consequences.as_deref())?,
    };

    let record = entry
        .into_record(&config.actors)
        .map_err(|e| e.to_string())?;
    super::print_json(config, &record)
}

fn parse_list(flag: &str, raw: Option<&str>) -> Result<Option<Value>, String> {
    raw.map(|json| serde_json::from_str(json).map_err(|e| format!("{flag} is not valid JSON: {e}")))
        .transpose()
}
