//! Dialog entries as written in batch files.

use dlg_core::{
    ActorMask, ActorTable, DialogBuilder, DialogRecord, DialogResult, Operation, Speakers,
};
use serde::Deserialize;
use serde_json::Value;

/// An actor given by name or by raw mask.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActorRef {
    /// Raw flag value.
    Mask(u64),
    /// Name from the actor table, or a numeric literal in a string.
    Name(String),
}

impl ActorRef {
    fn resolve(&self, actors: &ActorTable) -> DialogResult<ActorMask> {
        match self {
            Self::Mask(bits) => Ok(ActorMask(*bits)),
            Self::Name(name) => actors.resolve(name),
        }
    }
}

/// One actor or a list of actors.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpeakerSpec {
    /// A single actor.
    One(ActorRef),
    /// Actors to be combined.
    Many(Vec<ActorRef>),
}

impl SpeakerSpec {
    fn resolve(&self, actors: &ActorTable) -> DialogResult<Speakers> {
        match self {
            Self::One(actor) => actor.resolve(actors).map(Speakers::One),
            Self::Many(list) => list
                .iter()
                .map(|actor| actor.resolve(actors))
                .collect::<DialogResult<Vec<_>>>()
                .map(Speakers::Many),
        }
    }
}

/// Unvalidated builder input. Every field is optional here so that the
/// builder, not the decoder, reports what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntrySpec {
    /// Who may speak.
    pub speaker: Option<SpeakerSpec>,
    /// State the line is valid from.
    pub pre_state: Option<String>,
    /// Condition list; must be a JSON array.
    pub conditions: Option<Value>,
    /// Display text.
    pub text: Option<String>,
    /// State entered afterwards.
    pub post_state: Option<String>,
    /// Consequence list; must be a JSON array.
    pub consequences: Option<Value>,
}

impl EntrySpec {
    /// Run the entry through the builder.
    pub fn into_record(self, actors: &ActorTable) -> DialogResult<DialogRecord<Operation>> {
        let mut builder = DialogBuilder::<Operation>::new();
        if let Some(speaker) = &self.speaker {
            builder = builder.speaker(speaker.resolve(actors)?)?;
        }
        if let Some(pre) = self.pre_state {
            builder = builder.pre_state(pre);
        }
        if let Some(conditions) = self.conditions {
            builder = builder.condition(conditions)?;
        }
        if let Some(text) = self.text {
            builder = builder.dialog_text(text);
        }
        if let Some(post) = self.post_state {
            builder = builder.post_state(post);
        }
        match self.consequences {
            Some(consequences) => builder.finish(consequences),
            None => builder.build(),
        }
    }
}
