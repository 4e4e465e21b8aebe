use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::actor::ActorMask;
use crate::builder::DialogBuilder;

/// The record in its literal tuple form, fields in interpreter order.
pub type RecordTuple<P> = (ActorMask, String, Vec<P>, String, String, Vec<P>);

/// A finalized dialog line, as consumed by the dialog interpreter.
///
/// Records only come out of [`DialogBuilder::build`], so every record has a
/// speaker, both states and non-empty text. On the wire a record is a
/// six-element array: `[speaker, pre_state, conditions, text, post_state, consequences]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRecord<P> {
    pub(crate) speaker: ActorMask,
    pub(crate) pre_state: String,
    pub(crate) conditions: Vec<P>,
    pub(crate) text: String,
    pub(crate) post_state: String,
    pub(crate) consequences: Vec<P>,
}

impl<P> DialogRecord<P> {
    /// Who may utter this line.
    pub fn speaker(&self) -> ActorMask {
        self.speaker
    }

    /// State this line is valid from.
    pub fn pre_state(&self) -> &str {
        &self.pre_state
    }

    /// Conditions that must hold for the line to be offered.
    pub fn conditions(&self) -> &[P] {
        &self.conditions
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// State entered once the line is chosen.
    pub fn post_state(&self) -> &str {
        &self.post_state
    }

    /// Actions run when the line is chosen.
    pub fn consequences(&self) -> &[P] {
        &self.consequences
    }

    /// Unpack into the literal six-field tuple.
    pub fn into_tuple(self) -> RecordTuple<P> {
        (
            self.speaker,
            self.pre_state,
            self.conditions,
            self.text,
            self.post_state,
            self.consequences,
        )
    }
}

impl<P> From<DialogRecord<P>> for RecordTuple<P> {
    fn from(record: DialogRecord<P>) -> Self {
        record.into_tuple()
    }
}

impl<P: Serialize> Serialize for DialogRecord<P> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut tup = ser.serialize_tuple(6)?;
        tup.serialize_element(&self.speaker)?;
        tup.serialize_element(&self.pre_state)?;
        tup.serialize_element(&self.conditions)?;
        tup.serialize_element(&self.text)?;
        tup.serialize_element(&self.post_state)?;
        tup.serialize_element(&self.consequences)?;
        tup.end()
    }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for DialogRecord<P> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let (speaker, pre_state, conditions, text, post_state, consequences): RecordTuple<P> =
            Deserialize::deserialize(de)?;

        // Re-run validation so a decoded record upholds the same invariants.
        DialogBuilder::<P>::new()
            .speaker(speaker)
            .and_then(|b| b.state(pre_state, post_state).condition(conditions))
            .and_then(|b| b.dialog_text(text).finish(consequences))
            .map_err(de::Error::custom)
    }
}
