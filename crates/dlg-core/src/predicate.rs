use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DialogError, DialogResult, Field};

/// Conversion into an ordered list of predicate descriptors.
///
/// The builder never looks inside a predicate; it only insists that
/// predicates arrive as an ordered sequence. Typed sequences always convert.
/// Dynamic JSON converts only when it is an array whose elements decode as `P`.
pub trait IntoPredicates<P> {
    /// Convert `self`, naming `field` in any error.
    fn into_predicates(self, field: Field) -> DialogResult<Vec<P>>;
}

impl<P> IntoPredicates<P> for Vec<P> {
    fn into_predicates(self, _field: Field) -> DialogResult<Vec<P>> {
        Ok(self)
    }
}

impl<P, const N: usize> IntoPredicates<P> for [P; N] {
    fn into_predicates(self, _field: Field) -> DialogResult<Vec<P>> {
        Ok(Vec::from(self))
    }
}

impl<P: Clone> IntoPredicates<P> for &[P] {
    fn into_predicates(self, _field: Field) -> DialogResult<Vec<P>> {
        Ok(self.to_vec())
    }
}

impl<P: DeserializeOwned> IntoPredicates<P> for Value {
    fn into_predicates(self, field: Field) -> DialogResult<Vec<P>> {
        match self {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value(item).map_err(|e| DialogError::InvalidArgument {
                        field,
                        reason: format!("element {i}: {e}"),
                    })
                })
                .collect(),
            other => Err(DialogError::InvalidArgument {
                field,
                reason: format!("expected an array, got {}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The head of an [`Operation`]: an opcode name or its numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Opcode {
    /// Numeric code, as the engine stores compiled operations.
    Code(i64),
    /// Symbolic name.
    Name(String),
}

impl From<i64> for Opcode {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<i32> for Opcode {
    fn from(code: i32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<&str> for Opcode {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Opcode {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl PartialEq<&str> for Opcode {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Name(name) if name == other)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A single operand of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A numeric operand.
    Int(i64),
    /// A symbolic operand: a variable, slot, or registry name.
    Name(String),
    /// Any other JSON value, carried through untouched.
    Raw(Value),
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Name(s) => write!(f, "{s:?}"),
            Self::Raw(value) => write!(f, "{value}"),
        }
    }
}

/// An operation tuple: an opcode followed by its operands.
///
/// Serialized flat, e.g. `["troop_slot_eq", "$g_talk_troop", "slot_troop_met_previously", 0]`.
/// The opcode is carried through and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Opcode name or code.
    pub opcode: Opcode,
    /// Operands in call order.
    pub operands: Vec<Operand>,
}

impl Operation {
    /// Create an operation with no operands.
    pub fn new(opcode: impl Into<Opcode>) -> Self {
        Self {
            opcode: opcode.into(),
            operands: Vec::new(),
        }
    }

    /// Append an operand.
    pub fn arg(mut self, operand: impl Into<Operand>) -> Self {
        self.operands.push(operand.into());
        self
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.opcode)?;
        for operand in &self.operands {
            write!(f, ", {operand}")?;
        }
        write!(f, ")")
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut seq = ser.serialize_seq(Some(self.operands.len() + 1))?;
        seq.serialize_element(&self.opcode)?;
        for operand in &self.operands {
            seq.serialize_element(operand)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = Operation;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array starting with an opcode")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let opcode: Opcode = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut operands = Vec::new();
                while let Some(operand) = seq.next_element()? {
                    operands.push(operand);
                }
                Ok(Operation { opcode, operands })
            }
        }
        de.deserialize_seq(V)
    }
}
