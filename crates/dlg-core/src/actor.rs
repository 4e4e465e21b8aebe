use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DialogError, DialogResult, Field};

/// Bitmask of actor flags identifying who may utter a dialog line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActorMask(pub u64);

impl ActorMask {
    /// The raw mask value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if every bit of `other` is set in `self`.
    pub fn contains(self, other: ActorMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl From<u64> for ActorMask {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<ActorMask> for u64 {
    fn from(mask: ActorMask) -> Self {
        mask.0
    }
}

impl BitOr for ActorMask {
    type Output = ActorMask;

    fn bitor(self, rhs: ActorMask) -> ActorMask {
        ActorMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ActorMask {
    fn bitor_assign(&mut self, rhs: ActorMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ActorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Speaker input: a single actor flag or an ordered collection of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speakers {
    /// A single flag.
    One(ActorMask),
    /// Several flags to be OR-ed together.
    Many(Vec<ActorMask>),
}

impl Speakers {
    /// OR-reduce the flags into one mask.
    ///
    /// An empty collection has no meaningful mask and is rejected rather than
    /// silently producing zero.
    pub fn combine(self) -> DialogResult<ActorMask> {
        match self {
            Self::One(mask) => Ok(mask),
            Self::Many(masks) => masks
                .into_iter()
                .reduce(BitOr::bitor)
                .ok_or_else(|| DialogError::InvalidArgument {
                    field: Field::Speaker,
                    reason: "at least one actor flag is required".to_string(),
                }),
        }
    }
}

impl From<ActorMask> for Speakers {
    fn from(mask: ActorMask) -> Self {
        Self::One(mask)
    }
}

impl From<u64> for Speakers {
    fn from(bits: u64) -> Self {
        Self::One(ActorMask(bits))
    }
}

impl<T: Into<ActorMask>> From<Vec<T>> for Speakers {
    fn from(flags: Vec<T>) -> Self {
        Self::Many(flags.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ActorMask>, const N: usize> From<[T; N]> for Speakers {
    fn from(flags: [T; N]) -> Self {
        Self::Many(flags.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ActorMask> + Copy> From<&[T]> for Speakers {
    fn from(flags: &[T]) -> Self {
        Self::Many(flags.iter().copied().map(Into::into).collect())
    }
}

/// Registry mapping actor names to their flag values.
///
/// The default table holds the dialog-partner flags of the game's dialog
/// header, so speakers can be written as `["anyone", "plyr"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorTable {
    entries: BTreeMap<String, ActorMask>,
}

impl Default for ActorTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, bits) in [
            ("anyone", 0x0000_0fff),
            ("repeat_for_factions", 0x0000_1000),
            ("repeat_for_parties", 0x0000_2000),
            ("repeat_for_troops", 0x0000_3000),
            ("repeat_for_100", 0x0000_4000),
            ("repeat_for_1000", 0x0000_5000),
            ("other", 0x0000_8000),
            ("plyr", 0x0001_0000),
            ("party_tpl", 0x0002_0000),
            ("auto_proceed", 0x0004_0000),
            ("multi_line", 0x0008_0000),
        ] {
            table.insert(name, ActorMask(bits));
        }
        table
    }
}

impl ActorTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a JSON object of `name: mask` pairs and overlay it on the defaults.
    pub fn from_json_str(json: &str) -> DialogResult<Self> {
        let overlay: BTreeMap<String, ActorMask> =
            serde_json::from_str(json).map_err(|e| DialogError::ActorTable(e.to_string()))?;
        let mut table = Self::default();
        table.entries.extend(overlay);
        Ok(table)
    }

    /// Read an actor table file (see [`ActorTable::from_json_str`]).
    pub fn load(path: &Path) -> DialogResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DialogError::ActorTable(format!("{}: {e}", path.display())))?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), actors = table.len(), "loaded actor table");
        Ok(table)
    }

    /// Register or replace an actor.
    pub fn insert(&mut self, name: impl Into<String>, mask: ActorMask) -> Option<ActorMask> {
        self.entries.insert(name.into(), mask)
    }

    /// Look up an actor by name.
    pub fn get(&self, name: &str) -> Option<ActorMask> {
        self.entries.get(name).copied()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ActorMask)> {
        self.entries.iter().map(|(name, mask)| (name.as_str(), *mask))
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no actors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a token: a registered name, a decimal integer, or a `0x` hex literal.
    pub fn resolve(&self, token: &str) -> DialogResult<ActorMask> {
        let token = token.trim();
        if let Some(mask) = self.get(token) {
            return Ok(mask);
        }
        let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => token.parse::<u64>().ok(),
        };
        parsed
            .map(ActorMask)
            .ok_or_else(|| DialogError::UnknownActor(token.to_string()))
    }

    /// Resolve every token into a speaker collection.
    pub fn resolve_all<I, S>(&self, tokens: I) -> DialogResult<Speakers>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|t| self.resolve(t.as_ref()))
            .collect::<DialogResult<Vec<_>>>()
            .map(Speakers::Many)
    }
}
