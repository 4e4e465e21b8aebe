//! Core types for building scripted-dialog records.
//!
//! A dialog record is the six-field line entry a game's dialog interpreter
//! reads: who may speak, the state the line is valid from, its conditions,
//! the display text, the state entered afterwards, and its consequences.
//! [`DialogBuilder`] assembles one record per chain of calls and validates
//! it on [`DialogBuilder::build`].

/// Actor flags, speaker masks, and the actor name table.
pub mod actor;
/// The fluent record builder.
pub mod builder;
/// Error types used throughout the crate.
pub mod error;
/// Predicate descriptors and the conversion into predicate lists.
pub mod predicate;
/// The finalized dialog record.
pub mod record;

/// Re-export actor types.
pub use actor::{ActorMask, ActorTable, Speakers};
/// Re-export the builder.
pub use builder::DialogBuilder;
/// Re-export error types.
pub use error::{DialogError, DialogResult, Field};
/// Re-export predicate types.
pub use predicate::{IntoPredicates, Opcode, Operand, Operation};
/// Re-export record types.
pub use record::{DialogRecord, RecordTuple};
