use std::fmt;

/// Alias for `Result<T, DialogError>`.
pub type DialogResult<T> = Result<T, DialogError>;

/// The six positions of a dialog record, used to name the offending field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Actor mask of who may speak the line.
    Speaker,
    /// State the line is valid from.
    PreState,
    /// Condition predicate list.
    Conditions,
    /// Display text.
    Text,
    /// State entered after the line is chosen.
    PostState,
    /// Consequence predicate list.
    Consequences,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speaker => write!(f, "speaker"),
            Self::PreState => write!(f, "pre_state"),
            Self::Conditions => write!(f, "conditions"),
            Self::Text => write!(f, "text"),
            Self::PostState => write!(f, "post_state"),
            Self::Consequences => write!(f, "consequences"),
        }
    }
}

/// Errors raised while assembling a dialog record.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// A setter received a value of the wrong shape.
    #[error("invalid argument for {field}: {reason}")]
    InvalidArgument {
        /// The field being set.
        field: Field,
        /// What was wrong with the value.
        reason: String,
    },

    /// A required field was not set when the record was built.
    #[error("{0} not set")]
    MissingField(Field),

    /// An actor name could not be resolved to a flag.
    #[error("unknown actor: \"{0}\"")]
    UnknownActor(String),

    /// An actor table could not be read or parsed.
    #[error("actor table error: {0}")]
    ActorTable(String),
}

impl DialogError {
    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::MissingField(field) => Some(*field),
            Self::UnknownActor(_) => Some(Field::Speaker),
            Self::ActorTable(_) => None,
        }
    }
}
