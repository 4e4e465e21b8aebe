use crate::actor::{ActorMask, Speakers};
use crate::error::{DialogError, DialogResult, Field};
use crate::predicate::{IntoPredicates, Operation};
use crate::record::DialogRecord;

/// Accumulates the six fields of a dialog record.
///
/// A builder is created per dialog line, filled through a chain of setters
/// and consumed by [`DialogBuilder::build`]. Setters consume and return the
/// builder. Those that can reject their input return [`DialogResult<Self>`]
/// so a chain continues with `?`:
///
/// ```
/// use dlg_core::{ActorMask, DialogBuilder, Operation};
///
/// # fn main() -> dlg_core::DialogResult<()> {
/// let record = DialogBuilder::new()
///     .speaker([ActorMask(0x0fff), ActorMask(0x10000)])?
///     .pre_state("start")
///     .condition(vec![Operation::new("troop_slot_eq")
///         .arg("$g_talk_troop")
///         .arg("slot_troop_met_previously")
///         .arg(0)])?
///     .dialog_text("Good day to you.")
///     .post_state("ramun_introduce_1")
///     .build()?;
///
/// assert_eq!(record.speaker(), ActorMask(0x10fff));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogBuilder<P = Operation> {
    speaker: Option<ActorMask>,
    pre_state: Option<String>,
    conditions: Vec<P>,
    text: String,
    post_state: Option<String>,
    consequences: Vec<P>,
}

impl<P> Default for DialogBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DialogBuilder<P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            speaker: None,
            pre_state: None,
            conditions: Vec::new(),
            text: String::new(),
            post_state: None,
            consequences: Vec::new(),
        }
    }

    /// Set who may utter the line: one actor flag, or several to be OR-ed together.
    pub fn speaker(mut self, speakers: impl Into<Speakers>) -> DialogResult<Self> {
        self.speaker = Some(speakers.into().combine()?);
        Ok(self)
    }

    /// Set the state this line is valid from.
    pub fn pre_state(mut self, name: impl Into<String>) -> Self {
        self.pre_state = Some(name.into());
        self
    }

    /// Set the state entered after this line is chosen.
    pub fn post_state(mut self, name: impl Into<String>) -> Self {
        self.post_state = Some(name.into());
        self
    }

    /// Set both states at once.
    pub fn state(self, pre: impl Into<String>, post: impl Into<String>) -> Self {
        self.pre_state(pre).post_state(post)
    }

    /// Set the display text.
    pub fn dialog_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replace the condition list.
    pub fn condition(mut self, predicates: impl IntoPredicates<P>) -> DialogResult<Self> {
        self.conditions = predicates.into_predicates(Field::Conditions)?;
        tracing::trace!(count = self.conditions.len(), "conditions set");
        Ok(self)
    }

    /// Replace the consequence list.
    pub fn consequence(mut self, predicates: impl IntoPredicates<P>) -> DialogResult<Self> {
        self.consequences = predicates.into_predicates(Field::Consequences)?;
        tracing::trace!(count = self.consequences.len(), "consequences set");
        Ok(self)
    }

    /// Set the consequence list and build in one step.
    ///
    /// Matches the authoring convention where a dialog line is written as one
    /// chain ending in its consequences.
    pub fn finish(self, predicates: impl IntoPredicates<P>) -> DialogResult<DialogRecord<P>> {
        self.consequence(predicates)?.build()
    }

    /// Validate and produce the record.
    ///
    /// Fails with [`DialogError::MissingField`] naming the first of speaker,
    /// pre-state, post-state or text that is unset.
    pub fn build(self) -> DialogResult<DialogRecord<P>> {
        let Some(speaker) = self.speaker else {
            return Err(missing(Field::Speaker));
        };
        let Some(pre_state) = self.pre_state else {
            return Err(missing(Field::PreState));
        };
        let Some(post_state) = self.post_state else {
            return Err(missing(Field::PostState));
        };
        if self.text.is_empty() {
            return Err(missing(Field::Text));
        }

        tracing::debug!(
            %speaker,
            pre_state = %pre_state,
            post_state = %post_state,
            conditions = self.conditions.len(),
            consequences = self.consequences.len(),
            "dialog record built"
        );

        Ok(DialogRecord {
            speaker,
            pre_state,
            conditions: self.conditions,
            text: self.text,
            post_state,
            consequences: self.consequences,
        })
    }

    /// The combined speaker mask, if set.
    pub fn speaker_mask(&self) -> Option<ActorMask> {
        self.speaker
    }

    /// The pre-state, if set.
    pub fn pre_state_name(&self) -> Option<&str> {
        self.pre_state.as_deref()
    }

    /// The post-state, if set.
    pub fn post_state_name(&self) -> Option<&str> {
        self.post_state.as_deref()
    }

    /// The current condition list.
    pub fn conditions(&self) -> &[P] {
        &self.conditions
    }

    /// The current display text (empty until set).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current consequence list.
    pub fn consequences(&self) -> &[P] {
        &self.consequences
    }
}

fn missing(field: Field) -> DialogError {
    tracing::debug!(%field, "dialog record incomplete");
    DialogError::MissingField(field)
}
