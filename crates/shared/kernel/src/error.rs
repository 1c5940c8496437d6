use crate::collaborators::CollaboratorError;
use std::borrow::Cow;

/// Failure of one startup phase.
///
/// Phase errors are recorded and swallowed; only an error returned by the whole
/// phase sequence marks the run as failed.
#[ignite_derive::ignite_error]
pub enum PhaseError {
    #[error("Collaborator failure{}: {source}", format_context(.context))]
    Collaborator { source: CollaboratorError, context: Option<Cow<'static, str>> },

    /// Some sub-tasks of a phase failed while the others finished.
    #[error("Partial failure{}: {message}", format_context(.context))]
    Partial { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A sub-task panicked or was cancelled.
    #[error("Task failure{}: {source}", format_context(.context))]
    Task { source: tokio::task::JoinError, context: Option<Cow<'static, str>> },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PhaseError {
    /// Aggregates sub-task failures into one [`PhaseError::Partial`].
    #[must_use]
    pub fn partial(failed: usize, total: usize, details: &[String]) -> Self {
        Self::Partial {
            message: format!("{failed} of {total} failed: {}", details.join("; ")).into(),
            context: None,
        }
    }
}
