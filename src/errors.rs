//! Error types for linecode.

use crate::kind::ConstructKind;

/// Top-level error type for linecode operations.
///
/// The plain predicates and extractors never return this; they degrade to
/// `false` / `""`. Only the pattern compiler and the strict `try_*`
/// extractors surface errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifyError {
    #[error("failed to compile {rule} pattern: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("line is not a {kind}: {line:?}")]
    NotAConstruct { kind: ConstructKind, line: String },

    #[error("no identifier found in {kind} line: {line:?}")]
    NoIdentifier { kind: ConstructKind, line: String },
}

impl ClassifyError {
    /// The construct kind the failing operation was looking for, if any.
    pub fn kind(&self) -> Option<ConstructKind> {
        match self {
            ClassifyError::Pattern { .. } => None,
            ClassifyError::NotAConstruct { kind, .. } => Some(*kind),
            ClassifyError::NoIdentifier { kind, .. } => Some(*kind),
        }
    }
}
