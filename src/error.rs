//! Error taxonomy for the assessment core
//!
//! Every variant is a usage or data error raised at the offending call.
//! Nothing here is transient, so callers never retry.

use thiserror::Error;

/// Errors returned by catalog loading, recording and classification.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssessmentError {
    /// A response referenced a question id the catalog does not hold.
    #[error("Question not found: {question_id}")]
    NotFound { question_id: u32 },

    /// `classify` was called before every question was answered.
    #[error("Assessment incomplete: {answered} of {total} questions answered")]
    IncompleteAssessment { answered: usize, total: usize },

    /// The catalog failed structural validation at load time.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// An externally supplied question ordering is not a permutation of the catalog.
    #[error("Invalid question order: {0}")]
    InvalidOrder(String),

    /// Classifier configuration failed validation.
    #[error("Invalid classifier config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AssessmentError>;

impl AssessmentError {
    /// Short stable code for logs and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::IncompleteAssessment { .. } => "INCOMPLETE_ASSESSMENT",
            Self::InvalidCatalog(_) => "INVALID_CATALOG",
            Self::InvalidOrder(_) => "INVALID_ORDER",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}
