//! Reason codes for classification decisions

use serde::{Deserialize, Serialize};

/// How the primary swipe type was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ClassificationReason {
    // =========================================================================
    // C001: Table resolution
    // =========================================================================
    /// Primary key found in the lookup table with a clear margin
    C001_TABLE_MATCH,

    // =========================================================================
    // C002: Prototype fallback
    // =========================================================================
    /// Primary key absent from the lookup table
    C002_FALLBACK_MISSING_KEY,
    /// Both margins below the ambiguity threshold
    C002_FALLBACK_AMBIGUOUS,
}

impl ClassificationReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::C001_TABLE_MATCH => "C001_TABLE_MATCH",
            Self::C002_FALLBACK_MISSING_KEY => "C002_FALLBACK_MISSING_KEY",
            Self::C002_FALLBACK_AMBIGUOUS => "C002_FALLBACK_AMBIGUOUS",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::C001_TABLE_MATCH => "Resolved through the lookup table",
            Self::C002_FALLBACK_MISSING_KEY => "No table entry - nearest prototype used",
            Self::C002_FALLBACK_AMBIGUOUS => "Both margins ambiguous - nearest prototype used",
        }
    }

    /// Did the nearest-prototype path decide the result?
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::C002_FALLBACK_MISSING_KEY | Self::C002_FALLBACK_AMBIGUOUS)
    }
}

impl std::fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Which ranking produced the blend suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendAxis {
    /// Runner-up connection category, same top enneagram type
    Style,
    /// Runner-up enneagram type, same top connection category
    Type,
}

impl std::fmt::Display for BlendAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlendAxis::Style => write!(f, "style"),
            BlendAxis::Type => write!(f, "type"),
        }
    }
}
