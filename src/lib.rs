//! Swipecore: scoring and swipe-type classification engine
//!
//! Question catalog → response recorder → category aggregator → type classifier

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{AssessmentError, Result};

// =============================================================================
// CATALOG SHAPE
// =============================================================================

/// Number of questions in the built-in catalog
pub const CATALOG_SIZE: usize = 57;

/// Connection categories (ways of receiving care)
pub const CONNECTION_CATEGORY_COUNT: usize = 6;

/// Enneagram types
pub const ENNEAGRAM_TYPE_COUNT: usize = 9;

/// Swipe type archetypes
pub const SWIPE_TYPE_COUNT: usize = 8;

/// One-hot width used by the prototype fallback (6 + 9)
pub const PROTOTYPE_DIMENSIONS: usize = CONNECTION_CATEGORY_COUNT + ENNEAGRAM_TYPE_COUNT;

// =============================================================================
// DIRECTION WEIGHTS - forward-oriented, inverted only at aggregation time
// =============================================================================

/// Swipe up: strong yes
pub const WEIGHT_UP: i8 = 2;
/// Swipe right: yes
pub const WEIGHT_RIGHT: i8 = 1;
/// Swipe left: no
pub const WEIGHT_LEFT: i8 = -1;
/// Swipe down: strong no
pub const WEIGHT_DOWN: i8 = -2;

/// Largest absolute weight; category means are bounded by it
pub const MAX_ABS_WEIGHT: f64 = 2.0;

// =============================================================================
// CLASSIFIER THRESHOLDS (mean-score scale)
// =============================================================================

/// Both margins below this → nearest-prototype fallback
pub const AMBIGUITY_THRESHOLD: f64 = 0.05;

/// A margin below this → look for a blend on that axis
pub const BLEND_THRESHOLD: f64 = 0.20;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
