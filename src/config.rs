//! Classifier configuration
//!
//! Defaults come from the crate constants. A TOML file can override the
//! thresholds and replace the swipe table or prototype matrix:
//!
//! ```toml
//! ambiguity_threshold = 0.05
//! blend_threshold = 0.20
//!
//! [table]
//! qualityPresence_type1 = "Solid Rock"
//!
//! [prototypes]
//! "Solid Rock" = [0.17, 0.0, 0.17, 0.5, 0.0, 0.17, 0.5, 0.0, 0.0, 0.0, 0.0, 0.33, 0.0, 0.0, 0.17]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{PrototypeSet, SwipeTable};
use crate::error::{AssessmentError, Result};
use crate::{AMBIGUITY_THRESHOLD, BLEND_THRESHOLD};

fn default_ambiguity_threshold() -> f64 {
    AMBIGUITY_THRESHOLD
}

fn default_blend_threshold() -> f64 {
    BLEND_THRESHOLD
}

/// Runtime overrides for the type classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Both margins below this → nearest-prototype fallback
    #[serde(default = "default_ambiguity_threshold")]
    pub ambiguity_threshold: f64,
    /// A margin below this → blend suggestion on that axis
    #[serde(default = "default_blend_threshold")]
    pub blend_threshold: f64,
    /// Replacement swipe table, "<connection>_<enneagram>" → swipe type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<BTreeMap<String, String>>,
    /// Replacement prototypes, swipe type name → 15 values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototypes: Option<BTreeMap<String, Vec<f64>>>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ambiguity_threshold: AMBIGUITY_THRESHOLD,
            blend_threshold: BLEND_THRESHOLD,
            table: None,
            prototypes: None,
        }
    }
}

impl ClassifierConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| AssessmentError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AssessmentError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Thresholds must be finite and non-negative. Table and prototype
    /// sections are checked by building them.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ambiguity_threshold", self.ambiguity_threshold),
            ("blend_threshold", self.blend_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AssessmentError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if let Some(table) = &self.table {
            SwipeTable::from_keyed(table)?;
        }
        if let Some(prototypes) = &self.prototypes {
            PrototypeSet::from_named(prototypes)?;
        }
        Ok(())
    }
}
