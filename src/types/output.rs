//! Classification output

use serde::{Deserialize, Serialize};
use crate::types::{BlendAxis, ClassificationReason, ConnectionCategory, EnneagramType, SwipeType};

/// Final, immutable classification of a completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Primary archetype
    pub swipe_type: SwipeType,
    /// Secondary suggestion when one axis lacks a clear margin
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blend_swipe_type: Option<SwipeType>,
    pub top_connection_category: ConnectionCategory,
    pub top_enneagram_type: EnneagramType,
    /// top1 - top2 over connection categories
    pub style_margin: f64,
    /// top1 - top2 over enneagram types
    pub type_margin: f64,
    /// How `swipe_type` was resolved
    pub reason: ClassificationReason,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blend_axis: Option<BlendAxis>,
}

impl ClassificationResult {
    /// "<connection>_<enneagram>" lookup key of the top picks
    pub fn primary_key(&self) -> String {
        format!("{}_{}", self.top_connection_category, self.top_enneagram_type)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        use colored::Colorize;

        let mut line = format!(
            "{} {} | style={} ({:.3}) | type={} {} ({:.3})",
            self.swipe_type.symbol(),
            self.swipe_type.name().bold().green(),
            self.top_connection_category.label(),
            self.style_margin,
            self.top_enneagram_type.number(),
            self.top_enneagram_type.label(),
            self.type_margin,
        );
        if let Some(blend) = self.blend_swipe_type {
            line.push_str(&format!(" | blend={}", blend.name().yellow()));
        }
        line.push_str(&format!(" | {}", self.reason.code().dimmed()));
        line
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "swipe_type={} | blend={} | connection={} | enneagram={} | style_margin={:.3} | type_margin={:.3} | reason={}",
            self.swipe_type.name(),
            self.blend_swipe_type.map(|b| b.name()).unwrap_or("none"),
            self.top_connection_category,
            self.top_enneagram_type,
            self.style_margin,
            self.type_margin,
            self.reason.code()
        )
    }
}
