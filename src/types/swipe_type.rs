//! The eight swipe-type archetypes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Combined connection + enneagram archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SwipeType {
    #[serde(rename = "Solid Rock")]
    SolidRock,
    #[serde(rename = "Deep Connector")]
    DeepConnector,
    #[serde(rename = "Warm Encourager")]
    WarmEncourager,
    #[serde(rename = "Playful Spark")]
    PlayfulSpark,
    #[serde(rename = "Loyal Protector")]
    LoyalProtector,
    #[serde(rename = "Curious Explorer")]
    CuriousExplorer,
    #[serde(rename = "Gentle Helper")]
    GentleHelper,
    #[serde(rename = "Steady Planner")]
    SteadyPlanner,
}

impl SwipeType {
    /// Canonical order; prototype rows follow it
    pub const ALL: [SwipeType; 8] = [
        SwipeType::SolidRock,
        SwipeType::DeepConnector,
        SwipeType::WarmEncourager,
        SwipeType::PlayfulSpark,
        SwipeType::LoyalProtector,
        SwipeType::CuriousExplorer,
        SwipeType::GentleHelper,
        SwipeType::SteadyPlanner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SolidRock => "Solid Rock",
            Self::DeepConnector => "Deep Connector",
            Self::WarmEncourager => "Warm Encourager",
            Self::PlayfulSpark => "Playful Spark",
            Self::LoyalProtector => "Loyal Protector",
            Self::CuriousExplorer => "Curious Explorer",
            Self::GentleHelper => "Gentle Helper",
            Self::SteadyPlanner => "Steady Planner",
        }
    }

    /// One-line description for result screens
    pub fn description(&self) -> &'static str {
        match self {
            Self::SolidRock => "Dependable and grounded; shows care by being there, every time",
            Self::DeepConnector => "Seeks closeness and undivided attention; values being truly known",
            Self::WarmEncourager => "Lifts people up with words and feels loved when seen and named",
            Self::PlayfulSpark => "Brings energy and touch; connects through fun and shared moments",
            Self::LoyalProtector => "Fiercely committed; shows love through reliability and defence",
            Self::CuriousExplorer => "Bonds through learning and new experiences side by side",
            Self::GentleHelper => "Quietly attentive; gives practical and thoughtful care",
            Self::SteadyPlanner => "Thinks ahead; love shows up as follow-through and structure",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::SolidRock => "🪨",
            Self::DeepConnector => "🔗",
            Self::WarmEncourager => "☀️",
            Self::PlayfulSpark => "✨",
            Self::LoyalProtector => "🛡️",
            Self::CuriousExplorer => "🧭",
            Self::GentleHelper => "🤲",
            Self::SteadyPlanner => "🗓️",
        }
    }

    /// Row in the prototype matrix
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for SwipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SwipeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown swipe type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrips_through_from_str() {
        for t in SwipeType::ALL {
            assert_eq!(t.name().parse::<SwipeType>().unwrap(), t);
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t.name()));
        }
    }
}
