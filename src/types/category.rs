//! Closed category sets for the two scoring domains
//!
//! Category names only ever enter the crate through `FromStr`, so a typo in
//! a catalog or config is rejected instead of silently creating an empty
//! bucket.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which score vector a question feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Connection,
    Enneagram,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Connection => write!(f, "connection"),
            Domain::Enneagram => write!(f, "enneagram"),
        }
    }
}

/// Preferred mode of receiving care (6 categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionCategory {
    QualityPresence,
    VerbalAffirmation,
    PhysicalTouch,
    ActsOfService,
    ThoughtfulGifts,
    SharedGrowth,
}

impl ConnectionCategory {
    /// Canonical order; also the tie-break order when ranking
    pub const ALL: [ConnectionCategory; 6] = [
        ConnectionCategory::QualityPresence,
        ConnectionCategory::VerbalAffirmation,
        ConnectionCategory::PhysicalTouch,
        ConnectionCategory::ActsOfService,
        ConnectionCategory::ThoughtfulGifts,
        ConnectionCategory::SharedGrowth,
    ];

    /// Wire key, as used in table keys and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Self::QualityPresence => "qualityPresence",
            Self::VerbalAffirmation => "verbalAffirmation",
            Self::PhysicalTouch => "physicalTouch",
            Self::ActsOfService => "actsOfService",
            Self::ThoughtfulGifts => "thoughtfulGifts",
            Self::SharedGrowth => "sharedGrowth",
        }
    }

    /// Human label
    pub fn label(&self) -> &'static str {
        match self {
            Self::QualityPresence => "Quality Presence",
            Self::VerbalAffirmation => "Verbal Affirmation",
            Self::PhysicalTouch => "Physical Touch",
            Self::ActsOfService => "Acts of Service",
            Self::ThoughtfulGifts => "Thoughtful Gifts",
            Self::SharedGrowth => "Shared Growth",
        }
    }

    /// Position in `ALL`, used for one-hot encoding
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ConnectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ConnectionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown connection category '{}'", s))
    }
}

/// Enneagram personality type (9 types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnneagramType {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
    Type7,
    Type8,
    Type9,
}

impl EnneagramType {
    /// Canonical order; also the tie-break order when ranking
    pub const ALL: [EnneagramType; 9] = [
        EnneagramType::Type1,
        EnneagramType::Type2,
        EnneagramType::Type3,
        EnneagramType::Type4,
        EnneagramType::Type5,
        EnneagramType::Type6,
        EnneagramType::Type7,
        EnneagramType::Type8,
        EnneagramType::Type9,
    ];

    /// Type number, 1-9
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Wire key ("type1".."type9")
    pub fn key(&self) -> &'static str {
        match self {
            Self::Type1 => "type1",
            Self::Type2 => "type2",
            Self::Type3 => "type3",
            Self::Type4 => "type4",
            Self::Type5 => "type5",
            Self::Type6 => "type6",
            Self::Type7 => "type7",
            Self::Type8 => "type8",
            Self::Type9 => "type9",
        }
    }

    /// Traditional type name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Type1 => "Reformer",
            Self::Type2 => "Helper",
            Self::Type3 => "Achiever",
            Self::Type4 => "Individualist",
            Self::Type5 => "Investigator",
            Self::Type6 => "Loyalist",
            Self::Type7 => "Enthusiast",
            Self::Type8 => "Challenger",
            Self::Type9 => "Peacemaker",
        }
    }

    /// Position in `ALL`, used for one-hot encoding
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for EnneagramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.key() == s)
            .ok_or_else(|| format!("unknown enneagram type '{}'", s))
    }
}

/// A (domain, category) pair; each question belongs to exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Connection(ConnectionCategory),
    Enneagram(EnneagramType),
}

impl Category {
    /// Every category across both domains (6 + 9)
    pub fn all() -> impl Iterator<Item = Category> {
        ConnectionCategory::ALL
            .into_iter()
            .map(Category::Connection)
            .chain(EnneagramType::ALL.into_iter().map(Category::Enneagram))
    }

    /// Resolve a category name within a domain
    pub fn parse(domain: Domain, name: &str) -> Result<Self, String> {
        match domain {
            Domain::Connection => name.parse().map(Category::Connection),
            Domain::Enneagram => name.parse().map(Category::Enneagram),
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Category::Connection(_) => Domain::Connection,
            Category::Enneagram(_) => Domain::Enneagram,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Connection(c) => c.key(),
            Category::Enneagram(t) => t.key(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.domain(), self.key())
    }
}
