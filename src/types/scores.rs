//! Category score vectors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::types::{Category, ConnectionCategory, EnneagramType};

/// Mean score per category, one vector per domain.
///
/// Always holds every key of both domains (6 + 9); categories with no
/// recorded responses score 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub connection: BTreeMap<ConnectionCategory, f64>,
    pub enneagram: BTreeMap<EnneagramType, f64>,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::zero()
    }
}

impl CategoryScores {
    /// All fifteen categories at 0.0
    pub fn zero() -> Self {
        Self {
            connection: ConnectionCategory::ALL.iter().map(|c| (*c, 0.0)).collect(),
            enneagram: EnneagramType::ALL.iter().map(|t| (*t, 0.0)).collect(),
        }
    }

    /// Builder-style setter, mostly for tests and fixtures
    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.set(category, value);
        self
    }

    pub fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Connection(c) => {
                self.connection.insert(c, value);
            }
            Category::Enneagram(t) => {
                self.enneagram.insert(t, value);
            }
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Connection(c) => self.connection.get(&c).copied().unwrap_or(0.0),
            Category::Enneagram(t) => self.enneagram.get(&t).copied().unwrap_or(0.0),
        }
    }

    /// Connection categories, best first; ties keep canonical order
    pub fn ranked_connection(&self) -> Vec<(ConnectionCategory, f64)> {
        rank(ConnectionCategory::ALL.iter().map(|c| (*c, self.get(Category::Connection(*c)))))
    }

    /// Enneagram types, best first; ties keep canonical order
    pub fn ranked_enneagram(&self) -> Vec<(EnneagramType, f64)> {
        rank(EnneagramType::ALL.iter().map(|t| (*t, self.get(Category::Enneagram(*t)))))
    }
}

/// Stable descending sort, so equal scores resolve to the earlier key
fn rank<K>(entries: impl Iterator<Item = (K, f64)>) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = entries.collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_every_key() {
        let s = CategoryScores::zero();
        assert_eq!(s.connection.len(), 6);
        assert_eq!(s.enneagram.len(), 9);
    }

    #[test]
    fn test_ranking_is_descending_with_stable_ties() {
        let s = CategoryScores::zero()
            .with(Category::Connection(ConnectionCategory::SharedGrowth), 1.5)
            .with(Category::Connection(ConnectionCategory::PhysicalTouch), 1.5)
            .with(Category::Connection(ConnectionCategory::QualityPresence), -0.5);

        let ranked = s.ranked_connection();
        assert_eq!(ranked[0].0, ConnectionCategory::PhysicalTouch);
        assert_eq!(ranked[1].0, ConnectionCategory::SharedGrowth);
        assert_eq!(ranked[5].0, ConnectionCategory::QualityPresence);
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let json = serde_json::to_string(&CategoryScores::zero()).unwrap();
        assert!(json.contains("\"qualityPresence\":0.0"));
        assert!(json.contains("\"type9\":0.0"));
    }
}
