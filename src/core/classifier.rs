//! Type Classifier: score vectors → swipe type
//!
//! 1. Rank both axes; margin = top1 - top2
//! 2. Look up "<connection>_<enneagram>" in the swipe table
//! 3. Key missing, or both margins < ambiguity threshold → nearest prototype
//! 4. Margin < blend threshold → runner-up key as blend (style axis first)
//!
//! Classification never fails: the built-in table is total and the
//! prototype set covers every one-hot input.

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::config::ClassifierConfig;
use crate::error::{AssessmentError, Result};
use crate::types::{
    BlendAxis, CategoryScores, ClassificationReason, ClassificationResult, ConnectionCategory,
    EnneagramType, SwipeType,
};
use crate::{AMBIGUITY_THRESHOLD, BLEND_THRESHOLD, PROTOTYPE_DIMENSIONS};

use SwipeType::*;

/// Rows follow `ConnectionCategory::ALL`, columns `EnneagramType::ALL`
const BUILTIN_TABLE: [[SwipeType; 9]; 6] = [
    // qualityPresence
    [SolidRock, DeepConnector, WarmEncourager, DeepConnector, CuriousExplorer, LoyalProtector, PlayfulSpark, LoyalProtector, DeepConnector],
    // verbalAffirmation
    [SteadyPlanner, WarmEncourager, WarmEncourager, DeepConnector, CuriousExplorer, GentleHelper, PlayfulSpark, WarmEncourager, GentleHelper],
    // physicalTouch
    [SolidRock, GentleHelper, PlayfulSpark, DeepConnector, CuriousExplorer, LoyalProtector, PlayfulSpark, PlayfulSpark, GentleHelper],
    // actsOfService
    [SolidRock, GentleHelper, SteadyPlanner, GentleHelper, SteadyPlanner, SolidRock, PlayfulSpark, LoyalProtector, SolidRock],
    // thoughtfulGifts
    [SteadyPlanner, GentleHelper, WarmEncourager, DeepConnector, SteadyPlanner, LoyalProtector, CuriousExplorer, LoyalProtector, GentleHelper],
    // sharedGrowth
    [SteadyPlanner, WarmEncourager, SteadyPlanner, CuriousExplorer, CuriousExplorer, SolidRock, CuriousExplorer, LoyalProtector, DeepConnector],
];

/// Rows follow `SwipeType::ALL`.
/// Columns: 6 connection indicators, then 9 enneagram indicators.
const BUILTIN_PROTOTYPES: [[f64; PROTOTYPE_DIMENSIONS]; 8] = [
    // Solid Rock
    [0.17, 0.00, 0.17, 0.50, 0.00, 0.17, 0.50, 0.00, 0.00, 0.00, 0.00, 0.33, 0.00, 0.00, 0.17],
    // Deep Connector
    [0.43, 0.14, 0.14, 0.00, 0.14, 0.14, 0.00, 0.14, 0.00, 0.57, 0.00, 0.00, 0.00, 0.00, 0.29],
    // Warm Encourager
    [0.17, 0.50, 0.00, 0.00, 0.17, 0.17, 0.00, 0.33, 0.50, 0.00, 0.00, 0.00, 0.00, 0.17, 0.00],
    // Playful Spark
    [0.17, 0.17, 0.50, 0.17, 0.00, 0.00, 0.00, 0.00, 0.17, 0.00, 0.00, 0.00, 0.67, 0.17, 0.00],
    // Loyal Protector
    [0.29, 0.00, 0.14, 0.14, 0.29, 0.14, 0.00, 0.00, 0.00, 0.00, 0.00, 0.43, 0.00, 0.57, 0.00],
    // Curious Explorer
    [0.14, 0.14, 0.14, 0.00, 0.14, 0.43, 0.00, 0.00, 0.00, 0.14, 0.57, 0.00, 0.29, 0.00, 0.00],
    // Gentle Helper
    [0.00, 0.25, 0.25, 0.25, 0.25, 0.00, 0.00, 0.375, 0.00, 0.125, 0.00, 0.125, 0.00, 0.00, 0.375],
    // Steady Planner
    [0.00, 0.14, 0.00, 0.29, 0.29, 0.29, 0.43, 0.00, 0.29, 0.00, 0.29, 0.00, 0.00, 0.00, 0.00],
];

// =============================================================================
// SWIPE TABLE
// =============================================================================

/// (connection category, enneagram type) → swipe type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeTable {
    entries: BTreeMap<(ConnectionCategory, EnneagramType), SwipeType>,
}

impl Default for SwipeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SwipeTable {
    /// The total 54-entry table
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (row, connection) in ConnectionCategory::ALL.iter().enumerate() {
            for (col, enneagram) in EnneagramType::ALL.iter().enumerate() {
                entries.insert((*connection, *enneagram), BUILTIN_TABLE[row][col]);
            }
        }
        Self { entries }
    }

    /// Build from `"<connection>_<enneagram>" → "<Swipe Type>"` pairs.
    ///
    /// Partial tables are allowed; missing keys classify by prototype.
    pub fn from_keyed(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let pair = parse_key(key).map_err(AssessmentError::InvalidConfig)?;
            let swipe_type: SwipeType = value
                .parse()
                .map_err(|e| AssessmentError::InvalidConfig(format!("table['{}']: {}", key, e)))?;
            entries.insert(pair, swipe_type);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, connection: ConnectionCategory, enneagram: EnneagramType) -> Option<SwipeType> {
        self.entries.get(&(connection, enneagram)).copied()
    }

    /// Does every one of the 54 combinations resolve?
    pub fn is_total(&self) -> bool {
        self.len() == ConnectionCategory::ALL.len() * EnneagramType::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries keyed the way they appear in config files
    pub fn to_keyed(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|((c, e), t)| (primary_key(*c, *e), t.name().to_string()))
            .collect()
    }
}

/// "<connection>_<enneagram>", e.g. "qualityPresence_type4"
pub fn primary_key(connection: ConnectionCategory, enneagram: EnneagramType) -> String {
    format!("{}_{}", connection.key(), enneagram.key())
}

fn parse_key(key: &str) -> std::result::Result<(ConnectionCategory, EnneagramType), String> {
    let (connection, enneagram) = key
        .rsplit_once('_')
        .ok_or_else(|| format!("table key '{}' is not <connection>_<enneagram>", key))?;
    Ok((connection.parse()?, enneagram.parse()?))
}

// =============================================================================
// PROTOTYPES
// =============================================================================

/// One 15-dimensional reference vector per swipe type
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeSet {
    rows: [[f64; PROTOTYPE_DIMENSIONS]; 8],
}

impl Default for PrototypeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PrototypeSet {
    pub fn builtin() -> Self {
        Self { rows: BUILTIN_PROTOTYPES }
    }

    /// Build from swipe type name → vector. All eight types are required.
    pub fn from_named(map: &BTreeMap<String, Vec<f64>>) -> Result<Self> {
        let mut rows = [[0.0; PROTOTYPE_DIMENSIONS]; 8];
        let mut filled = [false; 8];

        for (name, values) in map {
            let swipe_type: SwipeType = name
                .parse()
                .map_err(|e| AssessmentError::InvalidConfig(format!("prototypes: {}", e)))?;
            if values.len() != PROTOTYPE_DIMENSIONS {
                return Err(AssessmentError::InvalidConfig(format!(
                    "prototype '{}' has {} values, expected {}",
                    name,
                    values.len(),
                    PROTOTYPE_DIMENSIONS
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(AssessmentError::InvalidConfig(format!(
                    "prototype '{}' contains a non-finite value",
                    name
                )));
            }
            rows[swipe_type.index()].copy_from_slice(values);
            filled[swipe_type.index()] = true;
        }

        let missing: Vec<&str> = SwipeType::ALL
            .iter()
            .filter(|t| !filled[t.index()])
            .map(|t| t.name())
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentError::InvalidConfig(format!(
                "prototypes missing for: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { rows })
    }

    pub fn get(&self, swipe_type: SwipeType) -> &[f64; PROTOTYPE_DIMENSIONS] {
        &self.rows[swipe_type.index()]
    }

    /// Nearest swipe type by Euclidean distance; ties go to the earlier type
    pub fn nearest(&self, vector: &[f64; PROTOTYPE_DIMENSIONS]) -> (SwipeType, f64) {
        let mut best = (SwipeType::ALL[0], f64::INFINITY);
        for swipe_type in SwipeType::ALL {
            let distance = euclidean(vector, self.get(swipe_type));
            if distance < best.1 {
                best = (swipe_type, distance);
            }
        }
        best
    }
}

/// 6 connection bits followed by 9 enneagram bits, one set in each block
pub fn one_hot(connection: ConnectionCategory, enneagram: EnneagramType) -> [f64; PROTOTYPE_DIMENSIONS] {
    let mut v = [0.0; PROTOTYPE_DIMENSIONS];
    v[connection.index()] = 1.0;
    v[ConnectionCategory::ALL.len() + enneagram.index()] = 1.0;
    v
}

fn euclidean(a: &[f64; PROTOTYPE_DIMENSIONS], b: &[f64; PROTOTYPE_DIMENSIONS]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Resolves score vectors into a `ClassificationResult`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeClassifier {
    table: SwipeTable,
    prototypes: PrototypeSet,
    ambiguity_threshold: f64,
    blend_threshold: f64,
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeClassifier {
    /// Built-in table, prototypes and thresholds
    pub fn new() -> Self {
        Self {
            table: SwipeTable::builtin(),
            prototypes: PrototypeSet::builtin(),
            ambiguity_threshold: AMBIGUITY_THRESHOLD,
            blend_threshold: BLEND_THRESHOLD,
        }
    }

    /// Apply a validated configuration over the built-ins
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let table = match &config.table {
            Some(map) => SwipeTable::from_keyed(map)?,
            None => SwipeTable::builtin(),
        };
        let prototypes = match &config.prototypes {
            Some(map) => PrototypeSet::from_named(map)?,
            None => PrototypeSet::builtin(),
        };
        if !table.is_total() {
            warn!(entries = table.len(), "swipe table is partial; missing keys use prototypes");
        }
        Ok(Self {
            table,
            prototypes,
            ambiguity_threshold: config.ambiguity_threshold,
            blend_threshold: config.blend_threshold,
        })
    }

    pub fn with_table(mut self, table: SwipeTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &SwipeTable {
        &self.table
    }

    pub fn prototypes(&self) -> &PrototypeSet {
        &self.prototypes
    }

    /// Classify a pair of score vectors. Deterministic and infallible.
    pub fn classify(&self, scores: &CategoryScores) -> ClassificationResult {
        let connection = scores.ranked_connection();
        let enneagram = scores.ranked_enneagram();

        let (top_connection, second_connection) = (connection[0].0, connection[1].0);
        let (top_enneagram, second_enneagram) = (enneagram[0].0, enneagram[1].0);
        let style_margin = connection[0].1 - connection[1].1;
        let type_margin = enneagram[0].1 - enneagram[1].1;

        let ambiguous = style_margin < self.ambiguity_threshold && type_margin < self.ambiguity_threshold;
        let (swipe_type, reason) = match self.table.get(top_connection, top_enneagram) {
            Some(hit) if !ambiguous => (hit, ClassificationReason::C001_TABLE_MATCH),
            Some(hit) => {
                let nearest = self.nearest(top_connection, top_enneagram);
                if nearest != hit {
                    warn!(table = %hit, prototype = %nearest, "ambiguous margins overrode table entry");
                }
                (nearest, ClassificationReason::C002_FALLBACK_AMBIGUOUS)
            }
            None => (
                self.nearest(top_connection, top_enneagram),
                ClassificationReason::C002_FALLBACK_MISSING_KEY,
            ),
        };

        let blend = self.blend(
            style_margin,
            type_margin,
            (top_connection, second_connection),
            (top_enneagram, second_enneagram),
        );

        let result = ClassificationResult {
            swipe_type,
            blend_swipe_type: blend.map(|(t, _)| t),
            top_connection_category: top_connection,
            top_enneagram_type: top_enneagram,
            style_margin,
            type_margin,
            reason,
            blend_axis: blend.map(|(_, axis)| axis),
        };
        info!(
            swipe_type = %result.swipe_type,
            key = %result.primary_key(),
            style_margin,
            type_margin,
            reason = result.reason.code(),
            "assessment classified"
        );
        result
    }

    fn nearest(&self, connection: ConnectionCategory, enneagram: EnneagramType) -> SwipeType {
        let (swipe_type, distance) = self.prototypes.nearest(&one_hot(connection, enneagram));
        debug!(key = %primary_key(connection, enneagram), %swipe_type, distance, "nearest prototype");
        swipe_type
    }

    /// Style axis is checked first and wins whenever its margin qualifies.
    /// The alternate key resolves like the primary one, so a missing table
    /// entry still yields a prototype suggestion.
    fn blend(
        &self,
        style_margin: f64,
        type_margin: f64,
        connection: (ConnectionCategory, ConnectionCategory),
        enneagram: (EnneagramType, EnneagramType),
    ) -> Option<(SwipeType, BlendAxis)> {
        let (c, e, axis) = if style_margin < self.blend_threshold {
            (connection.1, enneagram.0, BlendAxis::Style)
        } else if type_margin < self.blend_threshold {
            (connection.0, enneagram.1, BlendAxis::Type)
        } else {
            return None;
        };
        let alt = self.table.get(c, e).unwrap_or_else(|| self.nearest(c, e));
        debug!(key = %primary_key(c, e), %alt, ?axis, "blend suggested");
        Some((alt, axis))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    fn conn(c: ConnectionCategory) -> Category {
        Category::Connection(c)
    }

    fn enn(t: EnneagramType) -> Category {
        Category::Enneagram(t)
    }

    #[test]
    fn test_builtin_table_is_total() {
        let table = SwipeTable::builtin();
        assert!(table.is_total());
        for c in ConnectionCategory::ALL {
            for e in EnneagramType::ALL {
                assert!(table.get(c, e).is_some(), "{} unresolved", primary_key(c, e));
            }
        }
    }

    #[test]
    fn test_every_swipe_type_reachable_from_table() {
        let table = SwipeTable::builtin();
        for t in SwipeType::ALL {
            let hits = ConnectionCategory::ALL
                .iter()
                .flat_map(|c| EnneagramType::ALL.iter().map(move |e| (*c, *e)))
                .filter(|(c, e)| table.get(*c, *e) == Some(t))
                .count();
            assert!(hits > 0, "{} never produced", t);
        }
    }

    #[test]
    fn test_clear_margins_use_table() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::ActsOfService), 1.8)
            .with(enn(EnneagramType::Type6), 1.5);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.swipe_type, SwipeType::SolidRock);
        assert_eq!(result.reason, ClassificationReason::C001_TABLE_MATCH);
        assert_eq!(result.blend_swipe_type, None);
        assert!((result.style_margin - 1.8).abs() < 1e-12);
        assert!((result.type_margin - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_exact_tie_triggers_style_blend() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::VerbalAffirmation), 1.0)
            .with(enn(EnneagramType::Type1), 1.5);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.top_connection_category, ConnectionCategory::QualityPresence);
        assert_eq!(result.style_margin, 0.0);
        assert_eq!(result.swipe_type, SwipeType::SolidRock);
        assert_eq!(result.blend_swipe_type, Some(SwipeType::SteadyPlanner));
        assert_eq!(result.blend_axis, Some(BlendAxis::Style));
    }

    #[test]
    fn test_exact_tie_blends_even_when_alternate_matches_primary() {
        // qualityPresence_type1 and physicalTouch_type1 are both Solid Rock
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::PhysicalTouch), 1.0)
            .with(enn(EnneagramType::Type1), 1.5);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.style_margin, 0.0);
        assert_eq!(result.swipe_type, SwipeType::SolidRock);
        assert_eq!(result.blend_swipe_type, Some(SwipeType::SolidRock));
        assert_eq!(result.blend_axis, Some(BlendAxis::Style));
    }

    #[test]
    fn test_qualifying_style_axis_never_falls_through_to_type() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::PhysicalTouch), 1.0)
            .with(enn(EnneagramType::Type1), 1.0)
            .with(enn(EnneagramType::Type2), 0.9);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.blend_axis, Some(BlendAxis::Style));
        assert_eq!(result.blend_swipe_type, Some(SwipeType::SolidRock));
    }

    #[test]
    fn test_blend_with_missing_alternate_uses_prototype() {
        let mut keyed = SwipeTable::builtin().to_keyed();
        keyed.remove("verbalAffirmation_type1");
        let classifier = TypeClassifier::new().with_table(SwipeTable::from_keyed(&keyed).unwrap());
        let expected = classifier
            .prototypes()
            .nearest(&one_hot(ConnectionCategory::VerbalAffirmation, EnneagramType::Type1))
            .0;

        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::VerbalAffirmation), 0.9)
            .with(enn(EnneagramType::Type1), 1.5);

        let result = classifier.classify(&scores);
        assert_eq!(result.blend_axis, Some(BlendAxis::Style));
        assert_eq!(result.blend_swipe_type, Some(expected));
    }

    #[test]
    fn test_style_blend_takes_precedence() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::VerbalAffirmation), 0.9)
            .with(enn(EnneagramType::Type1), 1.0)
            .with(enn(EnneagramType::Type2), 0.9);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.blend_axis, Some(BlendAxis::Style));
        assert_eq!(result.blend_swipe_type, Some(SwipeType::SteadyPlanner));
    }

    #[test]
    fn test_type_axis_blend() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 2.0)
            .with(enn(EnneagramType::Type1), 1.0)
            .with(enn(EnneagramType::Type2), 0.9);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.swipe_type, SwipeType::SolidRock);
        assert_eq!(result.blend_swipe_type, Some(SwipeType::DeepConnector));
        assert_eq!(result.blend_axis, Some(BlendAxis::Type));
    }

    #[test]
    fn test_ambiguous_margins_fall_back_to_prototype() {
        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::QualityPresence), 1.0)
            .with(conn(ConnectionCategory::VerbalAffirmation), 0.98)
            .with(enn(EnneagramType::Type4), 1.0)
            .with(enn(EnneagramType::Type2), 0.97);

        let result = TypeClassifier::new().classify(&scores);
        assert_eq!(result.reason, ClassificationReason::C002_FALLBACK_AMBIGUOUS);
        assert_eq!(result.swipe_type, SwipeType::DeepConnector);
    }

    #[test]
    fn test_missing_key_falls_back_to_prototype() {
        let mut keyed = SwipeTable::builtin().to_keyed();
        keyed.remove("physicalTouch_type7");
        let table = SwipeTable::from_keyed(&keyed).unwrap();
        assert!(!table.is_total());

        let scores = CategoryScores::zero()
            .with(conn(ConnectionCategory::PhysicalTouch), 2.0)
            .with(enn(EnneagramType::Type7), 2.0);

        let result = TypeClassifier::new().with_table(table).classify(&scores);
        assert_eq!(result.reason, ClassificationReason::C002_FALLBACK_MISSING_KEY);
        assert_eq!(result.swipe_type, SwipeType::PlayfulSpark);
    }

    #[test]
    fn test_empty_table_still_classifies() {
        let table = SwipeTable::from_keyed(&BTreeMap::new()).unwrap();
        let classifier = TypeClassifier::new().with_table(table);
        for c in ConnectionCategory::ALL {
            for e in EnneagramType::ALL {
                let scores = CategoryScores::zero().with(conn(c), 1.0).with(enn(e), 1.0);
                let result = classifier.classify(&scores);
                assert!(result.reason.is_fallback());
                assert_eq!(result.blend_swipe_type, None);
            }
        }
    }

    #[test]
    fn test_one_hot_layout() {
        let v = one_hot(ConnectionCategory::SharedGrowth, EnneagramType::Type1);
        assert_eq!(v[5], 1.0);
        assert_eq!(v[6], 1.0);
        assert_eq!(v.iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn test_prototype_nearest_exact_match() {
        let protos = PrototypeSet::builtin();
        let (t, d) = protos.nearest(protos.get(SwipeType::GentleHelper));
        assert_eq!(t, SwipeType::GentleHelper);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_bad_table_key_rejected() {
        let mut keyed = BTreeMap::new();
        keyed.insert("qualityPresence-type1".to_string(), "Solid Rock".to_string());
        assert!(matches!(SwipeTable::from_keyed(&keyed), Err(AssessmentError::InvalidConfig(_))));

        let mut keyed = BTreeMap::new();
        keyed.insert("qualityPresence_type1".to_string(), "Stone Wall".to_string());
        assert!(matches!(SwipeTable::from_keyed(&keyed), Err(AssessmentError::InvalidConfig(_))));
    }

    #[test]
    fn test_prototypes_require_all_types() {
        let mut named = BTreeMap::new();
        named.insert("Solid Rock".to_string(), vec![0.0; PROTOTYPE_DIMENSIONS]);
        let err = PrototypeSet::from_named(&named).unwrap_err();
        assert!(err.to_string().contains("Deep Connector"));
    }
}
