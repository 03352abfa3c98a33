//! Category Aggregator: reduces responses into per-category mean scores
//!
//! contribution = reverse_coded ? -weight(direction) : weight(direction)
//! score        = sum(contributions) / count(responses), 0 when unanswered
//!
//! Weights are stored forward-oriented for every question and inverted only
//! here, so a reverse-coded item is flipped exactly once.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::QuestionCatalog;
use crate::error::Result;
use crate::types::{Category, CategoryScores, Response};

/// Signed effect of one response on its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub question_id: u32,
    #[serde(serialize_with = "serialize_category")]
    pub category: Category,
    pub reverse_coded: bool,
    pub value: i8,
}

/// Running sum and count for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub sum: i32,
    pub count: usize,
}

impl CategoryTally {
    /// Mean contribution, 0.0 when nothing was recorded
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// Full accounting behind a score vector
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    /// One tally for each of the 15 categories
    pub tallies: BTreeMap<Category, CategoryTally>,
}

impl ScoreBreakdown {
    /// Collapse tallies into the two mean vectors
    pub fn scores(&self) -> CategoryScores {
        let mut scores = CategoryScores::zero();
        for (category, tally) in &self.tallies {
            scores.set(*category, tally.mean());
        }
        scores
    }

    pub fn tally(&self, category: Category) -> CategoryTally {
        self.tallies.get(&category).copied().unwrap_or_default()
    }
}

/// Stateless reducer over a catalog
#[derive(Debug, Clone)]
pub struct CategoryAggregator {
    catalog: Arc<QuestionCatalog>,
}

impl CategoryAggregator {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Contribution-level breakdown of a response list.
    ///
    /// Fails with `NotFound` if any response references an unknown question.
    pub fn breakdown(&self, responses: &[Response]) -> Result<ScoreBreakdown> {
        let mut tallies: BTreeMap<Category, CategoryTally> =
            Category::all().map(|c| (c, CategoryTally::default())).collect();
        let mut contributions = Vec::with_capacity(responses.len());

        for response in responses {
            let question = self.catalog.require(response.question_id)?;
            let value = question.contribution(response.direction);

            let tally = tallies.entry(question.category).or_default();
            tally.sum += i32::from(value);
            tally.count += 1;

            contributions.push(Contribution {
                question_id: question.id,
                category: question.category,
                reverse_coded: question.reverse_coded,
                value,
            });
        }

        Ok(ScoreBreakdown { contributions, tallies })
    }

    /// Mean score per category for both domains
    pub fn calculate_scores(&self, responses: &[Response]) -> Result<CategoryScores> {
        Ok(self.breakdown(responses)?.scores())
    }
}

fn serialize_category<S: serde::Serializer>(category: &Category, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&category.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
