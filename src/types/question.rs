//! Question records

use serde::{Deserialize, Serialize};
use crate::types::{Category, Direction, Domain};
use crate::{WEIGHT_DOWN, WEIGHT_LEFT, WEIGHT_RIGHT, WEIGHT_UP};

/// Forward-oriented weight for each swipe direction.
///
/// All four keys are required on the wire and no others are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectionWeights {
    pub up: i8,
    pub right: i8,
    pub left: i8,
    pub down: i8,
}

impl Default for DirectionWeights {
    fn default() -> Self {
        Self::standard()
    }
}

impl DirectionWeights {
    /// up=+2, right=+1, left=-1, down=-2
    pub const fn standard() -> Self {
        Self {
            up: WEIGHT_UP,
            right: WEIGHT_RIGHT,
            left: WEIGHT_LEFT,
            down: WEIGHT_DOWN,
        }
    }

    pub fn get(&self, direction: Direction) -> i8 {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Left => self.left,
            Direction::Down => self.down,
        }
    }

    /// Every weight must be one of -2, -1, 1, 2
    pub fn validate(&self) -> Result<(), String> {
        for direction in Direction::ALL {
            let w = self.get(direction);
            if !matches!(w, -2 | -1 | 1 | 2) {
                return Err(format!("weight for '{}' is {}, expected one of -2, -1, 1, 2", direction, w));
            }
        }
        Ok(())
    }
}

/// One immutable assessment card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    /// Unique id, 1..=N
    pub id: u32,
    /// Domain and category this card measures
    pub category: Category,
    /// Affirmative answers count against the category
    pub reverse_coded: bool,
    /// Forward-oriented direction weights
    pub weights: DirectionWeights,
    /// Prompt shown on the card
    pub text: String,
}

impl Question {
    pub fn new(id: u32, category: Category, reverse_coded: bool, text: impl Into<String>) -> Self {
        Self {
            id,
            category,
            reverse_coded,
            weights: DirectionWeights::standard(),
            text: text.into(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.category.domain()
    }

    /// Signed contribution of a swipe to this card's category
    pub fn contribution(&self, direction: Direction) -> i8 {
        let raw = self.weights.get(direction);
        if self.reverse_coded { -raw } else { raw }
    }
}

/// Wire shape of a question: `{id, domain, category, reverseCoded, weightByDirection, text}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: u32,
    pub domain: Domain,
    pub category: String,
    #[serde(default)]
    pub reverse_coded: bool,
    pub weight_by_direction: DirectionWeights,
    #[serde(default)]
    pub text: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let category = Category::parse(record.domain, &record.category)
            .map_err(|e| format!("question {}: {}", record.id, e))?;
        record
            .weight_by_direction
            .validate()
            .map_err(|e| format!("question {}: {}", record.id, e))?;
        Ok(Self {
            id: record.id,
            category,
            reverse_coded: record.reverse_coded,
            weights: record.weight_by_direction,
            text: record.text,
        })
    }
}

impl From<Question> for QuestionRecord {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            domain: q.domain(),
            category: q.category.key().to_string(),
            reverse_coded: q.reverse_coded,
            weight_by_direction: q.weights,
            text: q.text,
        }
    }
}
