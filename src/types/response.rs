//! Recorded swipes and progress reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::Direction;

/// A single recorded swipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: u32,
    pub direction: Direction,
    /// Persisted lists written without timestamps restore with "now"
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

impl Response {
    /// Create a response stamped with the current time
    pub fn new(question_id: u32, direction: Direction) -> Self {
        Self {
            question_id,
            direction,
            recorded_at: Utc::now(),
        }
    }
}

/// Cursor position within the assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    /// current / total * 100
    pub percentage: f64,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            current as f64 / total as f64 * 100.0
        };
        Self { current, total, percentage }
    }

    /// e.g. "[#####-----] 29/57 (50.9%)"
    pub fn to_bar_string(&self, width: usize) -> String {
        let filled = if self.total == 0 {
            0
        } else {
            (self.current * width / self.total).min(width)
        };
        format!(
            "[{}{}] {}/{} ({:.1}%)",
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.current,
            self.total,
            self.percentage
        )
    }
}
