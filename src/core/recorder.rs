//! Response Recorder: append-only swipe log with a bounded cursor
//!
//! Cursor rules:
//! - submit → cursor + 1, capped at total
//! - undo   → cursor = min(answered, total), only when a response was removed
//! - reset  → cursor = 0, log cleared
//!
//! The cursor always equals `min(answered, total)`. Submissions past the
//! end are still appended but leave the cursor at `total`.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::QuestionCatalog;
use crate::error::{AssessmentError, Result};
use crate::types::{Direction, Progress, Question, Response};

/// Records one responder's swipes in sequence
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    catalog: Arc<QuestionCatalog>,
    /// Presentation order of question ids (a permutation of the catalog)
    order: Vec<u32>,
    responses: Vec<Response>,
    cursor: usize,
}

impl ResponseRecorder {
    /// Recorder presenting questions in catalog order
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        let order = catalog.ids();
        Self {
            catalog,
            order,
            responses: Vec::new(),
            cursor: 0,
        }
    }

    /// Recorder presenting questions in a caller-supplied order
    pub fn with_order(catalog: Arc<QuestionCatalog>, order: Vec<u32>) -> Result<Self> {
        if order.len() != catalog.len() {
            return Err(AssessmentError::InvalidOrder(format!(
                "expected {} question ids, got {}",
                catalog.len(),
                order.len()
            )));
        }
        let mut seen = vec![false; catalog.len()];
        for &id in &order {
            if !catalog.contains(id) {
                return Err(AssessmentError::InvalidOrder(format!(
                    "question {} is not in the catalog",
                    id
                )));
            }
            let slot = &mut seen[id as usize - 1];
            if *slot {
                return Err(AssessmentError::InvalidOrder(format!("question {} appears twice", id)));
            }
            *slot = true;
        }
        Ok(Self {
            catalog,
            order,
            responses: Vec::new(),
            cursor: 0,
        })
    }

    /// Append a swipe for `question_id` and advance the cursor.
    ///
    /// Unknown ids fail with `NotFound` and leave the log untouched.
    pub fn submit_response(&mut self, question_id: u32, direction: Direction) -> Result<Progress> {
        self.catalog.require(question_id)?;

        if let Some(expected) = self.current_question().map(|q| q.id) {
            if expected != question_id {
                warn!(expected, question_id, "response recorded out of presentation order");
            }
        }

        self.responses.push(Response::new(question_id, direction));
        self.cursor = (self.cursor + 1).min(self.total());
        debug!(question_id, %direction, cursor = self.cursor, "response recorded");
        Ok(self.progress())
    }

    /// Remove the last response and pull the cursor back with it.
    ///
    /// Returns the question now under the cursor, or `None` when there was
    /// nothing to undo.
    pub fn undo_last_response(&mut self) -> Option<&Question> {
        let removed = self.responses.pop()?;
        self.cursor = self.responses.len().min(self.total());
        debug!(question_id = removed.question_id, cursor = self.cursor, "response undone");
        self.current_question()
    }

    /// Question at the cursor, `None` once past the end
    pub fn current_question(&self) -> Option<&Question> {
        self.order.get(self.cursor).and_then(|id| self.catalog.get(*id))
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.cursor, self.total())
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() >= self.total() || self.cursor >= self.total()
    }

    /// Discard every response and rewind
    pub fn reset(&mut self) {
        debug!(discarded = self.responses.len(), "recorder reset");
        self.responses.clear();
        self.cursor = 0;
    }

    /// Replace the log with a persisted response list.
    ///
    /// Every id is checked first, so a bad list leaves the recorder as it was.
    pub fn restore(&mut self, responses: Vec<Response>) -> Result<()> {
        for r in &responses {
            self.catalog.require(r.question_id)?;
        }
        self.cursor = responses.len().min(self.total());
        self.responses = responses;
        debug!(restored = self.responses.len(), cursor = self.cursor, "recorder restored");
        Ok(())
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &[u32] {
        &self.order
    }

    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        &self.catalog
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> ResponseRecorder {
        ResponseRecorder::new(QuestionCatalog::builtin())
    }

    #[test]
    fn test_starts_at_first_question() {
        let rec = recorder();
        assert_eq!(rec.current_question().unwrap().id, 1);
        assert_eq!(rec.progress().current, 0);
        assert!(!rec.is_complete());
    }

    #[test]
    fn test_submit_advances_cursor() {
        let mut rec = recorder();
        let progress = rec.submit_response(1, Direction::Up).unwrap();
        assert_eq!(progress.current, 1);
        assert_eq!(rec.current_question().unwrap().id, 2);
        assert_eq!(rec.answered_count(), 1);
    }

    #[test]
    fn test_unknown_id_leaves_log_unchanged() {
        let mut rec = recorder();
        rec.submit_response(1, Direction::Up).unwrap();

        let err = rec.submit_response(9999, Direction::Up).unwrap_err();
        assert_eq!(err, AssessmentError::NotFound { question_id: 9999 });
        assert_eq!(rec.answered_count(), 1);
        assert_eq!(rec.progress().current, 1);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut rec = recorder();
        assert!(rec.undo_last_response().is_none());
        assert_eq!(rec.progress().current, 0);
    }

    #[test]
    fn test_undo_returns_previous_question() {
        let mut rec = recorder();
        rec.submit_response(1, Direction::Up).unwrap();
        rec.submit_response(2, Direction::Left).unwrap();

        let q = rec.undo_last_response().unwrap();
        assert_eq!(q.id, 2);
        assert_eq!(rec.answered_count(), 1);
        assert_eq!(rec.responses()[0].question_id, 1);
    }

    #[test]
    fn test_cursor_capped_at_total() {
        let mut rec = recorder();
        for id in 1..=57 {
            rec.submit_response(id, Direction::Right).unwrap();
        }
        assert!(rec.is_complete());
        assert!(rec.current_question().is_none());

        rec.submit_response(3, Direction::Down).unwrap();
        assert_eq!(rec.progress().current, 57);
        assert_eq!(rec.answered_count(), 58);

        // Dropping the surplus answer keeps the cursor at the end
        assert!(rec.undo_last_response().is_none());
        assert_eq!(rec.progress().current, 57);
        rec.undo_last_response();
        assert_eq!(rec.current_question().unwrap().id, 57);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut rec = recorder();
        rec.submit_response(1, Direction::Up).unwrap();
        rec.reset();
        assert_eq!(rec.answered_count(), 0);
        assert_eq!(rec.current_question().unwrap().id, 1);
    }

    #[test]
    fn test_custom_order() {
        let catalog = QuestionCatalog::builtin();
        let order: Vec<u32> = (1..=57).rev().collect();
        let mut rec = ResponseRecorder::with_order(catalog, order).unwrap();
        assert_eq!(rec.current_question().unwrap().id, 57);
        rec.submit_response(57, Direction::Up).unwrap();
        assert_eq!(rec.current_question().unwrap().id, 56);
    }

    #[test]
    fn test_order_must_be_permutation() {
        let catalog = QuestionCatalog::builtin();

        let short: Vec<u32> = (1..=56).collect();
        assert!(matches!(
            ResponseRecorder::with_order(catalog.clone(), short),
            Err(AssessmentError::InvalidOrder(_))
        ));

        let mut dup: Vec<u32> = (1..=57).collect();
        dup[10] = 1;
        assert!(matches!(
            ResponseRecorder::with_order(catalog.clone(), dup),
            Err(AssessmentError::InvalidOrder(_))
        ));

        let mut unknown: Vec<u32> = (1..=57).collect();
        unknown[0] = 99;
        let err = ResponseRecorder::with_order(catalog, unknown).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidOrder(_)));
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_restore_rejects_unknown_id_atomically() {
        let mut rec = recorder();
        rec.submit_response(1, Direction::Up).unwrap();

        let bad = vec![Response::new(2, Direction::Up), Response::new(400, Direction::Up)];
        assert!(rec.restore(bad).is_err());
        assert_eq!(rec.answered_count(), 1);

        let good = vec![Response::new(1, Direction::Up), Response::new(2, Direction::Down)];
        rec.restore(good).unwrap();
        assert_eq!(rec.progress().current, 2);
        assert_eq!(rec.current_question().unwrap().id, 3);
    }
}
