//! Assessment: one responder's session, owned by the caller
//!
//! Holds the recorder, aggregator and classifier for a single run. Hosts
//! serving many users keep one `Assessment` per session; nothing here is
//! shared or global beyond the immutable catalog.

use std::sync::Arc;

use crate::core::{CategoryAggregator, QuestionCatalog, ResponseRecorder, ScoreBreakdown, TypeClassifier};
use crate::error::{AssessmentError, Result};
use crate::types::{CategoryScores, ClassificationResult, Direction, Progress, Question, Response};

#[derive(Debug, Clone)]
pub struct Assessment {
    recorder: ResponseRecorder,
    aggregator: CategoryAggregator,
    classifier: TypeClassifier,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new(QuestionCatalog::builtin())
    }
}

impl Assessment {
    /// New run over `catalog`, presented in catalog order
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            aggregator: CategoryAggregator::new(Arc::clone(&catalog)),
            recorder: ResponseRecorder::new(catalog),
            classifier: TypeClassifier::new(),
        }
    }

    /// New run presenting questions in `order` (a permutation of the catalog ids)
    pub fn with_order(catalog: Arc<QuestionCatalog>, order: Vec<u32>) -> Result<Self> {
        Ok(Self {
            aggregator: CategoryAggregator::new(Arc::clone(&catalog)),
            recorder: ResponseRecorder::with_order(catalog, order)?,
            classifier: TypeClassifier::new(),
        })
    }

    pub fn with_classifier(mut self, classifier: TypeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn submit_response(&mut self, question_id: u32, direction: Direction) -> Result<Progress> {
        self.recorder.submit_response(question_id, direction)
    }

    /// Answer whatever question is under the cursor.
    ///
    /// Returns `None` once every question has been presented.
    pub fn answer_current(&mut self, direction: Direction) -> Option<Result<Progress>> {
        let id = self.recorder.current_question()?.id;
        Some(self.recorder.submit_response(id, direction))
    }

    pub fn undo_last_response(&mut self) -> Option<&Question> {
        self.recorder.undo_last_response()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.recorder.current_question()
    }

    pub fn progress(&self) -> Progress {
        self.recorder.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.recorder.is_complete()
    }

    pub fn reset(&mut self) {
        self.recorder.reset();
    }

    /// Rebuild from a persisted response list
    pub fn restore(&mut self, responses: Vec<Response>) -> Result<()> {
        self.recorder.restore(responses)
    }

    pub fn responses(&self) -> &[Response] {
        self.recorder.responses()
    }

    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        self.recorder.catalog()
    }

    /// Current mean scores; derived on every call, never cached
    pub fn calculate_scores(&self) -> Result<CategoryScores> {
        self.aggregator.calculate_scores(self.recorder.responses())
    }

    pub fn score_breakdown(&self) -> Result<ScoreBreakdown> {
        self.aggregator.breakdown(self.recorder.responses())
    }

    /// Classify a completed run.
    ///
    /// Fails with `IncompleteAssessment` before every question is answered.
    pub fn classify(&self) -> Result<ClassificationResult> {
        if !self.is_complete() {
            return Err(AssessmentError::IncompleteAssessment {
                answered: self.recorder.answered_count(),
                total: self.recorder.total(),
            });
        }
        let scores = self.calculate_scores()?;
        Ok(self.classifier.classify(&scores))
    }
}

// =============================================================================
// TESTS
// =============================================================================
