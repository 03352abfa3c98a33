//! Integration tests for the response recorder
//!
//! Cursor bounds, undo semantics, ordering supply and persistence restore

use swipecore::core::{Assessment, QuestionCatalog};
use swipecore::types::{Direction, Response};
use swipecore::{AssessmentError, CATALOG_SIZE};

#[test]
fn test_progress_moves_by_one() {
    let mut assessment = Assessment::default();
    let mut last = assessment.progress().current;
    assert_eq!(last, 0);

    for step in 0..10 {
        let progress = assessment.answer_current(Direction::Up).unwrap().unwrap();
        assert_eq!(progress.current, last + 1, "step {}", step);
        last = progress.current;
    }
    for _ in 0..10 {
        assessment.undo_last_response().unwrap();
        assert_eq!(assessment.progress().current, last - 1);
        last -= 1;
    }
    assert_eq!(last, 0);
    assert!(assessment.undo_last_response().is_none());
    assert_eq!(assessment.progress().current, 0);
}

#[test]
fn test_progress_percentage_reaches_hundred() {
    let mut assessment = Assessment::default();
    while assessment.answer_current(Direction::Left).is_some() {}

    let progress = assessment.progress();
    assert_eq!(progress.current, CATALOG_SIZE);
    assert_eq!(progress.total, CATALOG_SIZE);
    assert_eq!(progress.percentage, 100.0);
    assert!(assessment.current_question().is_none());
}

#[test]
fn test_reset_discards_run() {
    let mut assessment = Assessment::default();
    while assessment.answer_current(Direction::Up).is_some() {}
    assert!(assessment.classify().is_ok());

    assessment.reset();
    assert!(assessment.responses().is_empty());
    assert_eq!(assessment.current_question().unwrap().id, 1);
    assert!(matches!(
        assessment.classify(),
        Err(AssessmentError::IncompleteAssessment { answered: 0, .. })
    ));
}

#[test]
fn test_shuffled_order_gives_same_scores() {
    let catalog = QuestionCatalog::builtin();
    let direction_for = |id: u32| Direction::ALL[(id as usize * 7) % 4];

    let mut in_order = Assessment::new(catalog.clone());
    while let Some(id) = in_order.current_question().map(|q| q.id) {
        in_order.submit_response(id, direction_for(id)).unwrap();
    }

    // Interleave from both ends: 1, 57, 2, 56, ...
    let mut order = Vec::with_capacity(CATALOG_SIZE);
    let (mut lo, mut hi) = (1u32, CATALOG_SIZE as u32);
    while lo <= hi {
        order.push(lo);
        if lo != hi {
            order.push(hi);
        }
        lo += 1;
        hi -= 1;
    }
    let mut shuffled = Assessment::with_order(catalog, order).unwrap();
    while let Some(id) = shuffled.current_question().map(|q| q.id) {
        shuffled.submit_response(id, direction_for(id)).unwrap();
    }

    assert_eq!(in_order.calculate_scores().unwrap(), shuffled.calculate_scores().unwrap());
    assert_eq!(in_order.classify().unwrap(), shuffled.classify().unwrap());
}

#[test]
fn test_restore_from_persisted_json() {
    let mut original = Assessment::default();
    for id in 1..=20 {
        original.submit_response(id, Direction::Right).unwrap();
    }
    let json = serde_json::to_string(original.responses()).unwrap();

    let persisted: Vec<Response> = serde_json::from_str(&json).unwrap();
    let mut restored = Assessment::default();
    restored.restore(persisted).unwrap();

    assert_eq!(restored.progress(), original.progress());
    assert_eq!(restored.responses(), original.responses());
    assert_eq!(restored.current_question().unwrap().id, 21);
}

#[test]
fn test_restore_minimal_wire_format() {
    let json = r#"[{"questionId":1,"direction":"up"},{"questionId":2,"direction":"down"}]"#;
    let responses: Vec<Response> = serde_json::from_str(json).unwrap();

    let mut assessment = Assessment::default();
    assessment.restore(responses).unwrap();
    assert_eq!(assessment.progress().current, 2);

    let bad: Vec<Response> = serde_json::from_str(r#"[{"questionId":58,"direction":"up"}]"#).unwrap();
    assert_eq!(
        assessment.restore(bad).unwrap_err(),
        AssessmentError::NotFound { question_id: 58 }
    );
    assert_eq!(assessment.progress().current, 2);
}

#[test]
fn test_invalid_direction_rejected_on_the_wire() {
    let json = r#"[{"questionId":1,"direction":"sideways"}]"#;
    assert!(serde_json::from_str::<Vec<Response>>(json).is_err());
}

#[test]
fn test_order_with_foreign_id_is_invalid_order() {
    let mut order: Vec<u32> = (1..=CATALOG_SIZE as u32).collect();
    order[30] = 500;

    let err = Assessment::with_order(QuestionCatalog::builtin(), order).unwrap_err();
    assert!(matches!(err, AssessmentError::InvalidOrder(_)));
    assert_eq!(err.code(), "INVALID_ORDER");
}
