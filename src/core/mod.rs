//! Core modules for Swipecore

pub mod aggregator;
pub mod assessment;
pub mod catalog;
pub mod classifier;
pub mod recorder;

pub use aggregator::{CategoryAggregator, CategoryTally, Contribution, ScoreBreakdown};
pub use assessment::Assessment;
pub use catalog::QuestionCatalog;
pub use classifier::{one_hot, primary_key, PrototypeSet, SwipeTable, TypeClassifier};
pub use recorder::ResponseRecorder;
