//! Core types for Swipecore

mod category;
mod direction;
mod output;
mod question;
mod reason;
mod response;
mod scores;
mod swipe_type;

pub use category::{Category, ConnectionCategory, Domain, EnneagramType};
pub use direction::Direction;
pub use output::ClassificationResult;
pub use question::{DirectionWeights, Question, QuestionRecord};
pub use reason::{BlendAxis, ClassificationReason};
pub use response::{Progress, Response};
pub use scores::CategoryScores;
pub use swipe_type::SwipeType;
