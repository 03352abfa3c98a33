//! Question Catalog: validated, load-once table of assessment cards
//!
//! Load-time checks:
//! - ids form the contiguous set 1..=N
//! - every question maps to one of the 15 known categories
//! - every category owns at least one question
//! - every weight table has exactly up/right/left/down in {-2, -1, 1, 2}

use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::error::{AssessmentError, Result};
use crate::types::{Category, ConnectionCategory, EnneagramType, Question};

use ConnectionCategory::*;
use EnneagramType::*;

/// Built-in cards: (connection or enneagram category, reverse coded, prompt).
/// Ids are assigned in order starting at 1.
const BUILTIN_QUESTIONS: [(Category, bool, &str); 57] = [
    // Quality presence
    (Category::Connection(QualityPresence), false, "An evening with phones away and your full attention means the world to me."),
    (Category::Connection(QualityPresence), false, "I feel closest when someone makes unhurried time just for us."),
    (Category::Connection(QualityPresence), false, "Long conversations where nobody checks the clock fill me up."),
    (Category::Connection(QualityPresence), false, "Being fully listened to matters more to me than being given advice."),
    (Category::Connection(QualityPresence), false, "A quiet walk together can be the best kind of date."),
    // Verbal affirmation
    (Category::Connection(VerbalAffirmation), false, "Hearing \"I'm proud of you\" stays with me for days."),
    (Category::Connection(VerbalAffirmation), false, "A heartfelt note or text can turn my whole day around."),
    (Category::Connection(VerbalAffirmation), false, "I need to hear the words, not just see the gestures."),
    (Category::Connection(VerbalAffirmation), false, "Compliments about who I am land deeper than gifts."),
    (Category::Connection(VerbalAffirmation), true, "Kind words feel a bit hollow to me; actions say more."),
    // Physical touch
    (Category::Connection(PhysicalTouch), false, "A hug after a long day resets me."),
    (Category::Connection(PhysicalTouch), false, "Holding hands in public makes me feel chosen."),
    (Category::Connection(PhysicalTouch), false, "I reach for touch when I want to feel connected."),
    (Category::Connection(PhysicalTouch), false, "Sitting close on the couch is one of my favourite ways to unwind."),
    (Category::Connection(PhysicalTouch), true, "I prefer a bit of personal space, even with people I love."),
    // Acts of service
    (Category::Connection(ActsOfService), false, "When someone handles a chore I dread, I feel truly cared for."),
    (Category::Connection(ActsOfService), false, "Help without being asked says \"I love you\" to me."),
    (Category::Connection(ActsOfService), false, "I notice when people follow through on what they said they'd do."),
    (Category::Connection(ActsOfService), false, "Making my life easier is the most romantic thing you can do."),
    (Category::Connection(ActsOfService), true, "I'd rather people not fuss over doing things for me."),
    // Thoughtful gifts
    (Category::Connection(ThoughtfulGifts), false, "A small gift that shows you were thinking of me means a lot."),
    (Category::Connection(ThoughtfulGifts), false, "I keep tokens and mementos from the people I love."),
    (Category::Connection(ThoughtfulGifts), false, "Picking the perfect present for someone is one of my joys."),
    (Category::Connection(ThoughtfulGifts), false, "A surprise souvenir from a trip makes me feel remembered."),
    (Category::Connection(ThoughtfulGifts), true, "Gifts don't really matter to me in a relationship."),
    // Shared growth
    (Category::Connection(SharedGrowth), false, "I feel closest when we are learning something new together."),
    (Category::Connection(SharedGrowth), false, "Talking about goals and dreams with a partner energises me."),
    (Category::Connection(SharedGrowth), false, "I love a partner who challenges me to grow."),
    (Category::Connection(SharedGrowth), false, "Trying a new class or adventure together is my ideal weekend."),
    (Category::Connection(SharedGrowth), true, "I'm happiest when a relationship stays comfortable and predictable."),
    // Type 1
    (Category::Enneagram(Type1), false, "I hold myself to high standards in nearly everything."),
    (Category::Enneagram(Type1), false, "I notice what could be improved almost everywhere I look."),
    (Category::Enneagram(Type1), true, "I'm fine leaving things a little messy or unfinished."),
    // Type 2
    (Category::Enneagram(Type2), false, "I often know what others need before they ask."),
    (Category::Enneagram(Type2), false, "Being needed by the people I love matters to me."),
    (Category::Enneagram(Type2), false, "I find it easier to give help than to ask for it."),
    // Type 3
    (Category::Enneagram(Type3), false, "Reaching my goals is a big part of how I feel good about myself."),
    (Category::Enneagram(Type3), false, "I adapt quickly to make a good impression."),
    (Category::Enneagram(Type3), false, "I like being recognised for what I accomplish."),
    // Type 4
    (Category::Enneagram(Type4), false, "I feel things more deeply than most people around me."),
    (Category::Enneagram(Type4), false, "Being authentic matters more to me than fitting in."),
    (Category::Enneagram(Type4), true, "I rarely dwell on my emotions or on what's missing in my life."),
    // Type 5
    (Category::Enneagram(Type5), false, "I need plenty of time alone to recharge and think."),
    (Category::Enneagram(Type5), false, "I like to fully understand something before I act on it."),
    (Category::Enneagram(Type5), true, "I'd rather jump in than research things first."),
    // Type 6
    (Category::Enneagram(Type6), false, "I tend to plan for what might go wrong."),
    (Category::Enneagram(Type6), false, "Loyalty is one of the things I value most."),
    (Category::Enneagram(Type6), false, "I look for trusted people to check my decisions with."),
    // Type 7
    (Category::Enneagram(Type7), false, "I keep my options open so I never miss out on something fun."),
    (Category::Enneagram(Type7), false, "I bounce back from setbacks by looking for the next adventure."),
    (Category::Enneagram(Type7), false, "Routine quickly makes me restless."),
    // Type 8
    (Category::Enneagram(Type8), false, "I say what I think, even when it's uncomfortable."),
    (Category::Enneagram(Type8), false, "I step in to protect people who can't protect themselves."),
    (Category::Enneagram(Type8), true, "I usually let others take charge."),
    // Type 9
    (Category::Enneagram(Type9), false, "Keeping the peace matters more to me than winning an argument."),
    (Category::Enneagram(Type9), false, "I can easily see every side of a disagreement."),
    (Category::Enneagram(Type9), false, "I go along with plans to avoid conflict."),
];

lazy_static! {
    static ref BUILTIN: Arc<QuestionCatalog> = Arc::new(
        QuestionCatalog::from_questions(builtin_questions()).expect("built-in catalog is valid")
    );
}

fn builtin_questions() -> Vec<Question> {
    BUILTIN_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, (category, reverse, text))| Question::new(i as u32 + 1, *category, *reverse, *text))
        .collect()
}

/// Validated question table, indexed by id
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    /// Sorted by id; `questions[i].id == i + 1`
    questions: Vec<Question>,
    /// Question ids per category, ascending
    by_category: BTreeMap<Category, Vec<u32>>,
}

impl QuestionCatalog {
    /// The shared built-in 57-question catalog
    pub fn builtin() -> Arc<QuestionCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Validate and index a set of questions
    pub fn from_questions(mut questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(AssessmentError::InvalidCatalog("catalog is empty".into()));
        }

        questions.sort_by_key(|q| q.id);
        for (i, q) in questions.iter().enumerate() {
            let expected = i as u32 + 1;
            if q.id != expected {
                return Err(AssessmentError::InvalidCatalog(format!(
                    "ids must be contiguous from 1: expected {}, found {}",
                    expected, q.id
                )));
            }
            q.weights
                .validate()
                .map_err(|e| AssessmentError::InvalidCatalog(format!("question {}: {}", q.id, e)))?;
        }

        let mut by_category: BTreeMap<Category, Vec<u32>> = BTreeMap::new();
        for q in &questions {
            by_category.entry(q.category).or_default().push(q.id);
        }
        let missing: Vec<String> = Category::all()
            .filter(|c| !by_category.contains_key(c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentError::InvalidCatalog(format!(
                "categories without questions: {}",
                missing.join(", ")
            )));
        }

        debug!(questions = questions.len(), "question catalog loaded");
        Ok(Self { questions, by_category })
    }

    /// Parse a JSON array of question records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)
            .map_err(|e| AssessmentError::InvalidCatalog(e.to_string()))?;
        Self::from_questions(questions)
    }

    /// Load a JSON catalog from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AssessmentError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize back to the JSON record format
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.questions).unwrap_or_default()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        let idx = (id as usize).checked_sub(1)?;
        self.questions.get(idx)
    }

    /// Like `get`, but unknown ids are a `NotFound` error
    pub fn require(&self, id: u32) -> Result<&Question> {
        self.get(id).ok_or(AssessmentError::NotFound { question_id: id })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated catalog
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in id order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Ids in catalog order
    pub fn ids(&self) -> Vec<u32> {
        self.questions.iter().map(|q| q.id).collect()
    }

    /// Ids of the questions measuring `category`
    pub fn question_ids(&self, category: Category) -> &[u32] {
        self.by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

// =============================================================================
// TESTS
// =============================================================================
