use crate::models::{Category, Difficulty};
use thiserror::Error;

/// Conditions the session surfaces to the front end instead of transitioning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no {difficulty} questions available for {category}")]
    NoQuestions {
        category: Category,
        difficulty: Difficulty,
    },
}
