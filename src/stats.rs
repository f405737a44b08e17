//! Derived results analytics. Everything here is recomputed from a
//! [`SessionState`] snapshot and never stored.

use crate::models::{Category, Difficulty, SelectedOption};
use crate::session::SessionState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Grade::APlus => "🏆",
            Grade::A => "🌟",
            Grade::B => "👍",
            Grade::C => "📚",
            Grade::D => "💪",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::APlus => "Outstanding!",
            Grade::A => "Excellent!",
            Grade::B => "Good job!",
            Grade::C => "Keep practicing!",
            Grade::D => "Don't give up!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Correct => "Correct",
            Outcome::Incorrect => "Incorrect",
            Outcome::Skipped => "Skipped",
        }
    }
}

/// Outcome counts with empty slices left out.
pub fn outcome_breakdown(state: &SessionState) -> Vec<(Outcome, usize)> {
    [
        (Outcome::Correct, state.correct_count()),
        (Outcome::Incorrect, state.incorrect_count()),
        (Outcome::Skipped, state.skipped_count()),
    ]
    .into_iter()
    .filter(|&(_, count)| count > 0)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBar {
    pub label: String,
    pub time_spent: u32,
    pub limit: u32,
}

pub fn time_breakdown(state: &SessionState) -> Vec<TimeBar> {
    state
        .questions()
        .iter()
        .zip(state.answers())
        .enumerate()
        .map(|(index, (question, answer))| TimeBar {
            label: format!("Q{}", index + 1),
            time_spent: answer.as_ref().map_or(0, |a| a.time_spent_seconds),
            limit: question.time_limit,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow<'a> {
    pub number: usize,
    pub question: &'a str,
    pub outcome: Outcome,
    /// Chosen option text, absent for skips.
    pub your_answer: Option<&'a str>,
    /// Correct option text, absent when the answer was right.
    pub correct_answer: Option<&'a str>,
    pub time_spent: u32,
}

pub fn review_rows(state: &SessionState) -> Vec<ReviewRow<'_>> {
    state
        .questions()
        .iter()
        .zip(state.answers())
        .enumerate()
        .map(|(index, (question, answer))| {
            let selected = answer
                .as_ref()
                .map_or(SelectedOption::None, |a| a.selected_option);
            let is_correct = answer.as_ref().is_some_and(|a| a.is_correct);
            let outcome = match (is_correct, selected) {
                (true, _) => Outcome::Correct,
                (false, SelectedOption::None) => Outcome::Skipped,
                (false, SelectedOption::Chosen(_)) => Outcome::Incorrect,
            };

            ReviewRow {
                number: index + 1,
                question: &question.question,
                outcome,
                your_answer: selected
                    .index()
                    .and_then(|i| question.options.get(i))
                    .map(String::as_str),
                correct_answer: (!is_correct).then(|| question.correct_option()),
                time_spent: answer.as_ref().map_or(0, |a| a.time_spent_seconds),
            }
        })
        .collect()
}

/// Flat results record, logged as JSON when a quiz is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub category: Option<Category>,
    pub difficulty: Difficulty,
    pub questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    pub total_score: u32,
    pub percentage: f64,
    pub total_time_spent: u32,
    pub average_time_per_question: f64,
    pub grade: Grade,
}

impl ResultsSummary {
    pub fn from_state(state: &SessionState) -> Self {
        let percentage = state.percentage_score();
        Self {
            category: state.selected_category(),
            difficulty: state.selected_difficulty(),
            questions: state.questions().len(),
            correct: state.correct_count(),
            incorrect: state.incorrect_count(),
            skipped: state.skipped_count(),
            total_score: state.total_score(),
            percentage,
            total_time_spent: state.total_time_spent(),
            average_time_per_question: state.average_time_per_question(),
            grade: Grade::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use crate::session::Action;

    fn finished_state() -> SessionState {
        let questions: Vec<Question> = (1..=5)
            .map(|id| Question {
                id,
                category: Category::History,
                difficulty: Difficulty::Easy,
                question: format!("Q{}?", id),
                options: ["w", "x", "y", "z"].map(str::to_string),
                correct_answer: 1,
                time_limit: 30,
            })
            .collect();

        let mut state = SessionState::default();
        state.apply(Action::OpenCategories);
        state.apply(Action::SelectCategory(Category::History));
        state.apply(Action::SetDifficulty(Difficulty::Easy));
        state.apply(Action::StartQuiz(questions));
        state.apply(Action::AnswerQuestion {
            option: 1,
            time_spent: 4,
        });
        state.apply(Action::NextQuestion);
        state.apply(Action::AnswerQuestion {
            option: 3,
            time_spent: 9,
        });
        state.apply(Action::NextQuestion);
        state.apply(Action::SkipQuestion { time_spent: 2 });
        state.apply(Action::SubmitQuiz);
        state
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(89.9), Grade::A);
        assert_eq!(Grade::from_percentage(70.0), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::C);
        assert_eq!(Grade::from_percentage(59.0), Grade::D);
        assert_eq!(Grade::from_percentage(0.0), Grade::D);
        assert_eq!(Grade::D.message(), "Don't give up!");
    }

    #[test]
    fn test_outcome_breakdown() {
        let state = finished_state();
        assert_eq!(
            outcome_breakdown(&state),
            vec![
                (Outcome::Correct, 1),
                (Outcome::Incorrect, 1),
                (Outcome::Skipped, 3),
            ]
        );
    }

    #[test]
    fn test_outcome_breakdown_drops_empty_slices() {
        let state = SessionState::default();
        assert!(outcome_breakdown(&state).is_empty());
    }

    #[test]
    fn test_time_breakdown() {
        let bars = time_breakdown(&finished_state());
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0].label, "Q1");
        assert_eq!(bars[1].time_spent, 9);
        assert_eq!(bars[4].time_spent, 0);
        assert!(bars.iter().all(|bar| bar.limit == 30));
    }

    #[test]
    fn test_review_rows() {
        let state = finished_state();
        let rows = review_rows(&state);

        assert_eq!(rows[0].outcome, Outcome::Correct);
        assert_eq!(rows[0].your_answer, Some("x"));
        assert_eq!(rows[0].correct_answer, None);

        assert_eq!(rows[1].outcome, Outcome::Incorrect);
        assert_eq!(rows[1].your_answer, Some("z"));
        assert_eq!(rows[1].correct_answer, Some("x"));

        assert_eq!(rows[2].outcome, Outcome::Skipped);
        assert_eq!(rows[2].your_answer, None);
        assert_eq!(rows[2].time_spent, 2);

        assert_eq!(rows[4].outcome, Outcome::Skipped);
        assert_eq!(rows[4].time_spent, 0);
    }

    #[test]
    fn test_results_summary_serializes() {
        let summary = ResultsSummary::from_state(&finished_state());
        assert_eq!(summary.total_score, 10);
        assert_eq!(summary.grade, Grade::D);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["category"], "history");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["grade"], "D");
        assert_eq!(json["skipped"], 3);
    }
}
