use serde::Serialize;
use std::fmt;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    History,
    Geography,
    Sports,
    Entertainment,
    General,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Science,
        Category::History,
        Category::Geography,
        Category::Sports,
        Category::Entertainment,
        Category::General,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Science => "science",
            Category::History => "history",
            Category::Geography => "geography",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
            Category::General => "general",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    /// Seconds allowed per question at this difficulty.
    pub fn time_per_question(self) -> u32 {
        self.config().time_per_question
    }

    pub fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    pub fn easier(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().label)
    }
}

/// Semantic colour a front end should use for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHint {
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub label: &'static str,
    pub time_per_question: u32,
    pub color_hint: ColorHint,
}

const EASY: DifficultyConfig = DifficultyConfig {
    label: "Easy",
    time_per_question: 30,
    color_hint: ColorHint::Success,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    label: "Medium",
    time_per_question: 20,
    color_hint: ColorHint::Warning,
};

const HARD: DifficultyConfig = DifficultyConfig {
    label: "Hard",
    time_per_question: 15,
    color_hint: ColorHint::Destructive,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_answer: usize,
    pub time_limit: u32,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}

/// What the user picked for a question. `None` marks a skip or a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedOption {
    Chosen(usize),
    None,
}

impl SelectedOption {
    pub fn is_none(self) -> bool {
        matches!(self, SelectedOption::None)
    }

    pub fn index(self) -> Option<usize> {
        match self {
            SelectedOption::Chosen(index) => Some(index),
            SelectedOption::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub selected_option: SelectedOption,
    pub is_correct: bool,
    pub time_spent_seconds: u32,
    pub time_limit_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Screen {
    #[default]
    Landing,
    CategorySelect,
    InProgress,
    Results,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_time_limits() {
        assert_eq!(Difficulty::Easy.time_per_question(), 30);
        assert_eq!(Difficulty::Medium.time_per_question(), 20);
        assert_eq!(Difficulty::Hard.time_per_question(), 15);
    }

    #[test]
    fn test_default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_stepping_saturates() {
        assert_eq!(Difficulty::Hard.harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.easier(), Difficulty::Medium);
    }

    #[test]
    fn test_selected_option_index() {
        assert_eq!(SelectedOption::Chosen(2).index(), Some(2));
        assert_eq!(SelectedOption::None.index(), None);
        assert!(SelectedOption::None.is_none());
    }

    #[test]
    fn test_difficulty_display_uses_label() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(Category::Entertainment.to_string(), "entertainment");
    }
}
