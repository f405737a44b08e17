//! Quiz session state machine.
//!
//! [`SessionState`] is a plain value; [`SessionState::apply`] is the only way to
//! change it. Every action that is invalid for the current screen is ignored.
//! `apply` reports what the countdown driver has to do as a [`TimerCommand`].

use crate::bank::{QuestionSource, StaticBank};
use crate::config::{POINTS_PER_CORRECT, QUESTIONS_PER_QUIZ};
use crate::error::QuizError;
use crate::logger;
use crate::models::{
    AnswerRecord, Category, Difficulty, Question, Screen, SelectedOption,
};
use crate::stats::ResultsSummary;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Landing -> CategorySelect, or Results -> CategorySelect to retry.
    OpenCategories,
    /// CategorySelect -> Landing.
    BackToLanding,
    SelectCategory(Category),
    SetDifficulty(Difficulty),
    /// Begin a quiz with an already drawn question list.
    StartQuiz(Vec<Question>),
    AnswerQuestion { option: usize, time_spent: u32 },
    SkipQuestion { time_spent: u32 },
    NextQuestion,
    PreviousQuestion,
    GoToQuestion(usize),
    SubmitQuiz,
    ResetQuiz,
    /// One elapsed second of the countdown.
    Tick,
}

/// What the countdown driver must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    /// Drop the scheduled tick and start a fresh full period.
    Restart,
    /// Drop the scheduled tick and schedule nothing.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerLevel {
    Normal,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    screen: Screen,
    selected_category: Option<Category>,
    selected_difficulty: Difficulty,
    question_list: Vec<Question>,
    answers: Vec<Option<AnswerRecord>>,
    current_index: usize,
    time_remaining_seconds: u32,
    timer_running: bool,
    notice: Option<QuizError>,
}

impl SessionState {
    pub fn apply(&mut self, action: Action) -> TimerCommand {
        match action {
            Action::OpenCategories => {
                if matches!(self.screen, Screen::Landing | Screen::Results) {
                    self.screen = Screen::CategorySelect;
                    self.notice = None;
                }
                TimerCommand::Keep
            }
            Action::BackToLanding => {
                if self.screen == Screen::CategorySelect {
                    self.screen = Screen::Landing;
                    self.notice = None;
                }
                TimerCommand::Keep
            }
            Action::SelectCategory(category) => {
                if self.screen == Screen::CategorySelect {
                    self.selected_category = Some(category);
                    self.notice = None;
                }
                TimerCommand::Keep
            }
            Action::SetDifficulty(difficulty) => {
                if self.screen == Screen::CategorySelect {
                    self.selected_difficulty = difficulty;
                    self.notice = None;
                }
                TimerCommand::Keep
            }
            Action::StartQuiz(questions) => self.start(questions),
            Action::AnswerQuestion { option, time_spent } => {
                self.record(SelectedOption::Chosen(option), time_spent);
                TimerCommand::Keep
            }
            Action::SkipQuestion { time_spent } => {
                self.record(SelectedOption::None, time_spent);
                TimerCommand::Keep
            }
            Action::NextQuestion => {
                if self.in_progress() && self.current_index + 1 < self.question_list.len() {
                    self.move_to(self.current_index + 1)
                } else {
                    TimerCommand::Keep
                }
            }
            Action::PreviousQuestion => {
                if self.in_progress() && self.current_index > 0 {
                    self.move_to(self.current_index - 1)
                } else {
                    TimerCommand::Keep
                }
            }
            Action::GoToQuestion(index) => {
                if self.in_progress() && index < self.question_list.len() {
                    self.move_to(index)
                } else {
                    TimerCommand::Keep
                }
            }
            Action::SubmitQuiz => {
                if self.in_progress() {
                    self.timer_running = false;
                    self.screen = Screen::Results;
                    TimerCommand::Cancel
                } else {
                    TimerCommand::Keep
                }
            }
            Action::ResetQuiz => {
                *self = Self::default();
                TimerCommand::Cancel
            }
            Action::Tick => self.tick(),
        }
    }

    fn start(&mut self, questions: Vec<Question>) -> TimerCommand {
        if self.screen != Screen::CategorySelect {
            return TimerCommand::Keep;
        }
        let Some(category) = self.selected_category else {
            return TimerCommand::Keep;
        };
        if questions.is_empty() {
            self.notice = Some(QuizError::NoQuestions {
                category,
                difficulty: self.selected_difficulty,
            });
            return TimerCommand::Keep;
        }

        self.answers = vec![None; questions.len()];
        self.question_list = questions;
        self.current_index = 0;
        self.time_remaining_seconds = self.time_limit();
        self.timer_running = true;
        self.notice = None;
        self.screen = Screen::InProgress;
        TimerCommand::Restart
    }

    fn record(&mut self, selected_option: SelectedOption, time_spent: u32) {
        if !self.in_progress() {
            return;
        }
        let Some(question) = self.question_list.get(self.current_index) else {
            return;
        };
        if let SelectedOption::Chosen(option) = selected_option
            && option >= question.options.len()
        {
            return;
        }

        let record = AnswerRecord {
            question_id: question.id,
            selected_option,
            is_correct: selected_option == SelectedOption::Chosen(question.correct_answer),
            time_spent_seconds: time_spent.min(question.time_limit),
            time_limit_seconds: question.time_limit,
        };
        self.answers[self.current_index] = Some(record);
    }

    fn move_to(&mut self, index: usize) -> TimerCommand {
        self.current_index = index;
        self.time_remaining_seconds = self.time_limit();
        self.timer_running = true;
        TimerCommand::Restart
    }

    fn tick(&mut self) -> TimerCommand {
        if !self.in_progress() || !self.timer_running {
            return TimerCommand::Keep;
        }
        if self.time_remaining_seconds > 1 {
            self.time_remaining_seconds -= 1;
            return TimerCommand::Keep;
        }

        // Time's up: the skip must land on the question that ran out, so it
        // happens before any navigation resets the countdown.
        if self.current_answer().is_none() {
            self.record(SelectedOption::None, self.time_limit());
        }
        if self.is_last_question() {
            self.apply(Action::SubmitQuiz)
        } else {
            self.apply(Action::NextQuestion)
        }
    }

    fn in_progress(&self) -> bool {
        self.screen == Screen::InProgress
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected_difficulty
    }

    pub fn questions(&self) -> &[Question] {
        &self.question_list
    }

    pub fn answers(&self) -> &[Option<AnswerRecord>] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn notice(&self) -> Option<&QuizError> {
        self.notice.as_ref()
    }

    /// Countdown length for the active difficulty.
    pub fn time_limit(&self) -> u32 {
        self.selected_difficulty.time_per_question()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.question_list.get(self.current_index)
    }

    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers.get(self.current_index).and_then(Option::as_ref)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_list.len()
    }

    pub fn timer_level(&self) -> TimerLevel {
        let limit = self.time_limit();
        if limit == 0 {
            return TimerLevel::Danger;
        }
        let remaining = self.time_remaining_seconds * 100;
        if remaining <= limit * 25 {
            TimerLevel::Danger
        } else if remaining <= limit * 50 {
            TimerLevel::Warning
        } else {
            TimerLevel::Normal
        }
    }

    fn recorded(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.answers.iter().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.recorded().count()
    }

    pub fn correct_count(&self) -> usize {
        self.recorded().filter(|a| a.is_correct).count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.recorded()
            .filter(|a| !a.is_correct && !a.selected_option.is_none())
            .count()
    }

    /// Recorded skips, plus every unanswered position once the quiz is submitted.
    pub fn skipped_count(&self) -> usize {
        let skipped = self
            .recorded()
            .filter(|a| a.selected_option.is_none())
            .count();
        if self.screen == Screen::Results {
            skipped + self.answers.iter().filter(|a| a.is_none()).count()
        } else {
            skipped
        }
    }

    pub fn total_score(&self) -> u32 {
        self.correct_count() as u32 * POINTS_PER_CORRECT
    }

    pub fn total_time_spent(&self) -> u32 {
        self.recorded().map(|a| a.time_spent_seconds).sum()
    }

    pub fn average_time_per_question(&self) -> f64 {
        match self.answered_count() {
            0 => 0.0,
            n => f64::from(self.total_time_spent()) / n as f64,
        }
    }

    pub fn percentage_score(&self) -> f64 {
        match self.question_list.len() {
            0 => 0.0,
            n => self.correct_count() as f64 / n as f64 * 100.0,
        }
    }
}

/// Owns one session together with the bank it draws from.
pub struct QuizSession<S = StaticBank> {
    state: SessionState,
    source: S,
    rng: StdRng,
    questions_per_quiz: usize,
}

impl QuizSession<StaticBank> {
    pub fn with_static_bank(seed: Option<u64>) -> Self {
        Self::new(StaticBank, QUESTIONS_PER_QUIZ, seed)
    }
}

impl<S: QuestionSource> QuizSession<S> {
    pub fn new(source: S, questions_per_quiz: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: SessionState::default(),
            source,
            rng,
            questions_per_quiz,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> TimerCommand {
        let before = self.state.screen();
        let answered = self.state.answered_count();
        let ticked = action == Action::Tick;

        let command = self.state.apply(action);

        if ticked && self.state.answered_count() > answered {
            logger::log("Time expired, question auto-skipped");
        }
        let after = self.state.screen();
        if before != after {
            logger::log(&format!("Screen {:?} -> {:?}", before, after));
            if after == Screen::Results {
                logger::log_json("results", &ResultsSummary::from_state(&self.state));
            }
        }
        command
    }

    pub fn open_categories(&mut self) -> TimerCommand {
        self.dispatch(Action::OpenCategories)
    }

    pub fn back_to_landing(&mut self) -> TimerCommand {
        self.dispatch(Action::BackToLanding)
    }

    pub fn select_category(&mut self, category: Category) -> TimerCommand {
        self.dispatch(Action::SelectCategory(category))
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> TimerCommand {
        self.dispatch(Action::SetDifficulty(difficulty))
    }

    /// Draws a fresh question list and begins the quiz. Refused with a notice
    /// when the selected pool is empty.
    pub fn start_quiz(&mut self) -> TimerCommand {
        if self.state.screen() != Screen::CategorySelect {
            return TimerCommand::Keep;
        }
        let Some(category) = self.state.selected_category() else {
            return TimerCommand::Keep;
        };
        let difficulty = self.state.selected_difficulty();
        let questions =
            self.source
                .sample(category, difficulty, self.questions_per_quiz, &mut self.rng);
        logger::log(&format!(
            "Starting {} {} quiz with {} questions",
            difficulty,
            category,
            questions.len()
        ));

        let command = self.dispatch(Action::StartQuiz(questions));
        if let Some(notice) = self.state.notice() {
            logger::log(&format!("Quiz start refused: {}", notice));
        }
        command
    }

    pub fn answer_question(&mut self, option: usize, time_spent: u32) -> TimerCommand {
        self.dispatch(Action::AnswerQuestion { option, time_spent })
    }

    pub fn skip_question(&mut self, time_spent: u32) -> TimerCommand {
        self.dispatch(Action::SkipQuestion { time_spent })
    }

    pub fn next_question(&mut self) -> TimerCommand {
        self.dispatch(Action::NextQuestion)
    }

    pub fn previous_question(&mut self) -> TimerCommand {
        self.dispatch(Action::PreviousQuestion)
    }

    pub fn go_to_question(&mut self, index: usize) -> TimerCommand {
        self.dispatch(Action::GoToQuestion(index))
    }

    pub fn submit_quiz(&mut self) -> TimerCommand {
        self.dispatch(Action::SubmitQuiz)
    }

    pub fn reset_quiz(&mut self) -> TimerCommand {
        self.dispatch(Action::ResetQuiz)
    }

    pub fn tick(&mut self) -> TimerCommand {
        self.dispatch(Action::Tick)
    }
}
