use crate::bank::{QuestionSource, StaticBank, categories};
use crate::config::AppConfig;
use crate::models::OPTIONS_PER_QUESTION;
use crate::session::{QuizSession, SessionState, TimerCommand};
use std::time::{Duration, Instant};

/// Front-end state layered over one [`QuizSession`]. Cursors and scroll
/// offsets live here; everything quiz related lives in the session.
pub struct App<S = StaticBank> {
    pub session: QuizSession<S>,
    pub category_cursor: usize,
    pub option_cursor: usize,
    pub confirm_quit: bool,
    /// `g` was pressed; the next digit picks a question.
    pub pending_jump: bool,
    pub results_scroll: u16,
    pub should_quit: bool,
    question_shown_at: Instant,
}

impl App<StaticBank> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(QuizSession::new(
            StaticBank,
            config.questions_per_quiz,
            config.seed,
        ))
    }
}

impl<S: QuestionSource> App<S> {
    pub fn new(session: QuizSession<S>) -> Self {
        Self {
            session,
            category_cursor: 0,
            option_cursor: 0,
            confirm_quit: false,
            pending_jump: false,
            results_scroll: 0,
            should_quit: false,
            question_shown_at: Instant::now(),
        }
    }

    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    /// Runs a session action and keeps the cursors in step with it.
    pub fn run(
        &mut self,
        action: impl FnOnce(&mut QuizSession<S>) -> TimerCommand,
    ) -> TimerCommand {
        let command = action(&mut self.session);
        match command {
            TimerCommand::Restart => self.question_displayed(),
            TimerCommand::Cancel => {
                self.confirm_quit = false;
                self.pending_jump = false;
                self.results_scroll = 0;
            }
            TimerCommand::Keep => {}
        }
        command
    }

    pub fn on_tick(&mut self) -> TimerCommand {
        self.run(|session| session.tick())
    }

    fn question_displayed(&mut self) {
        self.question_shown_at = Instant::now();
        self.option_cursor = self
            .state()
            .current_answer()
            .and_then(|answer| answer.selected_option.index())
            .unwrap_or(0);
    }

    /// Whole seconds since the current question was shown, rounded.
    pub fn elapsed_on_question(&self) -> u32 {
        rounded_seconds(self.question_shown_at.elapsed())
    }

    pub fn move_category_cursor(&mut self, down: bool) {
        let last = categories().len().saturating_sub(1);
        self.category_cursor = if down {
            (self.category_cursor + 1).min(last)
        } else {
            self.category_cursor.saturating_sub(1)
        };
    }

    pub fn move_option_cursor(&mut self, down: bool) {
        self.option_cursor = if down {
            (self.option_cursor + 1) % OPTIONS_PER_QUESTION
        } else {
            (self.option_cursor + OPTIONS_PER_QUESTION - 1) % OPTIONS_PER_QUESTION
        };
    }
}

fn rounded_seconds(elapsed: Duration) -> u32 {
    let seconds = (elapsed.as_millis() + 500) / 1000;
    u32::try_from(seconds).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Difficulty};

    fn app() -> App {
        App::new(QuizSession::with_static_bank(Some(11)))
    }

    #[test]
    fn test_rounded_seconds() {
        assert_eq!(rounded_seconds(Duration::from_millis(0)), 0);
        assert_eq!(rounded_seconds(Duration::from_millis(499)), 0);
        assert_eq!(rounded_seconds(Duration::from_millis(500)), 1);
        assert_eq!(rounded_seconds(Duration::from_millis(4_600)), 5);
    }

    #[test]
    fn test_category_cursor_is_bounded() {
        let mut app = app();
        app.move_category_cursor(false);
        assert_eq!(app.category_cursor, 0);
        for _ in 0..20 {
            app.move_category_cursor(true);
        }
        assert_eq!(app.category_cursor, categories().len() - 1);
    }

    #[test]
    fn test_option_cursor_wraps() {
        let mut app = app();
        app.move_option_cursor(false);
        assert_eq!(app.option_cursor, 3);
        app.move_option_cursor(true);
        assert_eq!(app.option_cursor, 0);
    }

    #[test]
    fn test_restart_restores_option_cursor_from_answer() {
        let mut app = app();
        app.run(|s| s.open_categories());
        app.run(|s| s.select_category(Category::Science));
        app.run(|s| s.set_difficulty(Difficulty::Easy));
        assert_eq!(app.run(|s| s.start_quiz()), TimerCommand::Restart);

        app.run(|s| s.answer_question(2, 1));
        app.run(|s| s.next_question());
        assert_eq!(app.option_cursor, 0);

        app.run(|s| s.previous_question());
        assert_eq!(app.option_cursor, 2);
    }
}
