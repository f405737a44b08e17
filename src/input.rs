use crate::app::App;
use crate::bank::{QuestionSource, categories};
use crate::models::{Difficulty, Screen};
use crate::session::TimerCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes one key press to the handler of the current screen and returns what
/// the countdown has to do.
pub fn handle_key<S: QuestionSource>(app: &mut App<S>, key: KeyEvent) -> TimerCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return TimerCommand::Cancel;
    }
    match app.state().screen() {
        Screen::Landing => handle_landing_input(app, key),
        Screen::CategorySelect => handle_category_input(app, key),
        Screen::InProgress => handle_quiz_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
}

pub fn handle_landing_input<S: QuestionSource>(app: &mut App<S>, key: KeyEvent) -> TimerCommand {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.run(|s| s.open_categories()),
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            TimerCommand::Keep
        }
        _ => TimerCommand::Keep,
    }
}

pub fn handle_category_input<S: QuestionSource>(
    app: &mut App<S>,
    key: KeyEvent,
) -> TimerCommand {
    let difficulty = app.state().selected_difficulty();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_category_cursor(false);
            TimerCommand::Keep
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_category_cursor(true);
            TimerCommand::Keep
        }
        KeyCode::Enter | KeyCode::Char(' ') => match categories().get(app.category_cursor) {
            Some(info) => {
                let id = info.id;
                app.run(|s| s.select_category(id))
            }
            None => TimerCommand::Keep,
        },
        KeyCode::Left => app.run(|s| s.set_difficulty(difficulty.easier())),
        KeyCode::Right => app.run(|s| s.set_difficulty(difficulty.harder())),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.run(|s| s.set_difficulty(Difficulty::ALL[index]))
        }
        KeyCode::Char('s') => app.run(|s| s.start_quiz()),
        KeyCode::Esc | KeyCode::Backspace => app.run(|s| s.back_to_landing()),
        _ => TimerCommand::Keep,
    }
}

pub fn handle_quiz_input<S: QuestionSource>(app: &mut App<S>, key: KeyEvent) -> TimerCommand {
    if app.confirm_quit {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.run(|s| s.reset_quiz()),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.confirm_quit = false;
                TimerCommand::Keep
            }
            _ => TimerCommand::Keep,
        };
    }

    if app.pending_jump {
        app.pending_jump = false;
        return match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                app.run(|s| s.go_to_question(index))
            }
            _ => TimerCommand::Keep,
        };
    }

    match key.code {
        KeyCode::Esc => {
            app.confirm_quit = true;
            TimerCommand::Keep
        }
        KeyCode::Up => {
            app.move_option_cursor(false);
            TimerCommand::Keep
        }
        KeyCode::Down => {
            app.move_option_cursor(true);
            TimerCommand::Keep
        }
        KeyCode::Char(' ') => {
            let option = app.option_cursor;
            answer(app, option)
        }
        KeyCode::Char(c @ 'a'..='d') => answer(app, c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='4') => answer(app, c as usize - '1' as usize),
        KeyCode::Enter => advance(app),
        KeyCode::Tab => {
            let elapsed = app.elapsed_on_question();
            app.run(|s| s.skip_question(elapsed));
            app.run(|s| s.next_question())
        }
        KeyCode::Left => app.run(|s| s.previous_question()),
        KeyCode::Right => app.run(|s| s.next_question()),
        KeyCode::Char('g') => {
            app.pending_jump = true;
            TimerCommand::Keep
        }
        KeyCode::Char('f') => app.run(|s| s.submit_quiz()),
        _ => TimerCommand::Keep,
    }
}

fn answer<S: QuestionSource>(app: &mut App<S>, option: usize) -> TimerCommand {
    app.option_cursor = option;
    let elapsed = app.elapsed_on_question();
    app.run(|s| s.answer_question(option, elapsed))
}

/// Moves on from the current question, skipping it first when unanswered.
/// Submits on the last question.
fn advance<S: QuestionSource>(app: &mut App<S>) -> TimerCommand {
    if app.state().current_answer().is_none() {
        let elapsed = app.elapsed_on_question();
        app.run(|s| s.skip_question(elapsed));
    }
    if app.state().is_last_question() {
        app.run(|s| s.submit_quiz())
    } else {
        app.run(|s| s.next_question())
    }
}

pub fn handle_results_input<S: QuestionSource>(
    app: &mut App<S>,
    key: KeyEvent,
) -> TimerCommand {
    match key.code {
        KeyCode::Char('r') => app.run(|s| s.open_categories()),
        KeyCode::Char('h') | KeyCode::Enter => app.run(|s| s.reset_quiz()),
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            TimerCommand::Keep
        }
        KeyCode::Up => {
            app.results_scroll = app.results_scroll.saturating_sub(1);
            TimerCommand::Keep
        }
        KeyCode::Down => {
            app.results_scroll = app.results_scroll.saturating_add(1);
            TimerCommand::Keep
        }
        _ => TimerCommand::Keep,
    }
}
