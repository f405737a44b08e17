pub mod layout;
mod categories;
mod landing;
mod quiz;
mod results;

pub use categories::draw_categories;
pub use landing::draw_landing;
pub use layout::{calculate_quiz_chunks, calculate_results_chunks, centered_rect};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use results::draw_results;

use crate::app::App;
use crate::bank::QuestionSource;
use crate::models::{ColorHint, Screen};
use crate::session::TimerLevel;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn draw<S: QuestionSource>(f: &mut Frame, app: &App<S>) {
    match app.state().screen() {
        Screen::Landing => draw_landing(f),
        Screen::CategorySelect => draw_categories(f, app.state(), app.category_cursor),
        Screen::InProgress => {
            draw_quiz(f, app.state(), app.option_cursor, app.pending_jump);
            if app.confirm_quit {
                draw_quit_confirmation(f);
            }
        }
        Screen::Results => draw_results(f, app.state(), app.results_scroll),
    }
}

pub(crate) fn hint_color(hint: ColorHint) -> Color {
    match hint {
        ColorHint::Success => Color::Green,
        ColorHint::Warning => Color::Yellow,
        ColorHint::Destructive => Color::Red,
    }
}

pub(crate) fn timer_color(level: TimerLevel) -> Color {
    match level {
        TimerLevel::Normal => Color::Green,
        TimerLevel::Warning => Color::Yellow,
        TimerLevel::Danger => Color::Red,
    }
}

/// Help bar line: each key in bold cyan followed by its description.
pub(crate) fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, description)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        if i + 1 < hints.len() {
            spans.push(Span::from(format!(" {}  ", description)));
        } else {
            spans.push(Span::from(format!(" {}", description)));
        }
    }
    Line::from(spans)
}
