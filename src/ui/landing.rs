use super::key_hints;
use crate::bank::{StaticBank, categories};
use crate::models::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_landing(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("🧠 Trivia Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let fastest = Difficulty::ALL
        .iter()
        .map(|d| d.time_per_question())
        .min()
        .unwrap_or_default();
    let features = [
        (
            "Categories",
            format!("{} topics, from science to pop culture", categories().len()),
        ),
        (
            "Difficulty",
            format!("{} levels with their own time limits", Difficulty::ALL.len()),
        ),
        (
            "Countdown",
            format!("as little as {}s per question", fastest),
        ),
        (
            "Results",
            "score, grade, time breakdown and answer review".to_string(),
        ),
    ];

    let mut text = Text::default();
    text.push_line(Line::from("Challenge yourself with quick multiple-choice quizzes."));
    text.push_line(Line::from(format!(
        "{} questions in the bank.",
        StaticBank.len()
    )));
    text.push_line(Line::from(""));
    for (name, blurb) in features {
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{:<12}", name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(blurb),
        ]));
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    f.render_widget(body, chunks[1]);

    let help = Paragraph::new(key_hints(&[("Enter", "Start"), ("q", "Quit")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
