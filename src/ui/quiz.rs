use super::layout::{calculate_quiz_chunks, centered_rect};
use super::{key_hints, timer_color};
use crate::bank::category_info;
use crate::models::SelectedOption;
use crate::session::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// One marker per question: answered, skipped or still open.
fn progress_markers(state: &SessionState) -> Vec<Span<'static>> {
    state
        .answers()
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let symbol = match answer.as_ref().map(|a| a.selected_option) {
                Some(SelectedOption::Chosen(_)) => "●",
                Some(SelectedOption::None) => "○",
                None => "·",
            };
            let style = if i == state.current_index() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{} ", symbol), style)
        })
        .collect()
}

pub fn draw_quiz(f: &mut Frame, state: &SessionState, option_cursor: usize, pending_jump: bool) {
    let layout = calculate_quiz_chunks(f.area());
    let Some(question) = state.current_question() else {
        return;
    };

    let category = state
        .selected_category()
        .map_or("Quiz", |c| category_info(c).name);
    let mut header_line = vec![
        Span::styled(
            format!(
                "Question {} of {} - {} ({})   ",
                state.current_index() + 1,
                state.questions().len(),
                category,
                state.selected_difficulty()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    header_line.extend(progress_markers(state));
    let header = Paragraph::new(Line::from(header_line))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let limit = state.time_limit().max(1);
    let ratio = (f64::from(state.time_remaining()) / f64::from(limit)).clamp(0.0, 1.0);
    let timer = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Time"))
        .gauge_style(Style::default().fg(timer_color(state.timer_level())))
        .ratio(ratio)
        .label(format!("{}s", state.time_remaining()));
    f.render_widget(timer, layout.timer_area);

    let question_text = Paragraph::new(Text::from(question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let chosen = state
        .current_answer()
        .and_then(|answer| answer.selected_option.index());
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let letter = (b'A' + i as u8) as char;
            let pointer = if i == option_cursor { ">" } else { " " };
            let mark = if chosen == Some(i) { "●" } else { " " };
            let mut style = if chosen == Some(i) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if i == option_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{} {} {}. {}", pointer, mark, letter, option),
                style,
            )))
        })
        .collect();

    let options_title = match state.current_answer() {
        Some(answer) if answer.selected_option.is_none() => "Options (skipped)",
        Some(_) => "Options (answered)",
        None => "Options",
    };
    let options =
        List::new(items).block(Block::default().borders(Borders::ALL).title(options_title));
    f.render_widget(options, layout.options_area);

    let advance = if state.is_last_question() {
        "Submit"
    } else {
        "Next"
    };
    let jump = if pending_jump {
        "Press 1-9"
    } else {
        "Jump"
    };
    let help_text = vec![
        key_hints(&[
            ("a-d/1-4", "Answer"),
            ("↑/↓ Space", "Highlight & answer"),
            ("Enter", advance),
            ("Tab", "Skip"),
        ]),
        key_hints(&[
            ("←/→", "Prev/Next"),
            ("g", jump),
            ("f", "Finish"),
            ("Esc", "Quit to Home"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit to Home")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this quiz? Your answers will be discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
