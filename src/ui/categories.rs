use super::{hint_color, key_hints};
use crate::bank::{categories, category_info};
use crate::models::Difficulty;
use crate::session::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw_categories(f: &mut Frame, state: &SessionState, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Choose a Category")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = categories()
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let chosen = state.selected_category() == Some(info.id);
            let marker = if chosen { "✓" } else { " " };
            let style = if i == cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if chosen {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::from(format!("{} {} ", marker, info.icon)),
                Span::styled(format!("{:<18}", info.name), style),
                Span::styled(
                    format!("{} ({} questions)", info.description, info.question_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Categories"),
    );
    f.render_widget(list, chunks[1]);

    let mut levels = Vec::new();
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let style = if difficulty == state.selected_difficulty() {
            Style::default()
                .fg(hint_color(config.color_hint))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(hint_color(config.color_hint))
        };
        levels.push(Span::styled(
            format!(" {} ({}s) ", config.label, config.time_per_question),
            style,
        ));
        levels.push(Span::from("  "));
    }
    let difficulty = Paragraph::new(Line::from(levels))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Difficulty"));
    f.render_widget(difficulty, chunks[2]);

    let status = match (state.notice(), state.selected_category()) {
        (Some(notice), _) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        (None, Some(category)) => Line::from(format!(
            "Ready: {} on {}, press s to start",
            category_info(category).name,
            state.selected_difficulty()
        )),
        (None, None) => Line::from(Span::styled(
            "Pick a category to continue",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new(key_hints(&[
        ("↑/↓", "Navigate"),
        ("Enter", "Select"),
        ("←/→ 1-3", "Difficulty"),
        ("s", "Start"),
        ("Esc", "Back"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}
