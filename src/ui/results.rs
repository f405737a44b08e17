use super::key_hints;
use super::layout::calculate_results_chunks;
use crate::bank::category_info;
use crate::session::SessionState;
use crate::stats::{Grade, Outcome, outcome_breakdown, review_rows, time_breakdown};
use crate::utils::{format_seconds, truncate_string};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Correct => Color::Green,
        Outcome::Incorrect => Color::Red,
        Outcome::Skipped => Color::DarkGray,
    }
}

fn score_card(f: &mut Frame, area: ratatui::layout::Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card, area);
}

pub fn draw_results(f: &mut Frame, state: &SessionState, scroll: u16) {
    let layout = calculate_results_chunks(f.area());
    let percentage = state.percentage_score();
    let grade = Grade::from_percentage(percentage);

    let category = state
        .selected_category()
        .map_or("Quiz", |c| category_info(c).name);
    let title = Paragraph::new(format!(
        "Quiz Results - {} ({})   {} {}",
        category,
        state.selected_difficulty(),
        grade.emoji(),
        grade.message()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let [score_area, accuracy_area, time_area, grade_area] = layout.card_areas;
    score_card(
        f,
        score_area,
        "Score",
        format!("{} pts", state.total_score()),
        Color::Cyan,
    );
    score_card(
        f,
        accuracy_area,
        "Accuracy",
        format!("{:.0}%", percentage),
        Color::Green,
    );
    score_card(
        f,
        time_area,
        "Total Time",
        format_seconds(state.total_time_spent()),
        Color::Yellow,
    );
    score_card(f, grade_area, "Grade", grade.label().to_string(), Color::Magenta);

    let mut breakdown = Text::default();
    for (outcome, count) in outcome_breakdown(state) {
        breakdown.push_line(Line::from(vec![
            Span::styled(
                format!("{:<10}", outcome.label()),
                Style::default()
                    .fg(outcome_color(outcome))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("{}", count)),
        ]));
    }
    breakdown.push_line(Line::from(""));
    breakdown.push_line(Line::from(format!(
        "Average time: {:.1}s per question",
        state.average_time_per_question()
    )));
    let breakdown = Paragraph::new(breakdown)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Breakdown"));
    f.render_widget(breakdown, layout.breakdown_area);

    let time_bars = time_breakdown(state);
    let max = time_bars.iter().map(|bar| bar.limit).max().unwrap_or(1);
    let bars: Vec<Bar> = time_bars
        .iter()
        .map(|bar| {
            Bar::default()
                .label(Line::from(bar.label.clone()))
                .value(u64::from(bar.time_spent))
                .text_value(format!("{}s", bar.time_spent))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Time per Question"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .max(u64::from(max));
    f.render_widget(chart, layout.time_chart_area);

    let mut review = Text::default();
    for row in review_rows(state) {
        review.push_line(Line::from(vec![
            Span::styled(
                format!("{:<10}", row.outcome.label()),
                Style::default().fg(outcome_color(row.outcome)),
            ),
            Span::from(format!(
                "{}. {} ({})",
                row.number,
                truncate_string(row.question, 70),
                format_seconds(row.time_spent)
            )),
        ]));
        let yours = row.your_answer.unwrap_or("(no answer)");
        let mut detail = vec![Span::from(format!("            Your answer: {}", yours))];
        if let Some(correct) = row.correct_answer {
            detail.push(Span::styled(
                format!("   Correct: {}", correct),
                Style::default().fg(Color::Green),
            ));
        }
        review.push_line(Line::from(detail));
    }
    let review = Paragraph::new(review)
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);

    let help = Paragraph::new(key_hints(&[
        ("↑/↓", "Scroll"),
        ("r", "Try Another"),
        ("h", "Home"),
        ("q", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
