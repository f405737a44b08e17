use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub struct ResultsLayout {
    pub header_area: Rect,
    /// Score, accuracy, time and grade, left to right.
    pub card_areas: [Rect; 4],
    pub breakdown_area: Rect,
    pub time_chart_area: Rect,
    pub review_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        timer_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_results_chunks(area: Rect) -> ResultsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    ResultsLayout {
        header_area: chunks[0],
        card_areas: [cards[0], cards[1], cards[2], cards[3]],
        breakdown_area: charts[0],
        time_chart_area: charts[1],
        review_area: chunks[3],
        footer_area: chunks[4],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        // Margin 1 leaves 38 rows; the fixed rows take 16 of them.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.timer_area.height, 3);
        assert_eq!(layout.options_area.height, 6);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.question_area.height, 22);
    }

    #[test]
    fn test_results_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_results_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert!(layout.card_areas.iter().all(|card| card.height == 5));
        assert_eq!(layout.breakdown_area.height, 10);
        assert_eq!(layout.time_chart_area.height, 10);
        assert_eq!(layout.review_area.height, 38 - 21);
        assert!(layout.time_chart_area.width > layout.breakdown_area.width);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
