use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::render_answer_text;
use crate::session::QuizSession;

/// Lines each reviewed question occupies, separator included.
const LINES_PER_ENTRY: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let score = session.score();
    let total = session.total_questions();
    let percentage = calculate_percentage(score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade_color);
    render_review(frame, chunks[2], session, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ FINISHED!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, session: &QuizSession, scroll: usize) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::with_capacity(session.total_questions() * LINES_PER_ENTRY);

    for (index, (question, answer)) in session
        .questions()
        .iter()
        .zip(session.user_answers())
        .enumerate()
    {
        let answer_color = if question.is_correct(*answer) {
            Color::Green
        } else {
            Color::Red
        };

        lines.push(Line::from(vec![
            Span::styled(format!("Q{}: ", index + 1), Style::default().fg(Color::Cyan).bold()),
            Span::styled(question.text.as_str(), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Your answer:    ", label),
            Span::styled(
                render_answer_text(question, *answer),
                Style::default().fg(answer_color),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", label),
            Span::styled(
                render_answer_text(question, question.correct_answer),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let offset = (scroll * LINES_PER_ENTRY).min(u16::MAX as usize) as u16;
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Review Answers ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r start new quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color_thresholds() {
        assert_eq!(get_grade_color(calculate_percentage(5, 5)), Color::Green);
        assert_eq!(get_grade_color(calculate_percentage(4, 5)), Color::Cyan);
        assert_eq!(get_grade_color(calculate_percentage(3, 5)), Color::Yellow);
        assert_eq!(get_grade_color(calculate_percentage(1, 5)), Color::Red);
        assert_eq!(calculate_percentage(0, 0), 0.0);
    }
}
