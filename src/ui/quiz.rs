use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerLetter, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(session), Some(question)) = (app.session(), app.current_question()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(
        frame,
        chunks[0],
        session.current_question_number(),
        session.total_questions(),
    );
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], question, app.selected_option());
    render_controls(frame, chunks[3], app.selected_option().is_some());
}

fn render_progress(frame: &mut Frame, area: Rect, number: usize, total: usize) {
    let progress = format!("Question {}/{}", number, total);
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, selected: Option<AnswerLetter>) {
    let mut lines: Vec<Line> = Vec::with_capacity(AnswerLetter::ALL.len() * 2);

    for letter in AnswerLetter::ALL {
        let is_selected = selected == Some(letter);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let option = question.option(letter).unwrap_or("");

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", letter), style),
            Span::styled(option, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, can_submit: bool) {
    let hint = if can_submit {
        "j/k or a-d choose  ·  enter next  ·  q quit"
    } else {
        "j/k or a-d choose an answer  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
