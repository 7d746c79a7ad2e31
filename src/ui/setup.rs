use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, FormField};
use crate::models::QuestionCount;

const KEY_VISIBLE_CHARS: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_form(frame, chunks[0], app);
    if let Some(error) = app.error() {
        render_error(frame, chunks[1], error);
    } else if let Some(raw) = app.raw_text().filter(|raw| !raw.is_empty()) {
        render_raw_output(frame, chunks[1], raw);
    }
    render_controls(frame, chunks[2], app.is_busy());
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();

    let content = vec![
        Line::from(Span::styled(
            "AI QUIZ MAKER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        field_line(
            "API key",
            &mask_key(&form.api_key),
            form.focus == FormField::ApiKey,
        ),
        Line::from(""),
        field_line("Topic", &form.topic, form.focus == FormField::Topic),
        Line::from(""),
        count_line(form.count, form.focus == FormField::Count),
        Line::from(""),
        Line::from(generate_button(app.is_busy())),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, area);
}

fn generate_button(busy: bool) -> Span<'static> {
    if busy {
        Span::styled("Generating...", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::styled("[Enter] Generate Quiz", Style::default().fg(Color::Green).bold())
    }
}

/// Error messages may carry a whole response body, so they get the free space.
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let widget = Paragraph::new(error)
        .wrap(Wrap { trim: false })
        .fg(Color::Red)
        .block(Block::default().padding(Padding::horizontal(1)));

    frame.render_widget(widget, area);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::White)),
        Span::styled(value.to_string(), value_style),
        Span::styled(cursor, value_style),
    ])
}

fn count_line(count: QuestionCount, focused: bool) -> Line<'static> {
    let spans = QuestionCount::ALL.iter().map(|option| {
        let style = if *option == count {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", option), style)
    });

    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let mut line = vec![Span::styled("Number of questions: ", label_style)];
    line.extend(spans);
    Line::from(line)
}

/// Shows only the last few characters of the key.
fn mask_key(key: &str) -> String {
    let len = key.chars().count();
    if len <= KEY_VISIBLE_CHARS {
        return "*".repeat(len);
    }
    let tail: String = key.chars().skip(len - KEY_VISIBLE_CHARS).collect();
    format!("{}{}", "*".repeat(len - KEY_VISIBLE_CHARS), tail)
}

fn render_raw_output(frame: &mut Frame, area: Rect, raw: &str) {
    let widget = Paragraph::new(raw)
        .wrap(Wrap { trim: false })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" No questions found, raw output ")
                .title_style(Style::default().fg(Color::Yellow))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, busy: bool) {
    let hint = if busy {
        "waiting for the model  ·  ctrl-c quit"
    } else {
        "tab next field  ·  ←/→ count  ·  enter generate  ·  esc quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::SetupForm;
    use crate::error::QuizError;

    const UNAUTHORIZED_BODY: &str = r#"{"error":{"message":"Incorrect API key provided: sk-bad. You can find your API key at https://platform.openai.com/account/api-keys.","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#;

    /// Renders the app at 80x24 and joins the trimmed rows.
    fn render_to_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            text.push_str(row.trim());
        }
        text
    }

    fn app_with_key() -> App {
        App::new(SetupForm {
            api_key: "sk-bad".to_string(),
            topic: "Geography".to_string(),
            ..SetupForm::default()
        })
    }

    #[test]
    fn test_request_error_body_is_fully_visible() {
        let mut app = app_with_key();
        app.begin_generation();
        app.finish_generation(Err(QuizError::Request {
            status: 401,
            body: UNAUTHORIZED_BODY.to_string(),
        }));

        let text = render_to_text(&app);
        assert!(text.contains("API error 401"));
        assert!(text.contains(r#""code":"invalid_api_key"}}"#));
        assert!(text.contains("[Enter] Generate Quiz"));
    }

    #[test]
    fn test_raw_output_shown_verbatim() {
        let mut app = app_with_key();
        app.begin_generation();
        app.finish_generation(Ok(String::new()));
        let text = render_to_text(&app);
        assert!(!text.contains("No questions found"));

        app.begin_generation();
        app.finish_generation(Ok("   ".to_string()));
        // Whitespace-only output parses to no questions but is still shown.
        assert!(render_to_text(&app).contains("No questions found"));
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "");
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("sk-abcdef"), "*****cdef");
    }
}
