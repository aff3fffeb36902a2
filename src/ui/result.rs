use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{AnswerRecord, Attempt};
use crate::session::scoring;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(attempt) = app.last_attempt() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], app, attempt);
    render_breakdown(frame, chunks[1], app, attempt);
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App, attempt: &Attempt) {
    let accuracy = scoring::accuracy(attempt.correct_answers, attempt.total_questions);
    let wrong = attempt.answers.len() - attempt.correct_answers;
    let max_score = attempt.total_questions as i32 * scoring::CORRECT_POINTS;
    let accuracy_color = grade_color(accuracy);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} points", attempt.score, max_score),
            Style::default().fg(accuracy_color).bold(),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} correct", attempt.correct_answers),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled(format!("{} wrong", wrong), Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled(
                format!("{}% accuracy", accuracy),
                Style::default().fg(accuracy_color),
            ),
        ]),
    ];

    if let Some(err) = app.save_error() {
        content.push(Line::from(Span::styled(
            format!("Could not save attempt: {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn grade_color(accuracy: u32) -> Color {
    match accuracy {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_breakdown(frame: &mut Frame, area: Rect, app: &App, attempt: &Attempt) {
    let Some(quiz) = app.session().quiz() else {
        return;
    };

    let lines: Vec<Line> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let record = attempt
                .answers
                .iter()
                .find(|a| a.question_id == question.id);
            let (symbol, color) = breakdown_mark(record);
            let preview = truncate_question(&question.text);

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget =
        Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn breakdown_mark(record: Option<&AnswerRecord>) -> (&'static str, Color) {
    match record {
        Some(r) if r.is_correct => ("+", Color::Green),
        Some(_) => ("-", Color::Red),
        None => ("·", Color::DarkGray),
    }
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r replay  ·  b back to quizzes  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
