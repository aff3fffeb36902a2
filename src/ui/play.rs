use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Seconds left at which the timer turns urgent.
const TIMER_WARNING_THRESHOLD: u32 = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_timer_and_score(frame, chunks[1], app);
    render_question_text(frame, chunks[3], &question.text);
    render_options(frame, chunks[4], question, app);
    render_score_popup(frame, chunks[5], app);
    render_controls(frame, chunks[6]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let total = session.quiz().map(|q| q.total_questions()).unwrap_or(0);
    let current = session.current_question_index() + 1;
    let percent = if total > 0 {
        (current as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    let chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let counter = Paragraph::new(format!("Question {} of {}", current, total))
        .alignment(Alignment::Left)
        .fg(Color::DarkGray);
    frame.render_widget(counter, chunks[0]);

    let complete = Paragraph::new(format!("{}% complete", percent))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(complete, chunks[1]);
}

fn render_timer_and_score(frame: &mut Frame, area: Rect, app: &App) {
    let remaining = app.session().time_remaining();
    let timer_color = if remaining <= TIMER_WARNING_THRESHOLD {
        Color::Red
    } else {
        Color::Yellow
    };

    let chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let timer = Paragraph::new(Line::from(Span::styled(
        format!("{}s", remaining),
        Style::default().fg(timer_color).bold(),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(timer, chunks[0]);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.session().score().to_string(),
            Style::default().fg(Color::Cyan).bold(),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(score, chunks[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let answered = app
        .session()
        .answer_for(question.id)
        .map(|a| a.selected_option);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let is_answered = answered == Some(index);

        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else if is_answered {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let answered_mark = if is_answered { " *" } else { "" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.text.as_str(), style),
            Span::styled(answered_mark, Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_score_popup(frame: &mut Frame, area: Rect, app: &App) {
    let Some(popup) = app.score_popup() else {
        return;
    };

    let (text, color) = if popup.correct {
        (format!("+{} points", popup.points), Color::Green)
    } else {
        (format!("{} points", popup.points), Color::Red)
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k options  ·  enter answer  ·  n/p question  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
