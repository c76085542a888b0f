//! Test and practice views

use crate::app::App;
use crate::quiz::required_keys;
use crate::shortcut::{format_answer_keys, format_step};
use crate::state::{Feedback, QuizMode, QuizSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::borrow::Cow;

/// Draw the active quiz session
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.session.as_ref() else {
        return;
    };

    let content = if session.is_finished() {
        results_lines(session, app)
    } else {
        question_lines(session, app)
    };

    let title = match session.mode {
        QuizMode::Test => format!(" Test  {}/{} ", session.question_number(), session.total()),
        QuizMode::Practice => format!(
            " Practice  {}/{}  lap {} ",
            session.question_number(),
            session.total(),
            session.laps + 1
        ),
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(paragraph, area);
}

fn label<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn question_lines<'a>(session: &'a QuizSession, app: &'a App) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from("")];

    lines.extend(feedback_lines(&session.feedback));
    lines.push(Line::from(""));

    if let Some(question) = session.current(&app.catalog) {
        lines.push(Line::from(Span::styled(
            question.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        if !question.frequency.is_empty() {
            lines.push(Line::from(vec![
                label("Frequency: "),
                Span::raw(question.frequency.as_str()),
            ]));
        }
        lines.push(Line::from(""));

        if session.mode == QuizMode::Practice {
            lines.push(Line::from(vec![
                label("Answer: "),
                Span::styled(
                    format_answer_keys(required_keys(Some(question), app.is_mac())),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
            if session.attempts() > 0 {
                lines.push(Line::from(label(format!(
                    "Wrong attempts: {}",
                    session.attempts()
                ))));
            }
        }
    }

    if !session.last_keys.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("You pressed: "),
            Span::raw(format_step(session.last_keys.as_slice())),
        ]));
    }

    lines
}

fn feedback_lines(feedback: &Feedback) -> Vec<Line<'_>> {
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    match feedback {
        Feedback::Waiting => vec![Line::from(label("Press the shortcut for:"))],
        Feedback::Partial => vec![Line::from(Span::styled(
            "So far so good, keep going...",
            bold(Color::Yellow),
        ))],
        Feedback::Correct { question } => vec![Line::from(vec![
            Span::styled("Correct! ", bold(Color::Green)),
            label(question.as_str()),
        ])],
        Feedback::Incorrect { question, expected } => vec![
            Line::from(vec![
                Span::styled("Wrong. ", bold(Color::Red)),
                label(question.as_str()),
            ]),
            Line::from(vec![
                label("Expected: "),
                Span::styled(expected.as_str(), Style::default().fg(Color::Yellow)),
            ]),
        ],
    }
}

fn results_lines<'a>(session: &'a QuizSession, app: &'a App) -> Vec<Line<'a>> {
    let total = session.total();
    let score = session.score();
    let color = if score == total {
        Color::Green
    } else if score * 2 >= total {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Test complete",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{score} / {total} correct"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let missed: Vec<_> = session
        .missed()
        .filter_map(|r| app.catalog.get(r.question_index))
        .collect();
    if !missed.is_empty() {
        lines.push(Line::from(label("Review these:")));
        for question in missed {
            lines.push(Line::from(vec![
                Span::raw(question.name.as_str()),
                label("  "),
                Span::styled(
                    format_answer_keys(question.answers(app.is_mac()).patterns()),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(label(
        "Enter: back to menu  ·  r: try again",
    )));
    lines
}
