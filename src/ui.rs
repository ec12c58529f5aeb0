use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use gridle::board::Cell;
use gridle::config::Theme;
use gridle::engine::{GameEngine, GameMode, RoundOutcome, RoundPhase};
use gridle::evaluate::LetterEvaluation;
use gridle::MAX_ATTEMPTS;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 4;
const VERTICAL_MARGIN: u16 = 1;
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

struct Palette {
    text: Color,
    faint: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                faint: Color::DarkGray,
            },
            Theme::Light => Self {
                text: Color::Black,
                faint: Color::Gray,
            },
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let engine = &self.engine;
        let palette = Palette::for_theme(self.theme);
        let text_style = Style::default().fg(palette.text);
        let faint_style = Style::default().fg(palette.faint);

        let (message, message_style) = status_message(engine, &palette);
        let max_chars = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let message_lines = ((message.width() as f64 / max_chars as f64).ceil()).max(1.0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),                   // title
                Constraint::Length(1),                   // mode / streak / clock
                Constraint::Length(1),                   // padding
                Constraint::Length(MAX_ATTEMPTS as u16), // board
                Constraint::Length(1),                   // padding
                Constraint::Length(message_lines),       // error / result
                Constraint::Length(1),                   // padding
                Constraint::Length(3),                   // keyboard
                Constraint::Min(0),                      // filler
                Constraint::Length(1),                   // help
            ])
            .split(area);

        let title = Paragraph::new(Span::styled(
            "gridle",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        title.render(chunks[0], buf);

        let mut status_spans = vec![
            Span::styled(
                engine.mode().to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · streak {}", engine.streak(engine.mode())),
                text_style,
            ),
        ];
        if engine.mode() == GameMode::Timed {
            status_spans.push(Span::styled(
                format!(" · {}", engine.clock()),
                text_style.add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Line::from(status_spans))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let board_lines: Vec<Line> = engine
            .rows()
            .iter()
            .map(|row| {
                let mut spans = Vec::with_capacity(row.len() * 2);
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(tile_span(cell, &palette));
                }
                Line::from(spans)
            })
            .collect();
        Paragraph::new(board_lines)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(message, message_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[5], buf);

        let keyboard_lines: Vec<Line> = KEY_ROWS
            .iter()
            .map(|row| {
                let mut spans = Vec::with_capacity(row.len() * 2);
                for (i, key) in row.chars().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(key_span(key, engine.keyboard().status(key), &palette));
                }
                Line::from(spans)
            })
            .collect();
        Paragraph::new(keyboard_lines)
            .alignment(Alignment::Center)
            .render(chunks[7], buf);

        let help = Paragraph::new(Span::styled(
            "type to guess · enter submit · tab mode · ctrl-n new round · ctrl-b theme · esc quit",
            faint_style.add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        help.render(chunks[9], buf);
    }
}

fn status_message(engine: &GameEngine, palette: &Palette) -> (String, Style) {
    if let Some(error) = engine.error_message() {
        return (
            error.to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        );
    }
    match engine.phase() {
        RoundPhase::Over(result) => {
            let style = match result.outcome {
                RoundOutcome::Won => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                RoundOutcome::LostAttempts | RoundOutcome::LostTimeout => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                }
            };
            (
                format!("{}  (enter for a new round)", result.message()),
                style,
            )
        }
        RoundPhase::InProgress => (String::new(), Style::default().fg(palette.faint)),
    }
}

fn tile_span(cell: &Cell, palette: &Palette) -> Span<'static> {
    match (cell.letter, cell.evaluation) {
        (Some(letter), Some(evaluation)) => Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            evaluation_style(evaluation),
        ),
        (Some(letter), None) => Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(" · ".to_string(), Style::default().fg(palette.faint)),
    }
}

fn evaluation_style(evaluation: LetterEvaluation) -> Style {
    match evaluation {
        LetterEvaluation::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterEvaluation::Misplaced => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterEvaluation::NoMatch => Style::default().bg(Color::DarkGray).fg(Color::Gray),
    }
}

fn key_span(key: char, status: Option<LetterEvaluation>, palette: &Palette) -> Span<'static> {
    let label = key.to_ascii_uppercase().to_string();
    let style = match status {
        Some(LetterEvaluation::Correct) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterEvaluation::Misplaced) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterEvaluation::NoMatch) => Style::default()
            .fg(palette.faint)
            .add_modifier(Modifier::DIM),
        None => Style::default().fg(palette.text),
    };
    Span::styled(label, style)
}
