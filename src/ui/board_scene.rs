//! Board scene: the engine's rendered text inside a titled border, with a
//! two-line status bar underneath.

use crate::engine::{GameStatus, SnakeEngine};
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BOARD_COLOR: Color = Color::LightGreen;
const STATUS_HEIGHT: u16 = 2;

/// Render the board scene for `engine` into `area`.
pub fn render_board_scene<R>(frame: &mut Frame, area: Rect, engine: &SnakeEngine<R>) {
    let block = Block::default()
        .title(" Snake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(inner);

    let board_lines: Vec<Line> = engine
        .render()
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let board = Paragraph::new(board_lines)
        .style(Style::default().fg(BOARD_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(board, chunks[0]);

    render_status_bar(frame, chunks[1], engine);
}

fn status_label(status: GameStatus) -> (&'static str, Color) {
    match status {
        GameStatus::Continue => ("Playing", Color::White),
        GameStatus::Win => ("You win!", Color::LightYellow),
        GameStatus::Loss => ("Game over", Color::LightRed),
    }
}

fn render_status_bar<R>(frame: &mut Frame, area: Rect, engine: &SnakeEngine<R>) {
    let (label, color) = status_label(engine.status());
    let lines = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                engine.current_score().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Food left: ", Style::default().fg(Color::Gray)),
            Span::styled(
                engine.remaining_food().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(label, Style::default().fg(color))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
