//! Terminal UI rendering with ratatui

use crate::board::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::GameState;
use crate::menu::Menu;
use crate::settings::Settings;
use crate::snapshot::Snapshot;
use crate::tetromino::Shape;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const EMPTY: &str = "  ";
/// Color full rows switch to while flashing
const FLASH_COLOR: Color = Color::Rgb(220, 220, 220);

/// board(22) + next/stats(16)
const GAME_WIDTH: u16 = 38;
/// board(20) + 2 for borders
const GAME_HEIGHT: u16 = 22;

/// Render the launcher menu
pub fn render_menu(frame: &mut Frame, menu: &Menu) {
    let area = frame.area();
    let menu_area = center_rect(area, 36, 14);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(menu_area);

    let title = Paragraph::new(vec![
        Line::raw(""),
        Line::styled("ARCADE", Style::default().fg(Color::Cyan).bold()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);

    let mut lines = vec![Line::raw("")];
    for (i, item) in menu.items.iter().enumerate() {
        let line = if i == menu.selected {
            Line::styled(
                format!("▶ {}", item.label),
                Style::default().fg(Color::Yellow).bold(),
            )
        } else {
            Line::styled(format!("  {}", item.label), Style::default().fg(Color::White))
        };
        lines.push(line);
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "↑↓ Select  Enter Confirm  Q Quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render the entire game UI
pub fn render_game(frame: &mut Frame, snapshot: &Snapshot, settings: &Settings) {
    let area = frame.area();
    let block_char = settings.visual.block_chars();

    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    // board | next + stats
    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Board (10*2 + 2 for borders)
            Constraint::Length(16), // Next + stats
        ])
        .split(game_area);

    render_board(frame, main_layout[0], snapshot, block_char);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Next piece
            Constraint::Min(8),    // Stats
        ])
        .split(main_layout[1]);

    render_next(frame, right_layout[0], snapshot, block_char);
    render_stats(frame, right_layout[1], snapshot);

    if snapshot.state == GameState::GameOver {
        render_overlay(frame, area, "GAME OVER", "Space to play again");
    }
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the next piece box
fn render_next(frame: &mut Frame, area: Rect, snapshot: &Snapshot, block_char: &str) {
    let block = Block::default()
        .title(" NEXT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let color = snapshot.next.color();
    let lines = shape_lines(&snapshot.next_shape, block_char, color);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// One line per shape row
fn shape_lines(shape: &Shape, block_char: &str, color: Color) -> Vec<Line<'static>> {
    (0..shape.rows())
        .map(|r| {
            let spans: Vec<Span> = (0..shape.cols())
                .map(|c| {
                    if shape.is_filled(r, c) {
                        Span::styled(block_char.to_string(), Style::default().fg(color))
                    } else {
                        Span::raw(EMPTY)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the game board
fn render_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, block_char: &str) {
    let block = Block::default()
        .title(" TETRIS ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(BOARD_HEIGHT);
    for (y, row) in snapshot.cells.iter().enumerate() {
        let flashing = snapshot.flash_on && snapshot.is_clearing(y);
        let mut spans = Vec::with_capacity(BOARD_WIDTH);

        for (x, cell) in row.iter().enumerate() {
            let color = match (snapshot.active_at(x as i32, y as i32), cell) {
                (Some(kind), _) => Some(kind.color()),
                (None, Cell::Filled(_)) if flashing => Some(FLASH_COLOR),
                (None, Cell::Filled(kind)) => Some(kind.color()),
                (None, Cell::Empty) => None,
            };
            spans.push(match color {
                Some(color) => Span::styled(block_char, Style::default().fg(color)),
                None => Span::raw(EMPTY),
            });
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render stats panel
fn render_stats(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let progress = snapshot.progress;
    let lines = vec![
        Line::from(Span::styled("SCORE", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            progress.score.to_string(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::raw(""),
        Line::from(Span::styled("LINES", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            progress.lines.to_string(),
            Style::default().fg(Color::Green),
        )),
        Line::raw(""),
        Line::from(Span::styled("LEVEL", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            progress.level.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::styled("Esc for menu", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render an overlay (for game over)
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_area = center_rect(area, 24, 5);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
