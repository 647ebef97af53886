//! Board rendering for either side length.

use crate::app::App;
use noughts::{Cell, Marker};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the board grid with the cursor highlighted.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let side = app.board().side() as u16;
    let width = side * CELL_WIDTH + (side - 1);
    let height = side * CELL_HEIGHT + (side - 1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(striped_constraints(side, CELL_HEIGHT))
        .split(board_area);

    for row in 0..side {
        // Even chunks are cells, odd chunks are separator stripes.
        render_row(f, rows[(row * 2) as usize], app, row as usize);
        if row < side - 1 {
            render_separator(f, rows[(row * 2 + 1) as usize]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize) {
    let side = app.board().side() as u16;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(striped_constraints(side, CELL_WIDTH))
        .split(area);

    for col in 0..side {
        let index = row * side as usize + col as usize;
        render_cell(f, cols[(col * 2) as usize], app, index);
        if col < side - 1 {
            render_vertical_sep(f, cols[(col * 2 + 1) as usize]);
        }
    }
}

/// Alternating cell/separator constraints: N cells of `size` with
/// single-unit stripes between them.
fn striped_constraints(side: u16, size: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity((side * 2 - 1) as usize);
    for slot in 0..side {
        constraints.push(Constraint::Length(size));
        if slot < side - 1 {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let cell = app.board().cell(index).unwrap_or(Cell::Empty);
    let (text, mut style) = match cell.marker() {
        None => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Marker::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Marker::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if index == app.cursor() && !app.game_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
