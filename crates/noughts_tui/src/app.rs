//! Application state and logic.

use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use noughts::Board;
use tracing::debug;

/// Main application state.
///
/// The orchestrator owns the live board; the app keeps its own mirror,
/// updated by replaying `MoveMade` events, so rendering and cursor
/// validation never touch the board a search may be walking.
pub struct App {
    board: Board,
    cursor: usize,
    status: String,
    game_over: bool,
}

impl App {
    /// Creates the application state for one game.
    pub fn new(board: Board) -> Self {
        let status = if board.to_move() == board.human_marker() {
            "Your turn. Pick a space.".to_string()
        } else {
            "Waiting for the computer...".to_string()
        };
        Self {
            board,
            cursor: 0,
            status,
            game_over: false,
        }
    }

    /// The mirrored board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The highlighted cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the game has ended.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::Thinking => {
                self.status = "Computer's turn. It's thinking.".to_string();
            }
            GameEvent::MoveMade { marker, index } => {
                self.board.mark(index, marker);
                self.status = if self.board.to_move() == self.board.human_marker() {
                    format!("{marker} took space {}. Your turn.", index + 1)
                } else {
                    format!("You took space {}.", index + 1)
                };
            }
            GameEvent::GameOver { winner } => {
                self.game_over = true;
                self.status = match winner {
                    Some(marker) if marker == self.board.human_marker() => {
                        "Game over. You won! Press 'q' to quit.".to_string()
                    }
                    Some(_) => "Game over. The computer won :( Press 'q' to quit.".to_string(),
                    None => "Game over. It's a draw. Press 'q' to quit.".to_string(),
                };
            }
        }
    }

    /// Moves the cursor one cell in the direction of an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        let side = self.board.side();
        let (row, col) = (self.cursor / side, self.cursor % side);

        self.cursor = match key {
            KeyCode::Left if col > 0 => self.cursor - 1,
            KeyCode::Right if col < side - 1 => self.cursor + 1,
            KeyCode::Up if row > 0 => self.cursor - side,
            KeyCode::Down if row < side - 1 => self.cursor + side,
            _ => self.cursor,
        };
    }

    /// Returns the cursor cell if it is playable, updating the status
    /// line when it is not. Only valid indices ever leave the UI.
    pub fn submit(&mut self) -> Option<usize> {
        if self.game_over {
            return None;
        }
        if self.board.is_valid_move(self.cursor) {
            Some(self.cursor)
        } else {
            self.status = format!("Space {} is already taken.", self.cursor + 1);
            None
        }
    }
}
