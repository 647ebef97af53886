//! Board state: grid, turn, winner, and the mark/unmark pair.

use crate::lines::winning_lines;
use crate::types::{Cell, Marker};
use derive_more::{Display, Error};
use strum::IntoEnumIterator;
use tracing::debug;

/// Side lengths the exhaustive search stays tractable for.
const SUPPORTED_SIDES: std::ops::RangeInclusive<usize> = 3..=4;

/// Error returned when constructing a board with an unplayable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("unsupported side length {side}: boards are 3x3 or 4x4")]
pub struct SideLengthError {
    /// The rejected side length.
    pub side: usize,
}

/// Game state for one match of noughts and crosses.
///
/// A single `Board` lives for the whole game. The search engine explores
/// hypothetical futures by calling [`Board::mark`] and [`Board::unmark`]
/// on this same instance in strict stack discipline, so `unmark` must be
/// the exact inverse of the most recent mark that has not yet been
/// undone: same cell, turn flipped back, winner recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Cell>,
    side: usize,
    to_move: Marker,
    human: Marker,
    computer: Marker,
    winner: Option<Marker>,
    lines: Vec<Vec<usize>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// The computer takes whichever marker the human did not, and
    /// `starting` holds the first turn. Winning lines are computed once
    /// here and never change.
    ///
    /// # Errors
    ///
    /// Returns [`SideLengthError`] unless `side` is 3 or 4.
    pub fn new(human: Marker, starting: Marker, side: usize) -> Result<Self, SideLengthError> {
        if !SUPPORTED_SIDES.contains(&side) {
            return Err(SideLengthError { side });
        }

        debug!(%human, %starting, side, "creating board");
        Ok(Self {
            grid: vec![Cell::Empty; side * side],
            side,
            to_move: starting,
            human,
            computer: human.opponent(),
            winner: None,
            lines: winning_lines(side),
        })
    }

    /// The side length of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The cells in row-major order.
    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    /// The cell at `index`, or `None` out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.grid.get(index).copied()
    }

    /// The marker that moves next.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// The human player's marker.
    pub fn human_marker(&self) -> Marker {
        self.human
    }

    /// The computer player's marker.
    pub fn computer_marker(&self) -> Marker {
        self.computer
    }

    /// The winning marker, if a winning line is fully occupied.
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Every winning line for this board's side length.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Places `marker` at `index`, flips the turn, and recomputes the
    /// winner.
    ///
    /// The board performs no validation here: callers must only offer
    /// free, in-range indices (see [`Board::is_valid_move`]). The search
    /// enumerates free cells itself; human input is validated before it
    /// reaches the board.
    pub fn mark(&mut self, index: usize, marker: Marker) {
        self.grid[index] = Cell::Taken(marker);
        self.to_move = marker.opponent();
        self.refresh_winner();
    }

    /// Empties the cell at `index`, flips the turn back, and recomputes
    /// the winner.
    ///
    /// Must be called with the most recently marked index that has not
    /// yet been unmarked; the board does not police this contract.
    pub fn unmark(&mut self, index: usize) {
        self.grid[index] = Cell::Empty;
        self.to_move = self.to_move.opponent();
        self.refresh_winner();
    }

    /// True when `index` addresses an empty cell on the board.
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// All empty cell indices in ascending order.
    ///
    /// The snapshot is only good until the next mutation; recompute it
    /// after any mark or unmark.
    pub fn free_spaces(&self) -> Vec<usize> {
        self.find_spaces(|cell| cell == Cell::Empty)
    }

    /// All cell indices taken by `marker`, in ascending order.
    pub fn spaces_taken_by(&self, marker: Marker) -> Vec<usize> {
        self.find_spaces(|cell| cell == Cell::Taken(marker))
    }

    /// The indices of every winning line fully contained in `marked`,
    /// concatenated. Empty when `marked` completes no line.
    pub fn find_winning_indices(&self, marked: &[usize]) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|line| line.iter().all(|index| marked.contains(index)))
            .flatten()
            .copied()
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.grid.contains(&Cell::Empty)
    }

    /// True when the game is over: someone won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    fn find_spaces(&self, keep: impl Fn(Cell) -> bool) -> Vec<usize> {
        (0..self.grid.len())
            .filter(|&index| keep(self.grid[index]))
            .collect()
    }

    fn refresh_winner(&mut self) {
        self.winner = Marker::iter().find(|&marker| {
            let taken = self.spaces_taken_by(marker);
            !self.find_winning_indices(&taken).is_empty()
        });
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.chunks(self.side) {
            for cell in row {
                match cell.marker() {
                    Some(marker) => write!(f, "{marker} ")?,
                    None => write!(f, "_ ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
