//! Noughts and crosses (tic-tac-toe) on a 3x3 or 4x4 board, with a
//! perfect-play search engine.
//!
//! # Architecture
//!
//! - **Board**: the single mutable game state - grid, turn, winner, and
//!   the precomputed winning lines for its side length. `mark` and
//!   `unmark` are exact inverses, so one instance can back an entire
//!   game-tree search without cloning.
//! - **Searcher**: negamax with alpha-beta pruning over the shared board.
//!   Exhaustive, so unbeatable; bounded to the small side lengths the
//!   board supports.
//!
//! # Example
//!
//! ```
//! use noughts::{Board, Marker, Searcher};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new(Marker::X, Marker::X, 3)?;
//! board.mark(0, Marker::X);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.find_move(&mut board)?;
//! board.mark(result.index, board.to_move());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod lines;
mod search;
mod types;

pub use board::{Board, SideLengthError};
pub use lines::winning_lines;
pub use search::{SearchError, SearchResult, Searcher};
pub use types::{Cell, Marker};
