//! Exhaustive negamax search with alpha-beta pruning.
//!
//! The searcher explores every reachable future of the shared [`Board`]
//! through its mark/unmark interface: mark a candidate, recurse, read the
//! terminal state, unmark. No position is ever cloned; the call stack is
//! the search frontier.

use crate::board::Board;
use crate::types::Marker;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Strictly wider than any achievable score, so the initial window never
/// clips a real line of play.
const INF: i32 = 100;

/// Base value of a decided game before the depth adjustment.
const WIN: i32 = 50;

/// Errors from [`Searcher::find_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The game is already over; there is no move to search for.
    #[display("position is terminal, no moves to search")]
    TerminalPosition,
}

/// Outcome of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The optimal cell index for the side to move.
    pub index: usize,
    /// The negamax score of that move from the mover's perspective.
    pub score: i32,
    /// Total nodes visited, pruned branches excluded.
    pub nodes: u64,
}

/// A candidate move under consideration at the root.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    marker: Marker,
    score: i32,
}

/// Game-tree search engine.
///
/// Stateless between searches apart from diagnostics, so one instance
/// can serve both sides of a game.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the optimal move for the side holding the turn.
    ///
    /// Candidates are tried in ascending index order and the best is
    /// replaced only on strict improvement, so the lowest index among
    /// equally scored moves wins. Scoring is depth-sensitive: among
    /// winning lines the engine prefers the fastest win, among losing
    /// lines the slowest loss.
    ///
    /// The board is mutated during the search and fully restored before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TerminalPosition`] if the game is over.
    #[instrument(skip(self, board), fields(to_move = %board.to_move(), side = board.side()))]
    pub fn find_move(&mut self, board: &mut Board) -> Result<SearchResult, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }

        self.nodes = 0;
        let mut alpha = -INF;
        let beta = INF;
        let mut best: Option<Candidate> = None;

        // Root of the recursion, depth 1. Beta stays pinned at the window
        // bound here, so the root itself never takes a cutoff.
        for index in board.free_spaces() {
            let marker = board.to_move();
            board.mark(index, marker);
            let score = -self.negamax(board, 2, -beta, -alpha);
            board.unmark(index);

            if score > alpha {
                alpha = score;
                best = Some(Candidate {
                    index,
                    marker,
                    score,
                });
            }
        }

        let best = best.expect("non-terminal board has at least one candidate");
        debug!(
            index = best.index,
            marker = %best.marker,
            score = best.score,
            nodes = self.nodes,
            "search complete"
        );
        Ok(SearchResult {
            index: best.index,
            score: best.score,
            nodes: self.nodes,
        })
    }

    /// Negamax over the shared board: each level evaluates from the
    /// perspective of the player to move, negating the child's value and
    /// the alpha-beta window.
    fn negamax(&mut self, board: &mut Board, depth: i32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if board.is_terminal() {
            return relative_score(board, depth);
        }

        for index in board.free_spaces() {
            let marker = board.to_move();
            board.mark(index, marker);
            let score = -self.negamax(board, depth + 1, -beta, -alpha);
            board.unmark(index);

            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                // Remaining siblings cannot change the parent's choice.
                break;
            }
        }

        alpha
    }
}

/// Terminal score from the perspective of the side to move at this node.
fn relative_score(board: &Board, depth: i32) -> i32 {
    let score = terminal_score(board, depth);
    if board.to_move() == board.computer_marker() {
        score
    } else {
        -score
    }
}

/// Terminal score from the computer's perspective: a human win counts
/// `-50 + depth` (deeper losses hurt less), a computer win `50 - depth`
/// (sooner wins pay more), a draw zero.
fn terminal_score(board: &Board, depth: i32) -> i32 {
    match board.winner() {
        Some(winner) if winner == board.human_marker() => -WIN + depth,
        Some(_) => WIN - depth,
        None => 0,
    }
}
