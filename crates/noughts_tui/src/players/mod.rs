//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use noughts::Board;

/// Trait for players that can make moves.
///
/// The board is borrowed mutably because the engine searches it in
/// place; whoever implements this must leave the board exactly as it
/// was found.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next move from this player.
    ///
    /// Returns a cell index for which `board.is_valid_move` holds.
    async fn choose_move(&mut self, board: &mut Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
