//! Engine player backed by the exhaustive search.

use super::Player;
use anyhow::Result;
use noughts::{Board, Searcher};

/// Computer player that plays perfectly.
pub struct EnginePlayer {
    name: String,
    searcher: Searcher,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(),
        }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    async fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        let result = self.searcher.find_move(board)?;
        Ok(result.index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
