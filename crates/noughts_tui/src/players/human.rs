//! Human player fed by keyboard-selected cell indices.

use super::Player;
use anyhow::Result;
use noughts::Board;
use tokio::sync::mpsc;
use tracing::warn;

/// Human player reading cell choices from the UI.
pub struct HumanPlayer {
    name: String,
    move_rx: mpsc::UnboundedReceiver<usize>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, move_rx: mpsc::UnboundedReceiver<usize>) -> Self {
        Self {
            name: name.into(),
            move_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        // The UI only submits free cells, but keep re-prompting until a
        // valid one arrives rather than trusting the sender.
        while let Some(index) = self.move_rx.recv().await {
            if board.is_valid_move(index) {
                return Ok(index);
            }
            warn!(index, "ignoring invalid move from input channel");
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
