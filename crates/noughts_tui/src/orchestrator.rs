//! Game orchestration between the human and the engine.

use crate::players::Player;
use anyhow::Result;
use noughts::{Board, Marker};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The computer is choosing its move.
    Thinking,
    /// A move was made.
    MoveMade {
        /// Who moved.
        marker: Marker,
        /// Where they moved.
        index: usize,
    },
    /// The game ended.
    GameOver {
        /// The winning marker, or `None` for a draw.
        winner: Option<Marker>,
    },
}

/// Drives one game between two players over a shared board.
///
/// The orchestrator owns the only [`Board`] for the game's duration;
/// the engine player searches it in place and restores it before each
/// move lands.
pub struct Orchestrator {
    board: Board,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    thinking_pause: Duration,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        board: Board,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        thinking_pause: Duration,
    ) -> Self {
        Self {
            board,
            human,
            computer,
            event_tx,
            thinking_pause,
        }
    }

    /// Runs the game loop until the board is terminal.
    pub async fn run(&mut self) -> Result<()> {
        info!("starting game orchestration");

        loop {
            if self.board.is_terminal() {
                self.event_tx.send(GameEvent::GameOver {
                    winner: self.board.winner(),
                })?;
                return Ok(());
            }

            let to_move = self.board.to_move();
            let is_human = to_move == self.board.human_marker();

            if !is_human {
                self.event_tx.send(GameEvent::Thinking)?;
                tokio::time::sleep(self.thinking_pause).await;
            }

            let player = if is_human {
                &mut self.human
            } else {
                &mut self.computer
            };

            debug!(player = %player.name(), marker = %to_move, "waiting for move");
            let index = player.choose_move(&mut self.board).await?;

            self.board.mark(index, to_move);
            debug!(marker = %to_move, index, board = %self.board, "move applied");
            self.event_tx.send(GameEvent::MoveMade {
                marker: to_move,
                index,
            })?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::EnginePlayer;
    use std::collections::VecDeque;

    /// Plays a fixed script of indices.
    struct ScriptedPlayer {
        moves: VecDeque<usize>,
    }

    impl ScriptedPlayer {
        fn new(moves: &[usize]) -> Box<Self> {
            Box::new(Self {
                moves: moves.iter().copied().collect(),
            })
        }
    }

    #[async_trait::async_trait]
    impl Player for ScriptedPlayer {
        async fn choose_move(&mut self, _board: &mut Board) -> Result<usize> {
            self.moves
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn drain(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_scripted_game_reports_winner() {
        let board = Board::new(Marker::X, Marker::X, 3).unwrap();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        // Human X takes the top row; scripted computer obliges.
        let mut orchestrator = Orchestrator::new(
            board,
            ScriptedPlayer::new(&[0, 1, 2]),
            ScriptedPlayer::new(&[3, 4]),
            event_tx,
            Duration::ZERO,
        );
        orchestrator.run().await.unwrap();

        let events = drain(event_rx);
        let moves = events
            .iter()
            .filter(|event| matches!(event, GameEvent::MoveMade { .. }))
            .count();
        assert_eq!(moves, 5);
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver {
                winner: Some(Marker::X)
            })
        ));
    }

    /// Always plays the lowest free cell.
    struct FirstFreePlayer;

    #[async_trait::async_trait]
    impl Player for FirstFreePlayer {
        async fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
            Ok(board.free_spaces()[0])
        }

        fn name(&self) -> &str {
            "FirstFree"
        }
    }

    #[tokio::test]
    async fn test_engine_never_loses_as_computer() {
        let board = Board::new(Marker::X, Marker::X, 3).unwrap();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        // A human mashing the lowest free cell every turn.
        let mut orchestrator = Orchestrator::new(
            board,
            Box::new(FirstFreePlayer),
            Box::new(EnginePlayer::new("Computer")),
            event_tx,
            Duration::ZERO,
        );
        orchestrator.run().await.unwrap();

        let events = drain(event_rx);
        match events.last() {
            Some(GameEvent::GameOver { winner }) => assert_ne!(*winner, Some(Marker::X)),
            other => panic!("expected GameOver, got {other:?}"),
        }
    }
}
