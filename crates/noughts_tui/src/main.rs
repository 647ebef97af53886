//! Terminal UI for noughts and crosses against the perfect-play engine.

#![warn(missing_docs)]

mod app;
mod config;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{Board, Marker};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use config::GameConfig;
use orchestrator::{GameEvent, Orchestrator};
use players::{EnginePlayer, HumanPlayer};

/// How long the computer pretends to ponder before its move lands.
const THINKING_PAUSE: Duration = Duration::from_millis(600);

/// Play noughts and crosses against an unbeatable engine.
#[derive(Parser, Debug)]
#[command(name = "noughts", about = "Noughts and crosses with a perfect-play engine")]
#[command(version)]
pub struct Cli {
    /// Marker for the human player (x or o).
    #[arg(short, long)]
    pub marker: Option<Marker>,

    /// Board side length.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=4))]
    pub side: Option<u8>,

    /// Let the computer make the first move.
    #[arg(long)]
    pub computer_starts: bool,

    /// Path to a TOML config file.
    #[arg(long, default_value = "noughts.toml")]
    pub config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    info!(?config, "starting noughts");

    let board = Board::new(config.marker, config.starting_marker(), config.side)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels between the key loop, the human player, and the UI.
    let (move_tx, move_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let human = Box::new(HumanPlayer::new("You", move_rx));
    let computer = Box::new(EnginePlayer::new("Computer"));

    let mut orchestrator =
        Orchestrator::new(board.clone(), human, computer, event_tx, THINKING_PAUSE);
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            tracing::error!(error = %e, "Orchestrator error");
        }
    });

    let app = App::new(board);
    let res = run_app(&mut terminal, app, move_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    move_tx: mpsc::UnboundedSender<usize>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Check for game events from the orchestrator.
        if let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Check for keyboard input.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                    KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                        app.move_cursor(key.code);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(index) = app.submit() {
                            let _ = move_tx.send(index);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
