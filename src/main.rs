//! Console front-end: plays a single game over stdin and stdout.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use regicide::{ChessGame, Console, GameId, SnapshotStore};
use tracing_subscriber::EnvFilter;

/// Plays a game of regicide chess: commands are read from stdin, the board
/// and the results are written to stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// JSON file to resume the game from and to save it to.
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,
    /// Identifier of the game if a new one has to be created.
    #[arg(long, default_value_t = 1)]
    game_id: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::parse();
    regicide::print_version_info();

    let store = config.state.map(SnapshotStore::new);
    let snapshot = match &store {
        Some(store) => store.load()?,
        None => None,
    };
    let game = match snapshot {
        Some(snapshot) => {
            let id = snapshot.game_id;
            let game = ChessGame::resume(snapshot)
                .with_context(|| format!("resuming game {id}"))?;
            println!("resumed game {id}");
            game
        },
        None => ChessGame::new(GameId(config.game_id)),
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut console = Console::new(game, &mut input, &mut output);
    if let Some(store) = store {
        console = console.with_store(store);
    }
    console.run()
}
