//! The console puts the game together with a text interface and persistence.
//!
//! [`Console::run`] is the "main loop": it reads one command per line from
//! the input stream, applies it to the game and writes the response to the
//! output stream until the game is over, `quit` is sent or the input ends.
//!
//! Rule violations and malformed commands are reported back and the loop
//! carries on. Only I/O failures stop it with an error.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Context;
use tracing::debug;

use crate::chess::core::{Player, Square};
use crate::chess::game::{ChessGame, Phase};
use crate::console::command::Command;
use crate::error::Error;

mod command;
mod store;

pub use store::SnapshotStore;

const HELP: &str = "\
commands:
  start            start a new game (asks before replacing a game in progress)
  move <from> <to> move a piece, e.g. 'move e2 e4'
  status           show the turn and the score of both players
  save             store the game in the state file
  end              end the game and show the final score, the state file
                   keeps the game so the next launch resumes it
  help             show this message
  quit             leave without ending the game";

/// Connects a [`ChessGame`] to a pair of text streams.
pub struct Console<'a, R: BufRead, W: Write> {
    game: ChessGame,
    store: Option<SnapshotStore>,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console for the `game` without persistence.
    #[must_use]
    pub fn new(game: ChessGame, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game,
            store: None,
            input,
            output,
        }
    }

    /// Saves the game to the `store` whenever it changes.
    #[must_use]
    pub fn with_store(mut self, store: SnapshotStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Gives the game back once the console is done with it.
    #[must_use]
    pub fn into_game(self) -> ChessGame {
        self.game
    }

    /// Reads and executes commands until the game ends, `quit` is sent or
    /// the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails if reading the input, writing the output or accessing the
    /// state file fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "type 'help' for the list of commands")?;
        loop {
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("reading the next command")?
                == 0
            {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            let flow = match Command::parse(&line) {
                Ok(Command::Help) => self.handle_help()?,
                Ok(Command::Start) => self.handle_start()?,
                Ok(Command::Move { from, to }) => self.handle_move(from, to)?,
                Ok(Command::Status) => self.handle_status()?,
                Ok(Command::Save) => self.handle_save()?,
                Ok(Command::End) => self.handle_end()?,
                Ok(Command::Quit) => ControlFlow::Break(()),
                Ok(Command::Unknown(command)) => {
                    writeln!(
                        self.output,
                        "error: unknown command '{command}', type 'help' for the list of commands"
                    )?;
                    ControlFlow::Continue(())
                },
                Err(e) => self.report(&e)?,
            };
            if flow.is_break() {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn handle_help(&mut self) -> anyhow::Result<ControlFlow<()>> {
        writeln!(self.output, "{HELP}")?;
        Ok(ControlFlow::Continue(()))
    }

    /// Starts the game. A game in progress is only replaced if the answer to
    /// the restart question starts with 'y'.
    fn handle_start(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let fresh = self.game.phase() == Phase::Ready;
        let Self {
            game,
            input,
            output,
            ..
        } = self;
        let mut io_failure = None;
        let mut restarted = false;
        let started = game.start(|| {
            match ask_restart(input, output) {
                Ok(answer) => restarted = answer,
                Err(e) => io_failure = Some(e),
            }
            restarted
        });
        if let Some(e) = io_failure {
            return Err(e);
        }
        if let Err(e) = started {
            return self.report(&e);
        }
        if fresh || restarted {
            writeln!(self.output, "game {} started", self.game.id())?;
        } else {
            writeln!(self.output, "continuing the current game")?;
        }
        self.persist()?;
        self.print_position()?;
        Ok(ControlFlow::Continue(()))
    }

    fn handle_move(&mut self, from: Square, to: Square) -> anyhow::Result<ControlFlow<()>> {
        if let Err(e) = self.game.make_move(from, to) {
            return self.report(&e);
        }
        if self.game.is_end() {
            write!(self.output, "{}", self.game.board())?;
            if let Some(store) = &self.store {
                store.delete()?;
            }
            self.print_result()?;
            return Ok(ControlFlow::Break(()));
        }
        self.persist()?;
        self.print_position()?;
        Ok(ControlFlow::Continue(()))
    }

    fn handle_status(&mut self) -> anyhow::Result<ControlFlow<()>> {
        writeln!(self.output, "game {} is {}", self.game.id(), self.game.phase())?;
        if let Some(turn) = self.game.turn() {
            writeln!(self.output, "{turn} to move")?;
        }
        self.print_scores()?;
        Ok(ControlFlow::Continue(()))
    }

    fn handle_save(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(store) = &self.store else {
            writeln!(self.output, "error: no state file configured")?;
            return Ok(ControlFlow::Continue(()));
        };
        match self.game.snapshot() {
            Ok(snapshot) => {
                store.save(&snapshot)?;
                writeln!(self.output, "saved to {}", store.path().display())?;
                Ok(ControlFlow::Continue(()))
            },
            Err(e) => self.report(&e),
        }
    }

    /// Saves the final position of a game in progress, then ends it.
    fn handle_end(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.persist()?;
        if let Err(e) = self.game.end() {
            return self.report(&e);
        }
        writeln!(self.output, "game {} ended", self.game.id())?;
        self.print_result()?;
        Ok(ControlFlow::Break(()))
    }

    /// Writes the snapshot of a game in progress to the store, if there is
    /// one.
    fn persist(&self) -> anyhow::Result<()> {
        if let (Some(store), Phase::Playing) = (&self.store, self.game.phase()) {
            store.save(&self.game.snapshot()?)?;
        }
        Ok(())
    }

    fn report(&mut self, error: &Error) -> anyhow::Result<ControlFlow<()>> {
        debug!(game = %self.game.id(), %error, "command rejected");
        writeln!(self.output, "error: {error}")?;
        Ok(ControlFlow::Continue(()))
    }

    fn print_position(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.game.board())?;
        if let Some(turn) = self.game.turn() {
            writeln!(self.output, "{turn} to move")?;
        }
        Ok(())
    }

    fn print_scores(&mut self) -> anyhow::Result<()> {
        for player in Player::ALL {
            writeln!(self.output, "{player}: {}", self.game.score(player))?;
        }
        Ok(())
    }

    fn print_result(&mut self) -> anyhow::Result<()> {
        self.print_scores()?;
        match self.game.winner() {
            Ok(winner) => writeln!(self.output, "{winner} wins")?,
            Err(_) => writeln!(self.output, "no winner")?,
        }
        Ok(())
    }
}

/// Asks whether the game in progress should be thrown away.
fn ask_restart(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<bool> {
    write!(output, "restart? (y/n) ")?;
    output.flush()?;
    let mut answer = String::new();
    let _ = input
        .read_line(&mut answer)
        .context("reading the restart answer")?;
    Ok(answer.trim_start().starts_with(['y', 'Y']))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::board::Board;
    use crate::chess::game::GameId;
    use crate::chess::piece::{Piece, PieceKind};

    fn run(game: ChessGame, commands: &str) -> (ChessGame, String) {
        let mut input = Cursor::new(commands.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut console = Console::new(game, &mut input, &mut output);
        console.run().unwrap();
        let game = console.into_game();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn start_and_move() {
        let (game, output) = run(ChessGame::new(GameId(1)), "start\nmove e2 e4\n");
        assert_eq!(game.turn(), Some(Player::Black));
        assert!(output.contains("game 1 started"));
        assert!(output.contains(
            "rnbqkbnr\n\
             pppppppp\n\
             ........\n\
             ........\n\
             ....P...\n\
             ........\n\
             PPPP.PPP\n\
             RNBQKBNR\n\
             black to move\n"
        ));
    }

    #[test]
    fn illegal_move_is_reported() {
        let (game, output) = run(
            ChessGame::new(GameId(1)),
            "start\nmove e2 e5\nmove e2 e9\n",
        );
        assert_eq!(game.board(), &Board::starting());
        assert!(output.contains("error: illegal move e2e5: the piece can not move"));
        assert!(output.contains("error: invalid coordinate: rank should be within"));
    }

    #[test]
    fn move_before_start() {
        let (game, output) = run(ChessGame::new(GameId(1)), "move e2 e4\n");
        assert_eq!(game.phase(), Phase::Ready);
        assert!(output.contains("error: illegal state: game has not started yet"));
    }

    #[test]
    fn declined_restart() {
        let (game, output) = run(
            ChessGame::new(GameId(1)),
            "start\nmove d2 d4\nstart\nno\nstatus\n",
        );
        assert_eq!(game.turn(), Some(Player::Black));
        assert!(output.contains("restart? (y/n) "));
        assert!(output.contains("continuing the current game"));
        assert!(output.contains("game 1 is playing\nblack to move\nwhite: 38\nblack: 38\n"));
    }

    #[test]
    fn accepted_restart() {
        let (game, _) = run(
            ChessGame::new(GameId(1)),
            "start\nmove d2 d4\nstart\ny\n",
        );
        assert_eq!(game.turn(), Some(Player::White));
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn king_capture_stops() {
        let board = [
            ("a1", Player::White, PieceKind::King),
            ("a8", Player::Black, PieceKind::Rook),
            ("h8", Player::Black, PieceKind::King),
        ]
        .into_iter()
        .map(|(square, owner, kind)| (Square::try_from(square).unwrap(), Piece::new(owner, kind)))
        .collect();
        let (game, output) = run(
            ChessGame::playing(GameId(3), board, Player::Black),
            "move a8 a1\nstatus\n",
        );
        assert!(game.is_end());
        assert!(output.ends_with("white: 0\nblack: 5\nblack wins\n"));
        assert!(!output.contains("game 3 is"));
    }

    #[test]
    fn end_shows_result() {
        let (game, output) = run(ChessGame::new(GameId(8)), "start\nend\nstart\n");
        assert!(game.is_end());
        assert!(output.ends_with("game 8 ended\nwhite: 38\nblack: 38\nno winner\n"));
    }

    #[test]
    fn unknown_command() {
        let (_, output) = run(ChessGame::new(GameId(1)), "\n   \nresign\nquit\nstart\n");
        assert!(output.contains("error: unknown command 'resign'"));
        assert!(!output.contains("started"));
    }

    #[test]
    fn save_without_store() {
        let (_, output) = run(ChessGame::new(GameId(1)), "start\nsave\n");
        assert!(output.contains("error: no state file configured"));
    }

    #[test]
    fn store_follows_game() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("game.json"));

        let mut input = Cursor::new(b"start\nmove g1 f3\n".to_vec());
        let mut output = Vec::new();
        let mut console =
            Console::new(ChessGame::new(GameId(6)), &mut input, &mut output)
                .with_store(store.clone());
        console.run().unwrap();
        let game = console.into_game();

        let snapshot = store.load().unwrap().unwrap();
        assert_eq!(snapshot.game_id, GameId(6));
        assert_eq!(snapshot.turn, Player::Black);
        assert_eq!(ChessGame::resume(snapshot).unwrap(), game);
    }

    #[test]
    fn end_keeps_game_for_later() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("game.json"));

        let mut input = Cursor::new(b"help\nstart\nmove e2 e4\nend\n".to_vec());
        let mut output = Vec::new();
        let mut console =
            Console::new(ChessGame::new(GameId(9)), &mut input, &mut output)
                .with_store(store.clone());
        console.run().unwrap();
        assert!(console.into_game().is_end());

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("keeps the game so the next launch resumes it"));
        let resumed = ChessGame::resume(store.load().unwrap().unwrap()).unwrap();
        assert_eq!(resumed.turn(), Some(Player::Black));
    }
}
