//! A single game of chess from the first move to the capture of a king.
//!
//! [`ChessGame`] is a state machine over three [`Phase`]s: the game is created
//! [`Phase::Ready`], becomes [`Phase::Playing`] once started and ends up in
//! [`Phase::Ended`] when a king is captured or the game is ended explicitly.
//! Every transition either succeeds or leaves the game exactly as it was.

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess::board::Board;
use crate::chess::core::{Player, Square};
use crate::chess::snapshot::Snapshot;
use crate::error::{Error, Result};
use crate::evaluation::Score;

/// The board a game shows before it has been started.
static EMPTY_BOARD: Board = Board::empty();

/// Identifies a game across restarts and persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Ended => "ended",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Ready,
    Playing { board: Board, turn: Player },
    Ended { board: Board },
}

/// Game lifecycle and turn order on top of a [`Board`].
///
/// ```
/// use regicide::{ChessGame, GameId, Phase, Player, Square};
///
/// let mut game = ChessGame::new(GameId(1));
/// game.start(|| unreachable!("a new game starts without asking")).unwrap();
/// game.make_move(Square::try_from("e2").unwrap(), Square::try_from("e4").unwrap())
///     .unwrap();
/// assert_eq!(game.phase(), Phase::Playing);
/// assert_eq!(game.turn(), Some(Player::Black));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessGame {
    id: GameId,
    state: State,
}

impl ChessGame {
    /// Creates a game that has not been started yet.
    #[must_use]
    pub const fn new(id: GameId) -> Self {
        Self {
            id,
            state: State::Ready,
        }
    }

    /// Creates a game in progress with arbitrary placement, `turn` moves next.
    #[must_use]
    pub const fn playing(id: GameId, board: Board, turn: Player) -> Self {
        Self {
            id,
            state: State::Playing { board, turn },
        }
    }

    /// Restores a game in progress from its persisted form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshot`] if the snapshot does not describe a
    /// game that could have been reached by playing.
    pub fn resume(snapshot: Snapshot) -> Result<Self> {
        let game = snapshot.restore()?;
        info!(game = %game.id, "game resumed");
        Ok(game)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Ready => Phase::Ready,
            State::Playing { .. } => Phase::Playing,
            State::Ended { .. } => Phase::Ended,
        }
    }

    /// Returns `true` once the game is over.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.state, State::Ended { .. })
    }

    /// The player to move next, only defined while the game is played.
    #[must_use]
    pub const fn turn(&self) -> Option<Player> {
        match self.state {
            State::Playing { turn, .. } => Some(turn),
            State::Ready | State::Ended { .. } => None,
        }
    }

    /// Current placement. A game that has not started shows an empty board.
    #[must_use]
    pub fn board(&self) -> &Board {
        match &self.state {
            State::Ready => &EMPTY_BOARD,
            State::Playing { board, .. } | State::Ended { board } => board,
        }
    }

    /// Material of the `player` on the current board.
    #[must_use]
    pub fn score(&self, player: Player) -> Score {
        self.board().calculate_score(player)
    }

    /// The player whose king survived.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] before the game has ended and for a
    /// game that ended with both (or neither) kings on the board.
    pub fn winner(&self) -> Result<Player> {
        match &self.state {
            State::Ended { board } => board.winner().ok_or(Error::IllegalState(
                "the game ended without a single surviving king",
            )),
            State::Ready | State::Playing { .. } => {
                Err(Error::IllegalState("no winner has been decided yet"))
            },
        }
    }

    /// Starts the game with the standard setup and White to move.
    ///
    /// For a game in progress `restart` is asked (exactly once) whether to
    /// throw the current game away and start over. A game that has not
    /// started yet never asks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] if the game has already ended.
    pub fn start(&mut self, restart: impl FnOnce() -> bool) -> Result<()> {
        match self.state {
            State::Ready => {
                info!(game = %self.id, "game started");
            },
            State::Playing { .. } => {
                if !restart() {
                    return Ok(());
                }
                info!(game = %self.id, "game restarted");
            },
            State::Ended { .. } => return Err(Error::IllegalState("game has already ended")),
        }
        self.state = State::Playing {
            board: Board::starting(),
            turn: Player::White,
        };
        Ok(())
    }

    /// Moves the piece on the `source` square to the `target` square on
    /// behalf of the player to move. Capturing a king ends the game,
    /// otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] unless the game is being played and
    /// [`Error::IllegalMove`] if the move breaks the rules. The game is not
    /// modified in either case.
    pub fn make_move(&mut self, source: Square, target: Square) -> Result<()> {
        let (board, turn) = match &mut self.state {
            State::Playing { board, turn } => (board, turn),
            State::Ready => return Err(Error::IllegalState("game has not started yet")),
            State::Ended { .. } => return Err(Error::IllegalState("game has already ended")),
        };
        board.make_move(source, target, *turn)?;
        debug!(game = %self.id, player = %turn, from = %source, to = %target, "move");
        if board.is_king_dead() {
            let board = mem::take(board);
            info!(game = %self.id, winner = ?board.winner(), "king captured, game ended");
            self.state = State::Ended { board };
        } else {
            *turn = turn.opponent();
        }
        Ok(())
    }

    /// Ends the game, keeping the final placement for scoring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] if the game has already ended.
    pub fn end(&mut self) -> Result<()> {
        let board = match &mut self.state {
            State::Ready => Board::empty(),
            State::Playing { board, .. } => mem::take(board),
            State::Ended { .. } => return Err(Error::IllegalState("game has already ended")),
        };
        info!(game = %self.id, "game ended");
        self.state = State::Ended { board };
        Ok(())
    }

    /// Captures a game in progress for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] unless the game is being played.
    pub fn snapshot(&self) -> Result<Snapshot> {
        match &self.state {
            State::Playing { board, turn } => Ok(Snapshot::capture(self.id, board, *turn)),
            State::Ready | State::Ended { .. } => Err(Error::IllegalState(
                "only a game in progress can be saved",
            )),
        }
    }
}
