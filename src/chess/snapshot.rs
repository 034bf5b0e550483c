//! Persisted form of a game in progress.
//!
//! The snapshot keeps only what is needed to continue playing: whose turn it
//! is and which piece stands on each occupied square. Pawns keep their
//! [`PieceKind::InitialPawn`]/[`PieceKind::MovedPawn`] distinction so that a
//! pawn which has already moved can not double-step after the game is
//! restored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::core::{Player, Rank, Square};
use crate::chess::game::{ChessGame, GameId};
use crate::chess::piece::{Piece, PieceKind};
use crate::error::{Error, Result};

/// Game in progress as plain data.
///
/// ```
/// use regicide::{ChessGame, GameId};
///
/// let mut game = ChessGame::new(GameId(1));
/// game.start(|| false).unwrap();
/// let snapshot = game.snapshot().unwrap();
/// assert_eq!(snapshot.pieces.len(), 32);
/// assert_eq!(ChessGame::resume(snapshot).unwrap(), game);
/// ```
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game_id: GameId,
    pub turn: Player,
    pub pieces: BTreeMap<Square, Piece>,
}

impl Snapshot {
    /// Records the placement on the `board` with `turn` to move.
    #[must_use]
    pub fn capture(game_id: GameId, board: &Board, turn: Player) -> Self {
        Self {
            game_id,
            turn,
            pieces: board.pieces().collect(),
        }
    }

    /// Checks the snapshot could have come from a real game: each player has
    /// exactly one king and pawns that never moved are on their starting
    /// rank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshot`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        for player in Player::ALL {
            let kings = self
                .pieces
                .values()
                .filter(|piece| **piece == Piece::new(player, PieceKind::King))
                .count();
            if kings != 1 {
                return Err(Error::InvalidSnapshot(format!(
                    "expected 1 {player} king, got {kings}"
                )));
            }
        }
        if let Some((square, piece)) = self.pieces.iter().find(|(square, piece)| {
            piece.kind == PieceKind::InitialPawn
                && square.rank() != Rank::pawns_starting(piece.owner)
        }) {
            return Err(Error::InvalidSnapshot(format!(
                "{} pawn on {square} has already moved",
                piece.owner
            )));
        }
        Ok(())
    }

    /// Rebuilds the game in progress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshot`] if [`Snapshot::validate`] fails.
    pub fn restore(self) -> Result<ChessGame> {
        self.validate()?;
        Ok(ChessGame::playing(
            self.game_id,
            self.pieces.into_iter().collect(),
            self.turn,
        ))
    }
}
