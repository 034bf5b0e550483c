//! Standard [chess pieces] and the rules of how each of them moves.
//!
//! [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess::core::{Direction, Player};
use crate::chess::path::Path;
use crate::error::{Error, Result};
use crate::evaluation::material::{BISHOP_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE};
use crate::evaluation::Score;

/// Kind of a piece. A pawn that has not moved yet and a pawn that already did
/// are different kinds: the double step is only available to the former.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    InitialPawn,
    MovedPawn,
}

impl PieceKind {
    #[allow(missing_docs)]
    pub const ALL: [Self; 7] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::InitialPawn,
        Self::MovedPawn,
    ];

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Self::InitialPawn | Self::MovedPawn)
    }

    /// The kind a piece has after it moved.
    #[must_use]
    pub const fn moved(self) -> Self {
        match self {
            Self::InitialPawn => Self::MovedPawn,
            kind => kind,
        }
    }

    /// Fixed value of the piece. The king is not scored.
    #[must_use]
    pub const fn score(self) -> Score {
        match self {
            Self::King => Score::ZERO,
            Self::Queen => QUEEN_VALUE,
            Self::Rook => ROOK_VALUE,
            Self::Bishop => BISHOP_VALUE,
            Self::Knight => KNIGHT_VALUE,
            Self::InitialPawn | Self::MovedPawn => PAWN_VALUE,
        }
    }

    /// Name used when the piece is persisted.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
            Self::InitialPawn => "initial_pawn",
            Self::MovedPawn => "moved_pawn",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::InitialPawn | Self::MovedPawn => 'p',
        }
    }
}

impl FromStr for PieceKind {
    type Err = Error;

    /// Parses the persisted [`PieceKind::name`], ignoring the case.
    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidSnapshot(format!("unknown piece kind: '{name}'")))
    }
}

impl TryFrom<String> for PieceKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<PieceKind> for String {
    fn from(kind: PieceKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Checks whether the piece can travel along the `path` traced from its
    /// square on the current board.
    #[must_use]
    pub fn can_move(self, path: &Path) -> bool {
        if path.is_ally_at_target() {
            return false;
        }
        match self.kind {
            PieceKind::King => path.offset().chebyshev() == 1,
            PieceKind::Queen => slides(path, |_| true),
            PieceKind::Rook => slides(path, Direction::is_orthogonal),
            PieceKind::Bishop => slides(path, Direction::is_diagonal),
            PieceKind::Knight => path.offset().is_knight_jump(),
            PieceKind::InitialPawn => self.pushes(path, 2) || self.captures(path),
            PieceKind::MovedPawn => self.pushes(path, 1) || self.captures(path),
        }
    }

    /// The piece as it stands on the target square after a move.
    #[must_use]
    pub const fn moved(self) -> Self {
        Self::new(self.owner, self.kind.moved())
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn score(self) -> Score {
        self.kind.score()
    }

    fn forward(self) -> i8 {
        self.owner.push_direction().step().1
    }

    /// Straight advance onto free squares only.
    fn pushes(self, path: &Path, max_squares: i8) -> bool {
        let offset = path.offset();
        offset.files == 0
            && (1..=max_squares).contains(&(offset.ranks * self.forward()))
            && !path.has_piece_except_target()
            && path.is_empty_at_target()
    }

    /// One step diagonally forward, only onto an enemy piece.
    fn captures(self, path: &Path) -> bool {
        let offset = path.offset();
        offset.files.unsigned_abs() == 1
            && offset.ranks == self.forward()
            && path.is_enemy_at_target()
    }
}

fn slides(path: &Path, orientation: fn(Direction) -> bool) -> bool {
    path.has_count_of_distinct_direction(1)
        && !path.has_piece_except_target()
        && path.direction().is_some_and(orientation)
}

impl fmt::Display for Piece {
    /// Uses the FEN letters: uppercase for White, lowercase for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        f.write_char(match self.owner {
            Player::White => symbol.to_ascii_uppercase(),
            Player::Black => symbol,
        })
    }
}
