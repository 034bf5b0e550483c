//! Square-centric [board representation]: which piece stands on each square.
//!
//! [board representation]: https://www.chessprogramming.org/Mailbox

use std::fmt::{self, Write};

use itertools::Itertools;

use crate::chess::core::{File, Player, Rank, Square, BOARD_SIZE};
use crate::chess::path::Path;
use crate::chess::piece::{Piece, PieceKind};
use crate::error::{Error, Result};
use crate::evaluation::material::material;
use crate::evaluation::Score;

/// Pieces on the first and the last rank, from [`File::A`] to [`File::H`].
const BACKRANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pieces placement. A move is the only way to change it once the board is
/// set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting position of the standard chess variant: 16 pieces
    /// per player, all pawns still on their initial squares.
    ///
    /// ```
    /// use regicide::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr\n\
    ///      pppppppp\n\
    ///      ........\n\
    ///      ........\n\
    ///      ........\n\
    ///      ........\n\
    ///      PPPPPPPP\n\
    ///      RNBQKBNR\n"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for owner in Player::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACKRANK) {
                board.put(
                    Square::new(file, Rank::backrank(owner)),
                    Piece::new(owner, kind),
                );
                board.put(
                    Square::new(file, Rank::pawns_starting(owner)),
                    Piece::new(owner, PieceKind::InitialPawn),
                );
            }
        }
        board
    }

    /// Returns the piece standing on the `square`, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// All pieces on the board in [`Square::index`] order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Pieces owned by the `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    /// Moves the piece from `source` to `target` on behalf of the `mover`,
    /// capturing whatever stands on the target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the source square is empty, the piece
    /// belongs to the other player or it can not reach the target. The board
    /// is not modified in that case.
    pub fn make_move(&mut self, source: Square, target: Square, mover: Player) -> Result<()> {
        let illegal = |reason| Error::IllegalMove {
            from: source,
            to: target,
            reason,
        };
        let piece = self
            .at(source)
            .ok_or_else(|| illegal("there is no piece on the source square"))?;
        if piece.owner != mover {
            return Err(illegal("the piece belongs to the opponent"));
        }
        let path = Path::trace(self, source, target, mover);
        if !piece.can_move(&path) {
            return Err(illegal("the piece can not move to the target square"));
        }
        self.squares[target.index()] = Some(piece.moved());
        self.squares[source.index()] = None;
        Ok(())
    }

    /// Returns `true` once one of the kings has been captured.
    #[must_use]
    pub fn is_king_dead(&self) -> bool {
        self.kings().count() < 2
    }

    /// Owner of the only king left on the board.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.kings().exactly_one().ok()
    }

    /// Material value of the `player`'s pieces.
    #[must_use]
    pub fn calculate_score(&self, player: Player) -> Score {
        material(self, player)
    }

    fn kings(&self) -> impl Iterator<Item = Player> + '_ {
        self.pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(_, piece)| piece.owner)
    }

    fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<(Square, Piece)> for Board {
    /// Places the pieces on an empty board. A later piece replaces an earlier
    /// one on the same square.
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(pieces: I) -> Self {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.put(square, piece);
        }
        board
    }
}

impl fmt::Display for Board {
    /// Prints the board from White's perspective, one rank per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
