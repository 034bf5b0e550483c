//! Material balance using the "[standard piece valuations]" with one
//! positional adjustment: pawns sharing a file are worth less. The first pawn
//! on a file counts fully, every other one counts as half a pawn.
//!
//! The king is never scored, its presence decides the game instead.
//!
//! [standard piece valuations]: https://en.wikipedia.org/wiki/Chess_piece_relative_value

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::Player;
use crate::evaluation::Score;

pub(crate) const PAWN_VALUE: Score = Score::cp(100);
pub(crate) const DOUBLED_PAWN_VALUE: Score = Score::cp(50);
pub(crate) const KNIGHT_VALUE: Score = Score::cp(250);
pub(crate) const BISHOP_VALUE: Score = Score::cp(300);
pub(crate) const ROOK_VALUE: Score = Score::cp(500);
pub(crate) const QUEEN_VALUE: Score = Score::cp(900);

fn pawns_on_file(count: usize) -> Score {
    PAWN_VALUE
        + std::iter::repeat(DOUBLED_PAWN_VALUE)
            .take(count.saturating_sub(1))
            .sum::<Score>()
}

pub(crate) fn material(board: &Board, player: Player) -> Score {
    let pieces: Score = board
        .pieces_of(player)
        .filter(|(_, piece)| !piece.kind.is_pawn())
        .map(|(_, piece)| piece.score())
        .sum();
    let pawns: Score = board
        .pieces_of(player)
        .filter(|(_, piece)| piece.kind.is_pawn())
        .map(|(square, _)| square.file())
        .counts()
        .into_values()
        .map(pawns_on_file)
        .sum();
    pieces + pawns
}
