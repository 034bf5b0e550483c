//! The way a piece travels from its square to the target square.
//!
//! A [`Path`] is never stored: it is traced on demand against the current
//! board and only lives while a move is validated.

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Direction, Offset, Player, Square, BOARD_WIDTH};

/// The longest path crosses the whole board.
const MAX_STEPS: usize = BOARD_WIDTH as usize - 1;

/// Who stands on a square, from the perspective of the moving player.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Ally,
    Enemy,
}

/// A single step of the [`Path`]: the direction taken and the square reached.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub direction: Direction,
    pub square: Square,
    pub occupant: Occupant,
}

/// Squares between the source and the target square (target included).
///
/// Each step moves every axis one square closer to the target, so a path
/// along a file, a rank or a diagonal keeps a single direction while any
/// other path bends once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    source: Square,
    target: Square,
    target_occupant: Occupant,
    steps: ArrayVec<Step, MAX_STEPS>,
}

impl Path {
    /// Walks from `source` to `target` and records the occupancy of every
    /// square on the way as seen by the `mover`.
    #[must_use]
    pub fn trace(board: &Board, source: Square, target: Square, mover: Player) -> Self {
        let occupant = |square| match board.at(square) {
            None => Occupant::Empty,
            Some(piece) if piece.owner == mover => Occupant::Ally,
            Some(_) => Occupant::Enemy,
        };
        let mut steps = ArrayVec::new();
        let mut current = source;
        while let Some(direction) = Direction::towards(current, target) {
            let Some(square) = current.shift(direction) else {
                break;
            };
            steps.push(Step {
                direction,
                square,
                occupant: occupant(square),
            });
            current = square;
        }
        Self {
            source,
            target,
            target_occupant: occupant(target),
            steps,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Per-axis distance from the source to the target.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.source.offset_to(self.target)
    }

    /// The line connecting source and target, if there is one.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.source, self.target)
    }

    /// Returns `true` if any square before the target is occupied.
    #[must_use]
    pub fn has_piece_except_target(&self) -> bool {
        self.steps
            .iter()
            .filter(|step| step.square != self.target)
            .any(|step| step.occupant != Occupant::Empty)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_ally_at_target(&self) -> bool {
        self.target_occupant == Occupant::Ally
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_enemy_at_target(&self) -> bool {
        self.target_occupant == Occupant::Enemy
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty_at_target(&self) -> bool {
        self.target_occupant == Occupant::Empty
    }

    /// Checks the number of different directions taken along the path: 1 for
    /// straight and diagonal lines, 2 for everything else and 0 when the
    /// piece stays where it is.
    #[must_use]
    pub fn has_count_of_distinct_direction(&self, count: usize) -> bool {
        self.steps.iter().map(|step| step.direction).unique().count() == count
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::piece::{Piece, PieceKind};

    fn square(notation: &str) -> Square {
        Square::try_from(notation).expect("test squares are valid")
    }

    fn board() -> Board {
        [
            (square("a1"), Piece::new(Player::White, PieceKind::Rook)),
            (square("a3"), Piece::new(Player::White, PieceKind::MovedPawn)),
            (square("a6"), Piece::new(Player::Black, PieceKind::MovedPawn)),
            (square("c3"), Piece::new(Player::Black, PieceKind::Knight)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn straight_line() {
        let path = Path::trace(&board(), square("a1"), square("a6"), Player::White);
        assert_eq!(
            path.steps()
                .iter()
                .map(|step| step.square.to_string())
                .collect::<Vec<_>>(),
            vec!["a2", "a3", "a4", "a5", "a6"]
        );
        assert!(path.has_count_of_distinct_direction(1));
        assert_eq!(path.direction(), Some(Direction::Up));
        assert!(path.has_piece_except_target());
        assert!(path.is_enemy_at_target());
        assert!(!path.is_ally_at_target());
    }

    #[test]
    fn clear_diagonal() {
        let path = Path::trace(&board(), square("a1"), square("c3"), Player::White);
        assert_eq!(path.steps().len(), 2);
        assert!(path.has_count_of_distinct_direction(1));
        assert_eq!(path.direction(), Some(Direction::UpRight));
        assert!(!path.has_piece_except_target());
        assert!(path.is_enemy_at_target());
    }

    #[test]
    fn bent_path() {
        let path = Path::trace(&board(), square("a1"), square("b3"), Player::White);
        assert_eq!(
            path.steps()
                .iter()
                .map(|step| step.direction)
                .collect::<Vec<_>>(),
            vec![Direction::UpRight, Direction::Up]
        );
        assert!(path.has_count_of_distinct_direction(2));
        assert_eq!(path.direction(), None);
        assert_eq!(path.offset(), Offset { files: 1, ranks: 2 });
        assert!(path.is_empty_at_target());
    }

    #[test]
    fn occupancy_depends_on_mover() {
        let path = Path::trace(&board(), square("a1"), square("a3"), Player::White);
        assert!(path.is_ally_at_target());
        assert!(!path.has_piece_except_target());

        let path = Path::trace(&board(), square("a1"), square("a3"), Player::Black);
        assert!(path.is_enemy_at_target());
    }

    #[test]
    fn standing_still() {
        let path = Path::trace(&board(), square("a1"), square("a1"), Player::White);
        assert!(path.steps().is_empty());
        assert!(path.has_count_of_distinct_direction(0));
        assert!(path.is_ally_at_target());
    }
}
