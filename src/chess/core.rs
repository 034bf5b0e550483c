//! Chess primitives commonly used within [`crate::chess`].

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Board square: a file (column) and a rank (row). Squares are plain values,
/// which makes them suitable as keys of the persisted board mapping.
///
/// ```
/// use regicide::chess::core::{File, Rank, Square};
///
/// let square = Square::try_from("e2").unwrap();
/// assert_eq!(square, Square::new(File::E, Rank::Two));
/// assert_eq!(square.to_string(), "e2");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    // Rank goes first: squares are ordered a1, b1, ..., h1, a2, ..., h8.
    rank: Rank,
    file: File,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { rank, file }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Position of the square in the board storage: from left to right, from
    /// bottom to the top.
    ///
    /// ```
    /// use regicide::chess::core::Square;
    ///
    /// assert_eq!(Square::try_from("a1").unwrap().index(), 0);
    /// assert_eq!(Square::try_from("h1").unwrap().index(), 7);
    /// assert_eq!(Square::try_from("a4").unwrap().index(), 8 * 3);
    /// assert_eq!(Square::try_from("h8").unwrap().index(), 63);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self.file as usize + self.rank as usize * BOARD_WIDTH as usize
    }

    /// Iterates over all squares in [`Square::index`] order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Self::new(file, rank)))
    }

    /// Returns the neighbouring square in given direction or `None` if it
    /// would be outside of the board.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (files, ranks) = direction.step();
        Some(Self::new(self.file.shift(files)?, self.rank.shift(ranks)?))
    }

    /// Signed distance along both axes from this square to the `other` one.
    #[must_use]
    pub fn offset_to(self, other: Self) -> Offset {
        Offset {
            files: self.file.distance(other.file),
            ranks: self.rank.distance(other.rank),
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = Error;

    /// Creates a square given its [`Square::index`].
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> Result<Self> {
        if square_index >= BOARD_SIZE {
            return Err(Error::InvalidCoordinate(format!(
                "square index should be in 0..BOARD_SIZE, got {square_index}"
            )));
        }
        Ok(Self::new(
            File::try_from(square_index % BOARD_WIDTH)?,
            Rank::try_from(square_index / BOARD_WIDTH)?,
        ))
    }
}

impl TryFrom<&str> for Square {
    type Error = Error;

    fn try_from(square: &str) -> Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            return Err(Error::InvalidCoordinate(format!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            )));
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl TryFrom<String> for Square {
    type Error = Error;

    fn try_from(square: String) -> Result<Self> {
        Self::try_from(square.as_str())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(square: &str) -> Result<Self> {
        Self::try_from(square)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// Signed per-axis distance between two squares: positive `files` point
/// towards [`File::H`], positive `ranks` point towards [`Rank::Eight`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offset {
    #[allow(missing_docs)]
    pub files: i8,
    #[allow(missing_docs)]
    pub ranks: i8,
}

impl Offset {
    /// Number of king steps needed to cover the offset.
    #[must_use]
    pub const fn chebyshev(self) -> u8 {
        let files = self.files.unsigned_abs();
        let ranks = self.ranks.unsigned_abs();
        if files > ranks {
            files
        } else {
            ranks
        }
    }

    /// Returns `true` for the L-shaped jump: two squares along one axis and
    /// one along the other.
    #[must_use]
    pub const fn is_knight_jump(self) -> bool {
        matches!(
            (self.files.unsigned_abs(), self.ranks.unsigned_abs()),
            (1, 2) | (2, 1)
        )
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files from left to right.
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Signed number of files from `self` to `other`.
    #[must_use]
    pub const fn distance(self, other: Self) -> i8 {
        other as i8 - self as i8
    }

    fn shift(self, delta: i8) -> Option<Self> {
        (self as u8)
            .checked_add_signed(delta)
            .and_then(|column| Self::try_from(column).ok())
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = Error;

    fn try_from(file: char) -> Result<Self> {
        match file {
            'a'..='h' => Self::try_from(file as u8 - b'a'),
            _ => Err(Error::InvalidCoordinate(format!(
                "file should be within 'a'..='h', got '{file}'"
            ))),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = Error;

    fn try_from(column: u8) -> Result<Self> {
        Self::ALL.get(usize::from(column)).copied().ok_or_else(|| {
            Error::InvalidCoordinate(format!(
                "file should be within 0..BOARD_WIDTH, got {column}"
            ))
        })
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// All ranks from White's side of the board to Black's.
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// Signed number of ranks from `self` to `other`.
    #[must_use]
    pub const fn distance(self, other: Self) -> i8 {
        other as i8 - self as i8
    }

    pub(super) const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    pub(super) const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }

    fn shift(self, delta: i8) -> Option<Self> {
        (self as u8)
            .checked_add_signed(delta)
            .and_then(|row| Self::try_from(row).ok())
    }
}

impl TryFrom<char> for Rank {
    type Error = Error;

    fn try_from(rank: char) -> Result<Self> {
        match rank {
            '1'..='8' => Self::try_from(rank as u8 - b'1'),
            _ => Err(Error::InvalidCoordinate(format!(
                "rank should be within '1'..='8', got '{rank}'"
            ))),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = Error;

    fn try_from(row: u8) -> Result<Self> {
        Self::ALL.get(usize::from(row)).copied().ok_or_else(|| {
            Error::InvalidCoordinate(format!("rank should be within 0..BOARD_WIDTH, got {row}"))
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players, in the order they move.
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The way this player's pawns advance.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    /// Parses the stored name of the player, ignoring the case.
    fn from_str(player: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.to_string().eq_ignore_ascii_case(player))
            .ok_or_else(|| Error::InvalidSnapshot(format!("unknown player: '{player}'")))
    }
}

impl TryFrom<String> for Player {
    type Error = Error;

    fn try_from(player: String) -> Result<Self> {
        player.parse()
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.to_string()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    #[allow(missing_docs)]
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::Left,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// Single step along this direction as (files, ranks).
    #[must_use]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, 1),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }

    /// Direction of the first step on the way from `from` to `to`: each axis
    /// moves by the sign of its remaining distance. `None` only if both
    /// squares are the same.
    #[must_use]
    pub fn towards(from: Square, to: Square) -> Option<Self> {
        let offset = from.offset_to(to);
        Self::from_step(offset.files.signum(), offset.ranks.signum())
    }

    /// Direction of the straight or diagonal line connecting two squares.
    /// `None` if the squares are the same or do not share a line.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let offset = from.offset_to(to);
        let aligned = offset.files == 0
            || offset.ranks == 0
            || offset.files.unsigned_abs() == offset.ranks.unsigned_abs();
        if aligned {
            Self::towards(from, to)
        } else {
            None
        }
    }

    /// Along a file or a rank.
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Along a diagonal.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        !self.is_orthogonal()
    }

    const fn from_step(files: i8, ranks: i8) -> Option<Self> {
        match (files, ranks) {
            (-1, 1) => Some(Self::UpLeft),
            (0, 1) => Some(Self::Up),
            (1, 1) => Some(Self::UpRight),
            (1, 0) => Some(Self::Right),
            (-1, 0) => Some(Self::Left),
            (-1, -1) => Some(Self::DownLeft),
            (0, -1) => Some(Self::Down),
            (1, -1) => Some(Self::DownRight),
            _ => None,
        }
    }
}
