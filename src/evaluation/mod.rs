//! This module implements "static" [evaluation], i.e. the relative value of
//! each player's material on the board.
//!
//! For convenience, the score is kept in centipawn units.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

pub(crate) mod material;
mod score;

pub use score::Score;
