//! Rules engine for a simplified game of chess: pieces move by their
//! standard patterns, a player wins by capturing the opponent's king and
//! check, castling, en passant and promotion do not exist.
//!
//! The [`ChessGame`] state machine is the entry point: it owns the [`Board`],
//! keeps track of the turn and decides when the game is over. The
//! [`Console`] drives a game from a line-oriented text stream and is what
//! the `regicide` binary runs.
//!
//! ```
//! use regicide::{ChessGame, GameId, Player, Square};
//!
//! let mut game = ChessGame::new(GameId(1));
//! game.start(|| true).unwrap();
//! game.make_move("e2".parse::<Square>().unwrap(), "e4".parse().unwrap())
//!     .unwrap();
//! assert_eq!(game.score(Player::White).to_string(), "38");
//! ```

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod chess;
pub mod evaluation;

mod console;
mod error;

pub use chess::board::Board;
pub use chess::core::{Direction, File, Player, Rank, Square};
pub use chess::game::{ChessGame, GameId, Phase};
pub use chess::piece::{Piece, PieceKind};
pub use chess::snapshot::Snapshot;
pub use console::{Console, SnapshotStore};
pub use error::{Error, Result};
pub use evaluation::Score;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version and the build type on startup.
pub fn print_version_info() {
    println!("Regicide {}", version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
