#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use regicide::{ChessGame, GameId, PieceKind, Player, Square};

// Every byte pair is a move attempt: the lower six bits pick the square.
fuzz_target!(|data: &[u8]| {
    let mut game = ChessGame::new(GameId(0));
    game.start(|| false).unwrap();
    for (from, to) in data.iter().tuples() {
        let from = Square::try_from(from % 64).unwrap();
        let to = Square::try_from(to % 64).unwrap();
        let before = game.clone();
        match game.make_move(from, to) {
            Ok(()) => {
                assert!(game.board().at(from).is_none());
                assert!(game.board().at(to).is_some());
                if game.is_end() {
                    assert!(game.winner().is_ok());
                    break;
                }
                assert_eq!(game.turn(), before.turn().map(Player::opponent));
            },
            Err(_) => assert_eq!(game, before),
        }
        let kings = game
            .board()
            .pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        assert_eq!(kings, 2);
    }
});
