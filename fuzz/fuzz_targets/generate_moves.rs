#![no_main]
use libfuzzer_sys::fuzz_target;
use piecemoves::chess::core::Coordinate;
use piecemoves::{generate_moves, Board, Mailbox};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Mailbox::try_from(input) else {
        return;
    };
    for source in Coordinate::all() {
        let Some(piece) = board.piece_at(source) else {
            assert!(generate_moves(&board, source).is_err());
            continue;
        };
        let moves = generate_moves(&board, source).expect("the square is occupied");
        for (index, m) in moves.iter().enumerate() {
            assert_eq!(m.start(), source);
            assert!(moves[index + 1..].iter().all(|other| other != m), "duplicate {m}");
            if let Some(occupant) = board.piece_at(m.end()) {
                assert_ne!(occupant.team, piece.team, "{m} captures own piece");
            }
        }
    }
});
