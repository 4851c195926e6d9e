//! Invariants of the move generator checked on random boards.

use std::collections::HashSet;

use piecemoves::chess::core::{Coordinate, Piece, PieceType, Team};
use piecemoves::{generate_moves, Board, Mailbox};
use proptest::prelude::*;
use shakmaty::{attacks, Bitboard, Square};

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (
        prop::sample::select(vec![Team::White, Team::Black]),
        prop::sample::select(vec![
            PieceType::King,
            PieceType::Queen,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
            PieceType::Pawn,
        ]),
    )
        .prop_map(|(team, kind)| Piece::new(team, kind))
}

/// Boards with roughly a third of the squares occupied.
fn board_strategy() -> impl Strategy<Value = Mailbox> {
    prop::collection::vec(prop::option::weighted(0.35, piece_strategy()), 64).prop_map(
        |squares| {
            let mut board = Mailbox::empty();
            for (coordinate, piece) in Coordinate::all().zip(squares) {
                if let Some(piece) = piece {
                    board.put_piece(coordinate, piece);
                }
            }
            board
        },
    )
}

fn occupied(board: &Mailbox) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
    Coordinate::all().filter_map(move |coordinate| Some((coordinate, board.piece_at(coordinate)?)))
}

#[rustfmt::skip]
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

fn mask(squares: impl Iterator<Item = Coordinate>) -> u64 {
    squares.fold(0, |mask, coordinate| mask | 1_u64 << coordinate.index())
}

proptest! {
    /// Every move starts on the source square, lands on the board and never
    /// captures own piece.
    #[test]
    fn prop_moves_land_on_board(board in board_strategy()) {
        for (source, piece) in occupied(&board) {
            let moves = generate_moves(&board, source).unwrap();
            let unique: HashSet<_> = moves.iter().collect();
            prop_assert_eq!(unique.len(), moves.len());
            for m in &moves {
                prop_assert_eq!(m.start(), source);
                prop_assert!((1..=8).contains(&m.end().row()));
                prop_assert!((1..=8).contains(&m.end().column()));
                prop_assert_ne!(m.end(), source);
                if let Some(occupant) = board.piece_at(m.end()) {
                    prop_assert_ne!(occupant.team, piece.team, "{} captures own piece", m);
                }
                prop_assert!(m.promotion().is_none() || piece.kind == PieceType::Pawn);
            }
        }
    }

    /// Sliding pieces never jump over the first piece standing in their way.
    #[test]
    fn prop_rays_do_not_jump(board in board_strategy()) {
        for (source, piece) in occupied(&board) {
            if !matches!(piece.kind, PieceType::Rook | PieceType::Bishop | PieceType::Queen) {
                continue;
            }
            let targets: HashSet<_> = generate_moves(&board, source)
                .unwrap()
                .iter()
                .map(|m| m.end())
                .collect();
            for (row_delta, column_delta) in QUEEN_DIRECTIONS {
                let mut blocked = false;
                let mut current = source;
                while let Some(next) = current.shift(row_delta, column_delta) {
                    if blocked {
                        prop_assert!(!targets.contains(&next), "{} jumps to {}", piece, next);
                    }
                    blocked |= board.piece_at(next).is_some();
                    current = next;
                }
            }
        }
    }

    /// Knights, kings and sliding pieces reach exactly the squares an
    /// independent attack generator finds, minus the ones occupied by own
    /// pieces.
    #[test]
    fn prop_matches_reference_attacks(board in board_strategy()) {
        let all = mask(occupied(&board).map(|(coordinate, _)| coordinate));
        for (source, piece) in occupied(&board) {
            let own = mask(
                occupied(&board)
                    .filter(|(_, other)| other.team == piece.team)
                    .map(|(coordinate, _)| coordinate),
            );
            let square = Square::new(u32::from(source.index()));
            let reference = match piece.kind {
                PieceType::King => attacks::king_attacks(square),
                PieceType::Knight => attacks::knight_attacks(square),
                PieceType::Rook => attacks::rook_attacks(square, Bitboard(all)),
                PieceType::Bishop => attacks::bishop_attacks(square, Bitboard(all)),
                PieceType::Queen => attacks::queen_attacks(square, Bitboard(all)),
                PieceType::Pawn => continue,
            };
            let moves = generate_moves(&board, source).unwrap();
            prop_assert_eq!(
                mask(moves.iter().map(|m| m.end())),
                u64::from(reference) & !own,
                "{} on {}", piece, source
            );
        }
    }

    /// Pawns move one or two squares forward or capture diagonally, promoting
    /// on the last rank into each of the four pieces.
    #[test]
    fn prop_pawn_moves(board in board_strategy()) {
        for (source, piece) in occupied(&board) {
            if piece.kind != PieceType::Pawn {
                continue;
            }
            let forward: i8 = if piece.team == Team::White { 1 } else { -1 };
            let last_row = if piece.team == Team::White { 8 } else { 1 };
            let moves = generate_moves(&board, source).unwrap();
            for m in &moves {
                let end = m.end();
                let occupant = board.piece_at(end);
                if end.column() == source.column() {
                    prop_assert!(occupant.is_none());
                    let single = source.shift(forward, 0);
                    let double = single.and_then(|s| s.shift(forward, 0));
                    prop_assert!(single == Some(end) || double == Some(end));
                } else {
                    prop_assert!(occupant.is_some_and(|occupant| occupant.team != piece.team));
                    prop_assert_eq!(source.shift(forward, 0).map(|s| s.row()), Some(end.row()));
                    prop_assert_eq!(end.column().abs_diff(source.column()), 1);
                }
                prop_assert_eq!(m.promotion().is_some(), end.row() == last_row);
            }
            let promotions = moves.iter().filter(|m| m.promotion().is_some()).count();
            prop_assert_eq!(promotions % 4, 0);
        }
    }
}
