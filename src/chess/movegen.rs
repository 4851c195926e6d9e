//! [Pseudo-legal] move generation for a single piece.
//!
//! Every piece moves according to one of two patterns:
//!
//! - Stepping pieces (knight, king) jump to a fixed set of offsets.
//! - Sliding pieces (rook, bishop, queen) move along rays until they hit the
//!   edge of the board or another piece.
//!
//! The pawn is the only irregular piece: it pushes forward (twice from its
//! starting rank), captures diagonally and is promoted on the last rank.
//!
//! Check, pins, castling and en passant are not considered: filtering out the
//! moves that leave own king in check is up to the caller.
//!
//! [Pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use std::iter;

use anyhow::bail;
use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Coordinate, Direction, Move, Piece, PieceType, Promotion, Team};

/// Upper bound on the number of moves a single piece can have: a queen in the
/// center of an empty board.
pub const MAX_PIECE_MOVES: usize = 27;

/// Moves of a single piece. They are kept on the stack: the number of them is
/// bounded by [`MAX_PIECE_MOVES`].
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

#[rustfmt::skip]
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (1, 2), (-1, 2), (-2, 1),
    (2, -1), (1, -2), (-1, -2), (-2, -1),
];

/// Produces all pseudo-legal moves of the piece standing on `source`.
///
/// ```
/// use itertools::Itertools;
/// use piecemoves::chess::board::Mailbox;
/// use piecemoves::chess::core::Coordinate;
/// use piecemoves::chess::movegen::generate_moves;
///
/// let board = Mailbox::try_from("8/8/8/8/8/8/8/K7").unwrap();
/// let king = Coordinate::try_from("a1").unwrap();
/// let moves = generate_moves(&board, king).unwrap();
/// assert_eq!(moves.iter().map(ToString::to_string).sorted().join(" "), "a1a2 a1b1 a1b2");
/// ```
///
/// # Errors
///
/// If there is no piece on `source`.
pub fn generate_moves<B: Board + ?Sized>(board: &B, source: Coordinate) -> anyhow::Result<MoveList> {
    let Some(piece) = board.piece_at(source) else {
        log::debug!("requested moves from empty square {source}");
        bail!("no piece to generate moves for on {source}");
    };
    Ok(piece_moves(board, piece, source))
}

/// Produces all pseudo-legal moves of `piece` standing on `source`. The caller
/// is responsible for `piece` actually being on `source`: the board is only
/// consulted for the squares the piece might move to.
#[must_use]
pub fn piece_moves<B: Board + ?Sized>(board: &B, piece: Piece, source: Coordinate) -> MoveList {
    let mut moves = MoveList::new();
    let team = piece.team;
    match piece.kind {
        PieceType::King => {
            generate_steps(board, team, source, Direction::ALL.map(Direction::delta), &mut moves);
        },
        PieceType::Knight => generate_steps(board, team, source, KNIGHT_OFFSETS, &mut moves),
        PieceType::Queen => generate_slides(board, team, source, &Direction::ALL, &mut moves),
        PieceType::Rook => generate_slides(board, team, source, &Direction::ORTHOGONAL, &mut moves),
        PieceType::Bishop => generate_slides(board, team, source, &Direction::DIAGONAL, &mut moves),
        PieceType::Pawn => generate_pawn_moves(board, team, source, &mut moves),
    }
    log::trace!("{piece} on {source}: {} pseudo-legal moves", moves.len());
    moves
}

/// A piece can land on empty squares and on squares occupied by the opponent.
fn can_land_on<B: Board + ?Sized>(board: &B, team: Team, target: Coordinate) -> bool {
    board
        .piece_at(target)
        .map_or(true, |occupant| occupant.team != team)
}

fn generate_steps<B: Board + ?Sized>(
    board: &B,
    team: Team,
    source: Coordinate,
    offsets: impl IntoIterator<Item = (i8, i8)>,
    moves: &mut MoveList,
) {
    moves.extend(
        offsets
            .into_iter()
            .filter_map(|(row_delta, column_delta)| source.shift(row_delta, column_delta))
            .filter(|&target| can_land_on(board, team, target))
            .map(|target| Move::new(source, target, None)),
    );
}

/// Squares from `source` (exclusive) towards the edge of the board.
fn ray(source: Coordinate, direction: Direction) -> impl Iterator<Item = Coordinate> {
    iter::successors(source.step(direction), move |current| current.step(direction))
}

fn generate_slides<B: Board + ?Sized>(
    board: &B,
    team: Team,
    source: Coordinate,
    directions: &[Direction],
    moves: &mut MoveList,
) {
    for &direction in directions {
        for target in ray(source, direction) {
            match board.piece_at(target) {
                None => moves.push(Move::new(source, target, None)),
                Some(occupant) => {
                    if occupant.team != team {
                        moves.push(Move::new(source, target, None));
                    }
                    break;
                },
            }
        }
    }
}

fn generate_pawn_moves<B: Board + ?Sized>(
    board: &B,
    team: Team,
    source: Coordinate,
    moves: &mut MoveList,
) {
    let push = team.pawn_push();
    if let Some(single) = source.shift(push, 0) {
        if board.piece_at(single).is_none() {
            push_pawn_move(team, source, single, moves);
            // The starting row is never next to the promotion one.
            if source.row() == team.pawns_starting_row() {
                if let Some(double) = single.shift(push, 0) {
                    if board.piece_at(double).is_none() {
                        moves.push(Move::new(source, double, None));
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        let Some(target) = source.shift(push, side) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.team != team)
        {
            push_pawn_move(team, source, target, moves);
        }
    }
}

/// Reaching the last rank turns a single pawn advance into one move per
/// promotion choice.
fn push_pawn_move(team: Team, source: Coordinate, target: Coordinate, moves: &mut MoveList) {
    if target.row() == team.promotion_row() {
        moves.extend(
            Promotion::ALL
                .iter()
                .map(|&promotion| Move::new(source, target, Some(promotion))),
        );
    } else {
        moves.push(Move::new(source, target, None));
    }
}
