//! The [`Board`] capability consumed by the move generator and [`Mailbox`], a
//! simple square-centric implementation of it.
//!
//! The move generator only ever asks "what stands on this square?", so any
//! board representation can plug into it by implementing [`Board`].

use std::fmt::{self, Write};

use anyhow::bail;

use crate::chess::core::{Coordinate, Piece, PieceType, Team, BOARD_SIZE, BOARD_WIDTH};

/// Read-only view of piece placement.
pub trait Board {
    /// Returns the piece standing on `coordinate` or [`None`] if the square is
    /// empty.
    fn piece_at(&self, coordinate: Coordinate) -> Option<Piece>;
}

impl<B: Board + ?Sized> Board for &B {
    fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        (**self).piece_at(coordinate)
    }
}

/// Square-centric [mailbox] board: one slot per square, indexed by
/// [`Coordinate::index`].
///
/// [`Mailbox::try_from()`] provides a convenient interface for creating a
/// board from the piece placement part of [Forsyth-Edwards Notation] (FEN):
///
/// ```
/// use piecemoves::chess::board::{Board, Mailbox};
/// use piecemoves::chess::core::Coordinate;
///
/// let board = Mailbox::try_from("8/8/8/8/4N3/8/8/8").unwrap();
/// let knight = board.piece_at(Coordinate::try_from("e4").unwrap());
/// assert_eq!(knight.map(|piece| piece.to_string()), Some("N".to_string()));
/// assert_eq!(board.piece_at(Coordinate::try_from("e5").unwrap()), None);
/// ```
///
/// [mailbox]: https://www.chessprogramming.org/Mailbox
/// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Clone, PartialEq, Eq)]
pub struct Mailbox {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Mailbox {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use piecemoves::chess::board::Mailbox;
    ///
    /// assert_eq!(
    ///     &Mailbox::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        const BACK_RANK: [PieceType; BOARD_WIDTH as usize] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut board = Self::empty();
        for coordinate in Coordinate::all() {
            let kind = match coordinate.row() {
                1 | BOARD_WIDTH => BACK_RANK[usize::from(coordinate.column() - 1)],
                2 | 7 => PieceType::Pawn,
                _ => continue,
            };
            let team = if coordinate.row() <= 2 {
                Team::White
            } else {
                Team::Black
            };
            board.put_piece(coordinate, Piece::new(team, kind));
        }
        board
    }

    /// Places the piece on given square, replacing whatever was there.
    pub fn put_piece(&mut self, coordinate: Coordinate, piece: Piece) {
        self.squares[usize::from(coordinate.index())] = Some(piece);
    }

    /// Places the piece on given square.
    ///
    /// # Errors
    ///
    /// If the square is already occupied.
    pub fn try_put_piece(&mut self, coordinate: Coordinate, piece: Piece) -> anyhow::Result<()> {
        if let Some(occupant) = self.piece_at(coordinate) {
            bail!("can not put {piece} on {coordinate}: the square is occupied by {occupant}");
        }
        self.put_piece(coordinate, piece);
        Ok(())
    }

    /// Removes the piece from given square (if there is one).
    pub fn clear_square(&mut self, coordinate: Coordinate) {
        self.squares[usize::from(coordinate.index())] = None;
    }

    /// Parses the piece placement field of FEN: ranks from 8 to 1 separated by
    /// `/`, files from a to h, digits for runs of empty squares.
    ///
    /// NOTE: This expects properly-formatted input without any whitespace. Use
    /// [`Mailbox::try_from`] for cleaning up the input.
    ///
    /// # Errors
    ///
    /// If the placement does not describe exactly 8 ranks of exactly 8 squares
    /// or contains unknown symbols.
    pub fn from_placement(placement: &str) -> anyhow::Result<Self> {
        let mut result = Self::empty();
        let mut row = BOARD_WIDTH + 1;
        for rank in placement.split('/') {
            if row == 1 {
                bail!("incorrect placement: expected 8 ranks, got {placement}");
            }
            row -= 1;
            let mut column: u8 = 0;
            for symbol in rank.chars() {
                if column >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {rank} is wider than {BOARD_WIDTH}");
                }
                match symbol {
                    '0' => bail!("incorrect placement: increment can not be 0"),
                    '1'..='8' => {
                        column += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                column += 1;
                let piece = Piece::try_from(symbol)?;
                result.put_piece(Coordinate::new(row, column)?, piece);
            }
            if column != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {rank} of length {column}"
                );
            }
        }
        if row != 1 {
            bail!("incorrect placement: there should be 8 ranks, got {placement}");
        }
        Ok(result)
    }
}

impl Board for Mailbox {
    fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[usize::from(coordinate.index())]
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Mailbox {
    type Error = anyhow::Error;

    /// Trims the input and parses piece placement. Full FEN strings are
    /// accepted as well: everything after piece placement is ignored.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        match input.split_whitespace().next() {
            Some(placement) => Self::from_placement(placement),
            None => bail!("incorrect placement: input is empty"),
        }
    }
}

impl fmt::Display for Mailbox {
    /// Prints piece placement in FEN format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_WIDTH).rev() {
            let mut empty_squares = 0;
            for column in 1..=BOARD_WIDTH {
                match self.squares[usize::from((row - 1) * BOARD_WIDTH + column - 1)] {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if row != 1 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Mailbox {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_WIDTH).rev() {
            for column in 1..=BOARD_WIDTH {
                match self.squares[usize::from((row - 1) * BOARD_WIDTH + column - 1)] {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if column != BOARD_WIDTH {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if row != 1 {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
