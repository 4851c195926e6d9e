//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A candidate move of a single piece: where it stands, where it lands and,
/// for pawns reaching the last rank, what it turns into. Moves produced by
/// [`crate::chess::movegen`] are pseudo-legal: they follow the movement rules
/// of the piece but may leave the own king in check.
///
/// The move representation has one-to-one correspondence with the UCI move
/// representation:
///
/// ```
/// use piecemoves::chess::core::{Coordinate, Move, Promotion};
///
/// let start = Coordinate::try_from("b7").unwrap();
/// let end = Coordinate::try_from("c8").unwrap();
/// assert_eq!(Move::new(start, end, None).to_string(), "b7c8");
/// assert_eq!(
///     Move::new(start, end, Some(Promotion::Knight)).to_string(),
///     "b7c8n"
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    start: Coordinate,
    end: Coordinate,
    promotion: Option<Promotion>,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(start: Coordinate, end: Coordinate, promotion: Option<Promotion>) -> Self {
        Self {
            start,
            end,
            promotion,
        }
    }

    /// Square the piece moves from.
    #[must_use]
    pub const fn start(self) -> Coordinate {
        self.start
    }

    /// Square the piece moves to.
    #[must_use]
    pub const fn end(self) -> Coordinate {
        self.end
    }

    /// The piece a pawn is promoted to, [`None`] for all other moves.
    #[must_use]
    pub const fn promotion(self) -> Option<Promotion> {
        self.promotion
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format].
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", PieceType::from(promotion))?;
        }
        Ok(())
    }
}

/// A square of the board addressed by its row (rank) and column (file). Both
/// are one-based, i.e. `a1` is row 1 and column 1 while `h8` is row 8 and
/// column 8.
///
/// A coordinate can only be constructed within the board, so anything holding
/// a [`Coordinate`] is guaranteed to be in bounds:
///
/// ```
/// use piecemoves::chess::core::Coordinate;
///
/// assert!(Coordinate::new(1, 8).is_ok());
/// assert!(Coordinate::new(0, 4).is_err());
/// assert!(Coordinate::new(4, 9).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Connects row (rank) and column (file) to form a full square.
    ///
    /// # Errors
    ///
    /// If either of the values is outside `1..=BOARD_WIDTH`.
    pub fn new(row: u8, column: u8) -> anyhow::Result<Self> {
        if !Self::within_board(row) {
            bail!("row should be within 1..=BOARD_WIDTH, got {row}");
        }
        if !Self::within_board(column) {
            bail!("column should be within 1..=BOARD_WIDTH, got {column}");
        }
        Ok(Self { row, column })
    }

    const fn within_board(value: u8) -> bool {
        1 <= value && value <= BOARD_WIDTH
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Position of the square on the board: from left to right, from bottom to
    /// the top.
    ///
    /// ```
    /// use piecemoves::chess::core::Coordinate;
    ///
    /// let index = |square| Coordinate::try_from(square).unwrap().index();
    /// assert_eq!(index("a1"), 0);
    /// assert_eq!(index("e1"), 4);
    /// assert_eq!(index("h1"), 7);
    /// assert_eq!(index("a4"), 8 * 3);
    /// assert_eq!(index("h8"), 63);
    /// ```
    #[must_use]
    pub const fn index(self) -> u8 {
        (self.row - 1) * BOARD_WIDTH + self.column - 1
    }

    /// Moves the coordinate by given number of rows and columns. Returns
    /// [`None`] if the result would leave the board.
    #[must_use]
    pub fn shift(self, row_delta: i8, column_delta: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(row_delta)?;
        let column = self.column.checked_add_signed(column_delta)?;
        (Self::within_board(row) && Self::within_board(column)).then_some(Self { row, column })
    }

    /// Neighbouring square in given direction, if there is one.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, column_delta) = direction.delta();
        self.shift(row_delta, column_delta)
    }

    /// Iterates over all squares of the board in [`Coordinate::index`] order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=BOARD_WIDTH)
            .cartesian_product(1..=BOARD_WIDTH)
            .map(|(row, column)| Self { row, column })
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = anyhow::Error;

    /// Parses a square in algebraic notation, e.g. `e4`.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            );
        };
        let column = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => rank as u8 - b'0',
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self { row, column })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.column - 1), self.row)
    }
}

/// A standard game of chess is played between two teams: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn advancing towards the opponent.
    pub(super) const fn pawn_push(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    pub(super) const fn pawns_starting_row(self) -> u8 {
        match self {
            Self::White => 2,
            Self::Black => BOARD_WIDTH - 1,
        }
    }

    /// The opponent's back rank: pawns landing there are promoted.
    pub(super) const fn promotion_row(self) -> u8 {
        match self {
            Self::White => BOARD_WIDTH,
            Self::Black => 1,
        }
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    const fn symbol(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Rook => 'r',
            Self::Pawn => 'p',
        }
    }
}

impl From<Promotion> for PieceType {
    fn from(promotion: Promotion) -> Self {
        match promotion {
            Promotion::Rook => Self::Rook,
            Promotion::Knight => Self::Knight,
            Promotion::Bishop => Self::Bishop,
            Promotion::Queen => Self::Queen,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Represents a specific piece owned by a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub team: Team,
    #[allow(missing_docs)]
    pub kind: PieceType,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(team: Team, kind: PieceType) -> Self {
        Self { team, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses FEN piece symbol: uppercase for White, lowercase for Black.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'r' => PieceType::Rook,
            'p' => PieceType::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        let team = if symbol.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Ok(Self { team, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        f.write_char(match self.team {
            Team::White => symbol.to_ascii_uppercase(),
            Team::Black => symbol,
        })
    }
}

/// A pawn can be promoted to a rook, knight, bishop or a queen.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl Promotion {
    /// Every promotion choice: a pawn advancing to the last rank produces one
    /// move per each of them.
    pub const ALL: [Self; 4] = [Self::Rook, Self::Knight, Self::Bishop, Self::Queen];
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
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
    /// Along ranks and files: the way rooks move.
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
    /// Along diagonals: the way bishops move.
    pub const DIAGONAL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownRight, Self::DownLeft];
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

    /// (row, column) offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (1, -1),
            Self::Up => (1, 0),
            Self::UpRight => (1, 1),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::DownLeft => (-1, -1),
            Self::Down => (-1, 0),
            Self::DownRight => (-1, 1),
        }
    }
}
