use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color travels by.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Zero-based row the pawns of this color start on.
    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Material value used by the score calculator. The king is never scored.
    pub fn point(&self) -> f64 {
        match self {
            PieceType::Pawn => 1.0,
            PieceType::Knight => 2.5,
            PieceType::Bishop => 3.0,
            PieceType::Rook => 5.0,
            PieceType::Queen => 9.0,
            PieceType::King => 0.0,
        }
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

/// Content of a board square. `Empty` never blocks, is never captured and scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    pub fn is_color(&self, color: Color) -> bool {
        matches!(self, Square::Occupied(piece) if piece.color == color)
    }

    pub fn to_char(&self) -> char {
        match self {
            Square::Occupied(piece) => piece.to_char(),
            Square::Empty => '.',
        }
    }
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    pub fn to_char(&self) -> char {
        let symbol = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        if self.color == Color::White {
            symbol
        } else {
            symbol.to_ascii_lowercase()
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self { color, kind })
    }

    pub fn point(&self) -> f64 {
        self.kind.point()
    }
}

/// A movement vector as (column delta, row delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    NorthNorthEast,
    NorthNorthWest,
    SouthSouthEast,
    SouthSouthWest,
    EastEastNorth,
    EastEastSouth,
    WestWestNorth,
    WestWestSouth,
}

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] =
    [Direction::North, Direction::South, Direction::East, Direction::West];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

pub const KNIGHT_DIRECTIONS: [Direction; 8] = [
    Direction::NorthNorthEast,
    Direction::NorthNorthWest,
    Direction::SouthSouthEast,
    Direction::SouthSouthWest,
    Direction::EastEastNorth,
    Direction::EastEastSouth,
    Direction::WestWestNorth,
    Direction::WestWestSouth,
];

const ANGLE_EPSILON: f64 = 1e-9;

impl Direction {
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
            Direction::NorthNorthEast => (1, 2),
            Direction::NorthNorthWest => (-1, 2),
            Direction::SouthSouthEast => (1, -2),
            Direction::SouthSouthWest => (-1, -2),
            Direction::EastEastNorth => (2, 1),
            Direction::EastEastSouth => (2, -1),
            Direction::WestWestNorth => (-2, 1),
            Direction::WestWestSouth => (-2, -1),
        }
    }

    pub fn angle(&self) -> f64 {
        let (d_col, d_row) = self.delta();
        (d_row as f64).atan2(d_col as f64)
    }

    pub fn is_diagonal(&self) -> bool {
        let (d_col, d_row) = self.delta();
        d_col.abs() == 1 && d_row.abs() == 1
    }

    /// Picks the direction among `candidates` whose angle matches `angle`.
    pub fn with_angle(angle: f64, candidates: impl IntoIterator<Item = Direction>) -> Option<Direction> {
        candidates
            .into_iter()
            .find(|direction| (direction.angle() - angle).abs() < ANGLE_EPSILON)
    }
}
