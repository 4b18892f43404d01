use super::model::Direction;
use crate::error::ChessError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A square of the 8x8 grid. `row` and `col` are zero-based, `a1` is (0, 0).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

lazy_static! {
    /// Every square of the board, indexed by `row * 8 + col`.
    pub static ref ALL_FIELDS: Vec<ChessField> = (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| ChessField { row, col }))
        .collect();

    static ref FIELDS_BY_NAME: HashMap<String, ChessField> = ALL_FIELDS
        .iter()
        .map(|field| (to_algebraic_square(field.row, field.col), *field))
        .collect();
}

impl ChessField {
    /// Returns the square at (`row`, `col`). Panics when off the board.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square ({}, {}) is off the board", row, col);
        ALL_FIELDS[Self::index_of(row, col)]
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(ALL_FIELDS[Self::index_of(row as u8, col as u8)])
        } else {
            None
        }
    }

    /// Looks up a square by its two character name such as `e4` or `E4`.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, ChessError> {
        if algebraic.is_empty() {
            return Err(ChessError::InvalidCoordinate("empty square name".to_string()));
        }
        if algebraic.chars().count() != 2 {
            return Err(ChessError::InvalidCoordinate(format!(
                "square name must have two characters: {:?}",
                algebraic
            )));
        }
        FIELDS_BY_NAME
            .get(&algebraic.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| ChessError::InvalidCoordinate(format!("no such square: {}", algebraic)))
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }

    pub fn index(&self) -> usize {
        Self::index_of(self.row, self.col)
    }

    fn index_of(row: u8, col: u8) -> usize {
        row as usize * BOARD_SIZE as usize + col as usize
    }

    /// One step along `direction`, or `None` when that leaves the board.
    pub fn translate(&self, direction: Direction) -> Option<Self> {
        let (d_col, d_row) = direction.delta();
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// `atan2` of the row delta over the column delta from `self` to `other`.
    pub fn angle_between(&self, other: &ChessField) -> f64 {
        let d_row = other.row as f64 - self.row as f64;
        let d_col = other.col as f64 - self.col as f64;
        d_row.atan2(d_col)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = (row + 1).to_string();
    format!("{}{}", file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convertion_method() {
        assert_eq!(ChessField::from_algebraic("b2").unwrap(), ChessField::new(1, 1));
        assert_eq!(ChessField::from_algebraic("b2").unwrap().as_algebraic(), "b2");
        assert_eq!(ChessField::from_algebraic("H8").unwrap(), ChessField::new(7, 7));
        assert_eq!(ChessField::from_algebraic("H8").unwrap().as_algebraic(), "h8");
    }

    #[test]
    fn test_every_square_is_interned() {
        assert_eq!(ALL_FIELDS.len(), 64);
        for field in ALL_FIELDS.iter() {
            let name = field.as_algebraic();
            assert_eq!(ChessField::from_algebraic(&name).unwrap(), *field);
            assert_eq!(ChessField::from_algebraic(&name).unwrap(), ChessField::from_algebraic(&name).unwrap());
            assert_eq!(ALL_FIELDS[field.index()], *field);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "  ", "a", "a10", "i1", "a0", "a9", "11", "aa", "é1", " a1", "a1 ", "\ta1"] {
            assert!(
                matches!(ChessField::from_algebraic(name), Err(ChessError::InvalidCoordinate(_))),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_translate() {
        let d4 = ChessField::from_algebraic("d4").unwrap();
        assert_eq!(d4.translate(Direction::North), Some(ChessField::from_algebraic("d5").unwrap()));
        assert_eq!(d4.translate(Direction::SouthWest), Some(ChessField::from_algebraic("c3").unwrap()));
        assert_eq!(d4.translate(Direction::EastEastNorth), Some(ChessField::from_algebraic("f5").unwrap()));

        let a1 = ChessField::from_algebraic("a1").unwrap();
        assert_eq!(a1.translate(Direction::South), None);
        assert_eq!(a1.translate(Direction::West), None);
        assert_eq!(a1.translate(Direction::WestWestNorth), None);
        let h8 = ChessField::from_algebraic("h8").unwrap();
        assert_eq!(h8.translate(Direction::NorthEast), None);
    }

    #[test]
    fn test_angle_between() {
        let d4 = ChessField::from_algebraic("d4").unwrap();
        let d7 = ChessField::from_algebraic("d7").unwrap();
        let g7 = ChessField::from_algebraic("g7").unwrap();
        let a4 = ChessField::from_algebraic("a4").unwrap();
        assert!((d4.angle_between(&d7) - Direction::North.angle()).abs() < 1e-9);
        assert!((d4.angle_between(&g7) - Direction::NorthEast.angle()).abs() < 1e-9);
        assert!((d4.angle_between(&a4) - Direction::West.angle()).abs() < 1e-9);
    }
}
