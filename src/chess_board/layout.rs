use super::{ChessBoard, ChessField, Color, Piece, PieceType, Square};
use crate::error::ChessError;
use std::collections::HashMap;

pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Produces the pieces a new board starts with. Squares left out start empty.
pub trait LayoutProvider {
    fn layout(&self) -> HashMap<ChessField, Piece>;
}

impl<F> LayoutProvider for F
where
    F: Fn() -> HashMap<ChessField, Piece>,
{
    fn layout(&self) -> HashMap<ChessField, Piece> {
        self()
    }
}

/// The regular opening position.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLayout;

impl LayoutProvider for StandardLayout {
    fn layout(&self) -> HashMap<ChessField, Piece> {
        let mut pieces = HashMap::with_capacity(32);
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            pieces.insert(ChessField::new(0, col), Piece::new(Color::White, *kind));
            pieces.insert(ChessField::new(1, col), Piece::new(Color::White, PieceType::Pawn));
            pieces.insert(ChessField::new(6, col), Piece::new(Color::Black, PieceType::Pawn));
            pieces.insert(ChessField::new(7, col), Piece::new(Color::Black, *kind));
        }
        pieces
    }
}

/// A position restored from FEN-style piece placement text, e.g. `4k3/8/8/8/8/8/8/4K3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementLayout {
    pieces: HashMap<ChessField, Piece>,
}

impl PlacementLayout {
    pub fn parse(placement: &str) -> Result<Self, ChessError> {
        parse_placement(placement).map(|pieces| Self { pieces })
    }
}

impl LayoutProvider for PlacementLayout {
    fn layout(&self) -> HashMap<ChessField, Piece> {
        self.pieces.clone()
    }
}

/// Parses placement text; ranks run from 8 down to 1, digits count empty squares.
pub fn parse_placement(placement: &str) -> Result<HashMap<ChessField, Piece>, ChessError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidLayout(format!(
            "expected 8 ranks but found {}",
            rows.len()
        )));
    }

    let mut pieces = HashMap::new();
    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0usize;

        for c in row.chars() {
            if col_index > 7 {
                return Err(ChessError::InvalidLayout(format!(
                    "too many squares in rank {}",
                    8 - row_index
                )));
            }
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(ChessError::InvalidLayout("empty run of zero squares".to_string()));
                }
                col_index += skip as usize;
            } else {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| ChessError::InvalidLayout(format!("invalid piece character: {}", c)))?;
                pieces.insert(ChessField::new(7 - row_index as u8, col_index as u8), piece);
                col_index += 1;
            }
        }
        if col_index != 8 {
            return Err(ChessError::InvalidLayout(format!(
                "rank {} covers {} squares instead of 8",
                8 - row_index,
                col_index
            )));
        }
    }
    Ok(pieces)
}

pub fn to_placement(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0;

        for file in 0..8 {
            match board.squares[rank][file] {
                Square::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 0 {
            board_representation.push('/');
        }
    }
    board_representation
}
