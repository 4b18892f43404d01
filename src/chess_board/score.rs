use super::{ChessBoard, Color, PieceType};

/// Material of `color`. Pawns sharing a file with another pawn of the same color count half.
pub fn score(board: &ChessBoard, color: Color) -> f64 {
    let mut pawns_per_file = [0u8; 8];
    let mut total = 0.0;

    for (field, piece) in board.pieces_with_coordinates().filter(|(_, p)| p.color == color) {
        if piece.kind == PieceType::Pawn {
            pawns_per_file[field.col as usize] += 1;
        } else {
            total += piece.point();
        }
    }

    for pawns in pawns_per_file {
        let value = if pawns > 1 { PieceType::Pawn.point() / 2.0 } else { PieceType::Pawn.point() };
        total += pawns as f64 * value;
    }
    total
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBoard {
    pub white: f64,
    pub black: f64,
}

impl ScoreBoard {
    pub fn of(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

pub fn scores(board: &ChessBoard) -> ScoreBoard {
    ScoreBoard {
        white: score(board, Color::White),
        black: score(board, Color::Black),
    }
}
