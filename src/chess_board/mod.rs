pub mod coordinate;
pub mod layout;
pub mod model;
pub mod rays;
pub mod score;
pub use coordinate::{ChessField, ALL_FIELDS};
pub use layout::{LayoutProvider, PlacementLayout, StandardLayout, INITIAL_PLACEMENT};
pub use model::{Color, Direction, Piece, PieceType, Square};
pub use score::{score, scores, ScoreBoard};

mod chess_board;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;
