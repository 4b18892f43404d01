pub mod chess_board;
pub mod console;
pub mod error;
pub mod game;

pub use chess_board::{ChessBoard, ChessField, Color, Piece, PieceType, Square};
pub use error::ChessError;
pub use game::{ChessGame, Command, GameState};
