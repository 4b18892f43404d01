use crate::chess_board::{ChessField, Color};
use thiserror::Error;

/// Reasons a command or a move is rejected. A rejected move leaves board and turn untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidCoordinate(String),

    #[error("there is no piece on {0}")]
    EmptySource(ChessField),

    #[error("the piece on {from} cannot reach {to}")]
    IllegalDestination { from: ChessField, to: ChessField },

    #[error("the path from {from} to {to} is blocked by {blocker}")]
    PathBlocked { from: ChessField, to: ChessField, blocker: ChessField },

    #[error("{to} is occupied by a piece of the same color")]
    FriendlyCapture { to: ChessField },

    #[error("a pawn cannot move from {from} to {to}")]
    InvalidPawnMove { from: ChessField, to: ChessField },

    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Color },

    #[error("the game is already finished")]
    GameFinished,

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid game state name: {0}")]
    InvalidState(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
