use super::Command;
use crate::chess_board::{ChessBoard, ChessField, Color, Square};
use crate::error::ChessError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    WhiteToMove,
    BlackToMove,
    Finished,
}

impl GameState {
    pub fn to_move(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteToMove,
            Color::Black => GameState::BlackToMove,
        }
    }

    pub fn active_color(&self) -> Option<Color> {
        match self {
            GameState::WhiteToMove => Some(Color::White),
            GameState::BlackToMove => Some(Color::Black),
            GameState::Finished => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self == GameState::Finished
    }

    /// Applies `command` and returns the next state.
    ///
    /// On error nothing changed: the board is untouched and `self` is still the current state.
    pub fn advance(self, board: &mut ChessBoard, command: &Command) -> Result<GameState, ChessError> {
        match (self, command) {
            (_, Command::End) => Ok(GameState::Finished),
            (state, Command::Start | Command::Status) => Ok(state),
            (GameState::Finished, Command::Move { .. }) => Err(ChessError::GameFinished),
            (state, Command::Move { from, to }) => {
                let from = ChessField::from_algebraic(from)?;
                let to = ChessField::from_algebraic(to)?;
                state.play_move(board, from, to)
            }
        }
    }

    fn play_move(self, board: &mut ChessBoard, from: ChessField, to: ChessField) -> Result<GameState, ChessError> {
        let expected = self.active_color().ok_or(ChessError::GameFinished)?;
        if let Square::Occupied(piece) = board.select(from) {
            if piece.color != expected {
                return Err(ChessError::WrongTurn { expected });
            }
        }
        board.move_piece(from, to)?;
        if board.is_end() {
            Ok(GameState::Finished)
        } else {
            Ok(GameState::to_move(expected.opposite()))
        }
    }

    /// Name under which the state is stored between sessions.
    pub fn name(&self) -> &'static str {
        match self {
            GameState::WhiteToMove => "whiterunning",
            GameState::BlackToMove => "blackrunning",
            GameState::Finished => "finished",
        }
    }
}

impl FromStr for GameState {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whiterunning" | "white" => Ok(GameState::WhiteToMove),
            "blackrunning" | "black" => Ok(GameState::BlackToMove),
            "finished" => Ok(GameState::Finished),
            other => Err(ChessError::InvalidState(other.to_string())),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
