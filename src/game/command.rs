use crate::chess_board::ChessField;
use crate::error::ChessError;

/// A request for the turn state machine. Move coordinates stay as text until the move is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Move { from: String, to: String },
    Status,
    End,
}

impl Command {
    pub fn move_between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Command::Move {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parses a console line: `start`, `status`, `end` or `move <from> <to>`.
    pub fn parse(line: &str) -> Result<Self, ChessError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = tokens.first() else {
            return Err(ChessError::InvalidCommand("empty command".to_string()));
        };
        match (keyword.to_ascii_lowercase().as_str(), tokens.len()) {
            ("start", 1) => Ok(Command::Start),
            ("status", 1) => Ok(Command::Status),
            ("end", 1) => Ok(Command::End),
            ("move", 3) => Ok(Command::move_between(
                tokens[1].to_ascii_lowercase(),
                tokens[2].to_ascii_lowercase(),
            )),
            ("move", _) => Err(ChessError::InvalidCommand(
                "move needs a source and a target square, e.g. move b2 b3".to_string(),
            )),
            _ => Err(ChessError::InvalidCommand(line.trim().to_string())),
        }
    }

    /// Source and target squares of a move command.
    pub fn fields(&self) -> Option<Result<(ChessField, ChessField), ChessError>> {
        match self {
            Command::Move { from, to } => Some(
                ChessField::from_algebraic(from)
                    .and_then(|from| ChessField::from_algebraic(to).map(|to| (from, to))),
            ),
            _ => None,
        }
    }
}
