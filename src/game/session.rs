use super::{Command, GameLog, GameState};
use crate::chess_board::{scores, ChessBoard, Color, LayoutProvider, Piece, ScoreBoard, StandardLayout};
use crate::error::ChessError;

/// Outcome of a command accepted by [`ChessGame::play`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub state: GameState,
    pub captured: Option<Piece>,
    pub scores: Option<ScoreBoard>,
    pub winner: Option<Color>,
}

/// One running game: the board, whose turn it is and the game log.
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: ChessBoard,
    state: GameState,
    log: GameLog,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::resume(&StandardLayout, GameState::WhiteToMove)
    }

    /// Continues a stored game. A board that is already decided starts out finished.
    pub fn resume(provider: &impl LayoutProvider, state: GameState) -> Self {
        let board = ChessBoard::new(provider);
        let state = if board.is_end() { GameState::Finished } else { state };
        let mut log = GameLog::new();
        log.log(&format!("game loaded: {} {}", board.to_placement(), state));
        Self { board, state, log }
    }

    /// Throws the current game away and sets up the opening position with a fresh log.
    pub fn restart(&mut self) {
        self.board = ChessBoard::default();
        self.state = GameState::WhiteToMove;
        self.log = GameLog::new();
        self.log.log("restarted with the standard layout");
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn scores(&self) -> ScoreBoard {
        scores(&self.board)
    }

    /// The side whose king is still standing, once only one is left.
    pub fn winner(&self) -> Option<Color> {
        if self.board.is_end() {
            Some(self.board.winner())
        } else {
            None
        }
    }

    pub fn play(&mut self, command: &Command) -> Result<Report, ChessError> {
        let target = match command.fields() {
            Some(Ok((_, to))) => self.board.select(to).piece(),
            _ => None,
        };

        let next = match self.state.advance(&mut self.board, command) {
            Ok(next) => next,
            Err(error) => {
                self.log.log_rejected(command, &error);
                return Err(error);
            }
        };

        let mut report = Report {
            state: next,
            captured: None,
            scores: None,
            winner: None,
        };
        match command {
            Command::Move { .. } => {
                if let (Some(Ok((from, to))), Some(color)) = (command.fields(), self.state.active_color()) {
                    self.log.log_move(color, from, to, target);
                }
                report.captured = target;
            }
            Command::Status => {
                let scores = self.scores();
                self.log.log_status(&scores);
                report.scores = Some(scores);
            }
            Command::Start => self.log.log("start"),
            Command::End => {}
        }

        if next.is_finished() {
            report.winner = self.winner();
            if !self.state.is_finished() {
                self.log.log_game_over(report.winner);
            }
        }
        self.state = next;
        Ok(report)
    }
}
