use super::{ChessGame, Command};
use crate::chess_board::{ChessField, Color, Piece, ScoreBoard};
use crate::error::ChessError;
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayedMove {
    pub ply: usize,
    pub color: Color,
    pub from: ChessField,
    pub to: ChessField,
    pub captured: Option<Piece>,
    pub scores: ScoreBoard,
}

/// Plays up to `plies` random legal moves from the opening position.
///
/// The same seed always produces the same game.
pub fn random_game(seed: u64, plies: usize) -> Result<(ChessGame, Vec<PlayedMove>), ChessError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut game = ChessGame::new();
    let mut played = Vec::with_capacity(plies);

    for ply in 1..=plies {
        let Some(color) = game.state().active_color() else {
            break;
        };
        let moves = game.board().legal_moves(color);
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        let report = game.play(&Command::move_between(from.as_algebraic(), to.as_algebraic()))?;
        played.push(PlayedMove {
            ply,
            color,
            from,
            to,
            captured: report.captured,
            scores: game.scores(),
        });
    }
    Ok((game, played))
}
