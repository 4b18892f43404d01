use super::Command;
use crate::chess_board::{ChessField, Color, Piece, ScoreBoard};
use crate::error::ChessError;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Running record of one game session, kept in memory until saved.
#[derive(Debug, Clone)]
pub struct GameLog {
    pub log_buffer: String,
    game_start_time: DateTime<Local>,
    move_count: u32,
}

impl GameLog {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(16 * 1024),
            game_start_time: Local::now(),
            move_count: 0,
        };

        logger.log("=== Chess game log started ===");
        let date = logger.game_start_time.format("%m/%d/%Y %H:%M:%S").to_string();
        logger.log(&format!("Date: {}", date));
        logger
    }

    pub fn log(&mut self, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.log_buffer.push_str(&format!("[{}] {}\n", timestamp, message));
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.log_buffer.lines()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log_move(&mut self, color: Color, from: ChessField, to: ChessField, captured: Option<Piece>) {
        self.move_count += 1;
        let capture = match captured {
            Some(piece) => format!(" captures {}", piece.to_char()),
            None => String::new(),
        };
        self.log(&format!("{}. {} {}-{}{}", self.move_count, color, from, to, capture));
    }

    pub fn log_rejected(&mut self, command: &Command, error: &ChessError) {
        self.log(&format!("rejected {:?}: {}", command, error));
    }

    pub fn log_status(&mut self, scores: &ScoreBoard) {
        self.log(&format!("status WHITE {} BLACK {}", scores.white, scores.black));
    }

    pub fn log_game_over(&mut self, winner: Option<Color>) {
        match winner {
            Some(color) => self.log(&format!("game over, {} wins after {} moves", color, self.move_count)),
            None => self.log(&format!("game ended after {} moves", self.move_count)),
        }
    }

    /// Writes the log to `<dir>/<start time>.txt` and returns the file path.
    /// An existing file is never overwritten; a counter is appended instead.
    pub fn save_to_file(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let stem = self.game_start_time.format("%m_%d_%Y_%H_%M_%S_%3f").to_string();
        let mut filename = dir.join(format!("{}.txt", stem));
        let mut copy = 1;
        while filename.exists() {
            filename = dir.join(format!("{}_{}.txt", stem, copy));
            copy += 1;
        }
        let mut file = File::create(&filename)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(filename)
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}
