use chess_referee::console::{run_console, ConsoleOptions};
use chess_referee::game::ChessGame;
use std::io::{stdin, stdout};

fn main() {
    let mut game = ChessGame::new();
    if let Err(e) = run_console(stdin().lock(), &mut stdout(), &mut game, &ConsoleOptions::default()) {
        eprintln!("console stopped: {}", e);
    }
}
