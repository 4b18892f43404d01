use crate::chess_board::{Color, ScoreBoard};
use crate::game::{ChessGame, Command, Report};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const USAGE: &str = "commands: start | move <from> <to> | status | end | quit";

#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    /// Print the placement and the state name after every command.
    pub debug: bool,
    /// Directory the game log is written to when the console stops.
    pub log_dir: Option<PathBuf>,
}

#[derive(Tabled)]
struct ScoreRow {
    color: Color,
    score: f64,
}

pub fn render_scores(scores: &ScoreBoard) -> String {
    let rows = [Color::White, Color::Black].map(|color| ScoreRow {
        color,
        score: scores.of(color),
    });
    Table::new(rows).with(Style::modern()).to_string()
}

/// Reads commands line by line and plays them on `game` until `quit` or end of input.
///
/// A game that ends is saved to `log_dir` (when set) and replaced by a new standard game.
pub fn run_console<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    game: &mut ChessGame,
    options: &ConsoleOptions,
) -> io::Result<()> {
    writeln!(output, "{}", USAGE)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                writeln!(output, "{}", USAGE)?;
                continue;
            }
        };

        match game.play(&command) {
            Ok(report) => print_report(output, game, &command, &report)?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        if options.debug {
            writeln!(output, "[{}] {}", game.state(), game.board().to_placement())?;
        }

        if game.is_finished() {
            save_log(output, game, options)?;
            game.restart();
            writeln!(output, "new game, {} to move", Color::White)?;
        }
        output.flush()?;
    }

    if game.log().move_count() > 0 {
        save_log(output, game, options)?;
    }
    Ok(())
}

fn save_log<W: Write>(output: &mut W, game: &ChessGame, options: &ConsoleOptions) -> io::Result<()> {
    if let Some(dir) = &options.log_dir {
        let path = game.log().save_to_file(dir)?;
        writeln!(output, "game log saved to {}", path.display())?;
    }
    Ok(())
}

fn print_report<W: Write>(output: &mut W, game: &ChessGame, command: &Command, report: &Report) -> io::Result<()> {
    match command {
        Command::Start | Command::Move { .. } => write!(output, "{}", game.board().render_to_string())?,
        Command::Status => {
            write!(output, "{}", game.board().render_to_string())?;
            writeln!(output, "{}", render_scores(&game.scores()))?;
        }
        Command::End => writeln!(output, "game ended")?,
    }
    if let Some(piece) = report.captured {
        writeln!(output, "captured {}", piece.to_char())?;
    }
    if let Some(winner) = report.winner {
        writeln!(output, "{} wins!", winner)?;
    } else if let Some(color) = report.state.active_color() {
        writeln!(output, "{} to move", color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::{ChessField, PlacementLayout};
    use crate::game::GameState;

    fn run(script: &str, game: &mut ChessGame) -> String {
        let mut output = Vec::new();
        run_console(script.as_bytes(), &mut output, game, &ConsoleOptions::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_console_session() {
        let mut game = ChessGame::new();
        let output = run("start\nmove e2 e4\nmove d2 d4\nstatus\nquit\nmove e7 e5\n", &mut game);
        assert!(output.contains("BLACK to move"));
        assert!(output.contains("error: it is BLACK's turn"));
        assert!(output.contains("38"));
        assert_eq!(game.state(), GameState::BlackToMove);
    }

    #[test]
    fn test_console_reports_bad_input() {
        let mut game = ChessGame::new();
        let output = run("jump\nmove e2\nmove e2 e9\n", &mut game);
        assert!(output.contains("error: invalid command: jump"));
        assert!(output.contains("error: invalid square"));
        assert_eq!(game.state(), GameState::WhiteToMove);
    }

    #[test]
    fn test_console_restarts_when_king_falls() {
        let layout = PlacementLayout::parse("4k3/4Q3/8/8/8/8/8/4K3").unwrap();
        let mut game = ChessGame::resume(&layout, GameState::WhiteToMove);
        let output = run("move e7 e8\nmove b1 c3\n", &mut game);
        assert!(output.contains("captured k"));
        assert!(output.contains("WHITE wins!"));
        assert!(output.contains("new game, WHITE to move"));
        assert!(!output.contains("error"));
        assert_eq!(game.state(), GameState::BlackToMove);
        assert_eq!(game.log().move_count(), 1);
    }

    #[test]
    fn test_console_end_starts_a_new_game() {
        let mut game = ChessGame::new();
        let output = run("move e2 e4\nend\nmove e2 e4\n", &mut game);
        assert!(output.contains("game ended"));
        assert!(!output.contains("error"));
        assert_eq!(game.state(), GameState::BlackToMove);
        assert!(game.board().select(ChessField::from_algebraic("e4").unwrap()).is_color(Color::White));
    }

    #[test]
    fn test_console_saves_each_finished_game() {
        let dir = std::env::temp_dir().join(format!("chess-referee-console-{}", std::process::id()));
        let options = ConsoleOptions {
            debug: false,
            log_dir: Some(dir.clone()),
        };
        let mut game = ChessGame::new();
        let mut output = Vec::new();
        run_console("move e2 e4\nend\nmove d2 d4\n".as_bytes(), &mut output, &mut game, &options).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("game log saved to").count(), 2);
        let logs = std::fs::read_dir(&dir).unwrap().count();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(logs, 2);
    }

    #[test]
    fn test_console_reports_read_errors() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
        }
        let mut game = ChessGame::new();
        let mut output = Vec::new();
        let result = run_console(io::BufReader::new(Broken), &mut output, &mut game, &ConsoleOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_render_scores() {
        let table = render_scores(&ScoreBoard { white: 9.0, black: 3.0 });
        assert!(table.contains("WHITE"));
        assert!(table.contains("BLACK"));
        assert!(table.contains('9'));
    }
}
