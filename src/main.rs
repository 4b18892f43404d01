use chess_referee::chess_board::{scores, ChessBoard, PlacementLayout, StandardLayout, INITIAL_PLACEMENT};
use chess_referee::console::{render_scores, run_console, ConsoleOptions};
use chess_referee::game::{random_game, ChessGame, GameState};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::exit;

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn cli() -> Command {
    command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Print the placement and state after every command"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a game on the console")
                .arg(arg!(-l --layout <PLACEMENT> "Piece placement to resume from"))
                .arg(
                    arg!(-t --turn <STATE> "Stored state: whiterunning, blackrunning or finished")
                        .default_value("whiterunning"),
                )
                .arg(
                    arg!(--"log-dir" <DIR> "Write the game log into this directory")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("score").about("Score both sides of a position").arg(
                arg!(-l --layout <PLACEMENT> "Piece placement")
                    .default_value(INITIAL_PLACEMENT),
            ),
        )
        .subcommand(
            Command::new("autoplay")
                .about("Play a seeded random game")
                .arg(
                    arg!(-s --seed <N> "Random seed")
                        .default_value("42")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(-p --plies <N> "Maximum number of half moves")
                        .default_value("200")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let debug = matches.get_flag("debug");

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(
            arg_matches.get_one::<String>("layout").cloned(),
            arg_matches.get_one::<String>("turn").cloned(),
            arg_matches.get_one::<PathBuf>("log-dir").cloned(),
            debug,
        ),
        Some(("score", arg_matches)) => {
            let layout = arg_matches.get_one::<String>("layout").expect("layout has a default value");
            score(layout)
        }
        Some(("autoplay", arg_matches)) => {
            let seed = arg_matches.get_one::<u64>("seed").copied().expect("seed has a default value");
            let plies = arg_matches.get_one::<usize>("plies").copied().expect("plies has a default value");
            autoplay(seed, plies, debug)
        }
        None => play(None, None, None, debug),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(message) = result {
        eprintln!("{}", message);
        exit(1);
    }
}

fn play(layout: Option<String>, turn: Option<String>, log_dir: Option<PathBuf>, debug: bool) -> Result<(), String> {
    let state = match turn {
        Some(turn) => turn.parse::<GameState>().map_err(|e| e.to_string())?,
        None => GameState::WhiteToMove,
    };
    let mut game = match layout {
        Some(placement) => {
            let layout = PlacementLayout::parse(&placement).map_err(|e| e.to_string())?;
            ChessGame::resume(&layout, state)
        }
        None => ChessGame::resume(&StandardLayout, state),
    };

    let options = ConsoleOptions { debug, log_dir };
    println!("{}", game.board().render_to_string());
    run_console(stdin().lock(), &mut stdout(), &mut game, &options).map_err(|e| e.to_string())
}

fn score(placement: &str) -> Result<(), String> {
    let board = ChessBoard::from_placement(placement).map_err(|e| e.to_string())?;
    println!("{}", board.render_to_string());
    println!("{}", render_scores(&scores(&board)));
    Ok(())
}

#[derive(Tabled)]
struct MoveRow {
    ply: usize,
    color: String,
    from: String,
    to: String,
    captured: String,
    white: f64,
    black: f64,
}

fn autoplay(seed: u64, plies: usize, debug: bool) -> Result<(), String> {
    let (game, played) = random_game(seed, plies).map_err(|e| e.to_string())?;
    let table_rows: Vec<MoveRow> = played
        .iter()
        .map(|mv| MoveRow {
            ply: mv.ply,
            color: mv.color.to_string(),
            from: mv.from.as_algebraic(),
            to: mv.to.as_algebraic(),
            captured: mv.captured.map(|p| p.to_char().to_string()).unwrap_or_default(),
            white: mv.scores.white,
            black: mv.scores.black,
        })
        .collect();
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("{}", game.board().render_to_string());
    if debug {
        for line in game.log().lines() {
            println!("{}", line);
        }
    }
    match game.winner() {
        Some(winner) => println!("{} wins after {} half moves", winner, played.len()),
        None => println!("no winner after {} half moves ({})", played.len(), game.state()),
    }
    Ok(())
}
