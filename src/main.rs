use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_rules::{
    utils::{prompt, render, Command},
    Game, Rules,
};
use clap::Parser;
use log::{debug, info, trace};

/// Two-player chess in the terminal. Cells are given as `row col`, row 0 is Black's side.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sliding pieces and pawn double steps may not jump over other pieces
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args = Args::parse();
    let rules = Rules {
        check_obstruction: args.strict,
    };
    info!("Starting game with {rules:?}");

    let mut game = Game::with_rules(rules);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    while !game.game_ended() {
        print!("{}", render(&game.current_board()));
        print!("{}", prompt(game.current_player()));
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            game.quit();
            break;
        };
        let line = line.context("Failed to read move")?;
        match line.parse::<Command>() {
            Ok(Command::Move(from, to)) => {
                if let Err(err) = game.execute(from, to) {
                    debug!("Move {from:?} -> {to:?} refused: {err}");
                    println!("Invalid move. Try again.");
                }
            }
            Ok(Command::Hint(pos)) => match game.possible_moves(pos) {
                Some(moves) => println!("Possible moves: {moves:?}"),
                None => println!("No moves from {pos:?}."),
            },
            Ok(Command::Quit) => {
                game.quit();
            }
            Err(err) => {
                trace!("Bad input {line:?}: {err}");
                println!("Invalid move. Try again.");
            }
        }
    }
    info!("Bye!");
    Ok(())
}
