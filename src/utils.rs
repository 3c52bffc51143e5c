use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::core::definitions::{Cell, Position};
use crate::core::engine::Piece;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected 4 numbers (x1 y1 x2 y2), got {0}")]
    WrongFieldCount(usize),
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position, Position),
    Hint(Position),
    Quit,
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            return Ok(Command::Quit);
        }
        if let Some(rest) = line.strip_prefix("hint") {
            let numbers = parse_numbers(rest, 2)?;
            return Ok(Command::Hint((numbers[0], numbers[1])));
        }
        let (from, to) = parse_move(line)?;
        Ok(Command::Move(from, to))
    }
}

fn parse_numbers(text: &str, expected: usize) -> Result<Vec<i32>, ParseMoveError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(ParseMoveError::WrongFieldCount(fields.len()));
    }
    fields
        .into_iter()
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|_| ParseMoveError::NotANumber(field.to_string()))
        })
        .collect()
}

/// Read `x1 y1 x2 y2` as a source and a destination cell. Range is not checked here.
pub fn parse_move(line: &str) -> Result<(Position, Position), ParseMoveError> {
    let numbers = parse_numbers(line, 4)?;
    Ok(((numbers[0], numbers[1]), (numbers[2], numbers[3])))
}

pub fn cell_symbol(cell: &Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Figure(figure) => Piece::new(figure.kind, figure.color).symbol(),
    }
}

/// Text picture of a snapshot, one line per row.
pub fn render(snapshot: &[Vec<Cell>]) -> String {
    snapshot
        .iter()
        .map(|row| {
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| cell_symbol(cell).to_string())
                .collect();
            symbols.join(" ") + "\n"
        })
        .collect()
}

pub fn prompt(player: impl Display) -> String {
    format!("{player}'s turn. Enter move (x1 y1 x2 y2): ")
}
