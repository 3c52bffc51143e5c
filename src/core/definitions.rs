use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::engine::{Color, PieceType};

/// A `(row, col)` pair. Signed so that callers can hand in anything they read.
pub type Position = (i32, i32);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub kind: PieceType,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/// Why a move was refused. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("source or destination is outside the board")]
    OutOfBounds,
    #[error("there is no piece on the source cell")]
    EmptySource,
    #[error("the piece on the source cell belongs to the opponent")]
    NotYourPiece,
    #[error("the piece can't move like that")]
    IllegalMove,
    #[error("another piece stands in the way")]
    Blocked,
    #[error("the destination is occupied by a piece of the same color")]
    FriendlyFire,
    #[error("the game is already finished")]
    GameFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    PlayerMove(Color),
    Finished,
}

/// Knobs for how strictly moves are judged.
///
/// The default is lenient: sliding pieces and the pawn double step only look at their start
/// and end cells, so jumping over other pieces is allowed. `check_obstruction` makes every
/// cell in between required to be empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub check_obstruction: bool,
}

impl Rules {
    pub fn strict() -> Self {
        Rules {
            check_obstruction: true,
        }
    }
}
