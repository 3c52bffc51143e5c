pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::definitions::{Cell, Figure, GameState, MoveError, Position, Rules};
pub use crate::core::engine::{Board, Color, Piece, PieceType};
pub use crate::core::game::Game;
