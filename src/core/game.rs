use log::{debug, info};

use crate::core::definitions::{Cell, GameState, MoveError, Position, Rules};
use crate::core::engine::{Board, Color};

/// A board plus whose turn it is.
///
/// The turn only passes to the other side after a move went through. A game never ends on its
/// own since there is no mate detection; `quit` is the only way out.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    finished: bool,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::White)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            current_player: player,
            finished: false,
        }
    }

    pub fn with_rules(rules: Rules) -> Game {
        Game::new(Board::with_rules(rules))
    }

    pub fn execute(&mut self, from: Position, to: Position) -> Result<GameState, MoveError> {
        if self.finished {
            return Err(MoveError::GameFinished);
        }
        let captured = self.board.move_piece(from, to, self.current_player)?;
        if let Some(piece) = captured {
            info!("{} took {:?} on {:?}", self.current_player, piece.kind, to);
        }
        self.current_player = self.current_player.opposite();
        debug!("Now it's {}'s turn", self.current_player);
        Ok(self.state())
    }

    pub fn attempt_move(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.execute((x1, y1), (x2, y2)).is_ok()
    }

    pub fn quit(&mut self) -> GameState {
        if !self.finished {
            info!("Game stopped on {}'s turn", self.current_player);
        }
        self.finished = true;
        GameState::Finished
    }

    pub fn state(&self) -> GameState {
        if self.finished {
            GameState::Finished
        } else {
            GameState::PlayerMove(self.current_player)
        }
    }

    /// Where the piece on `pos` may go, if it belongs to the player to move and has any move.
    pub fn possible_moves(&self, pos: Position) -> Option<Vec<Position>> {
        let piece = self.board.get(pos)?;
        if self.finished || piece.color != self.current_player {
            return None;
        }
        let moves = self.board.destinations(pos, self.current_player);
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    pub fn current_board(&self) -> Vec<Vec<Cell>> {
        self.board.snapshot()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn game_ended(&self) -> bool {
        self.finished
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default())
    }
}
