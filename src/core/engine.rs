use std::fmt::{self, Display};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Figure, MoveError, Position, Rules};
use crate::core::utils::{
    all_cells, between, deltas, distance, is_in_diagonal_line, is_in_straight_line,
    is_valid_coord,
};
use crate::utils::render;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn from_turn(is_white_turn: bool) -> Color {
        if is_white_turn {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /** Row step of a pawn push: White climbs towards row 0, Black descends towards row 7. */
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /** Row the pawns of this color start on. */
    pub fn pawn_rank(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /** Row the other pieces of this color start on. */
    pub fn back_rank(self) -> i32 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /** Back rank layout, column 0 to 7. */
    pub const BACK_RANK: [PieceType; 8] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];

    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Piece {
        Piece { kind, color }
    }

    /** Uppercase for White, lowercase for Black. */
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    pub fn is_valid_move(&self, from: Position, to: Position, board: &Board) -> bool {
        self.check_move(from, to, board).is_ok()
    }

    /**
     * Judge the shape of a move for this kind of piece.
     *
     * Neither the turn nor a friendly piece on the destination is looked at here, that is the
     * board's business.
     */
    pub fn check_move(&self, from: Position, to: Position, board: &Board) -> Result<(), MoveError> {
        if !is_valid_coord(from) || !is_valid_coord(to) {
            return Err(MoveError::OutOfBounds);
        }
        if !self.reaches(from, to, board) {
            return Err(MoveError::IllegalMove);
        }
        if board.rules().check_obstruction && !self.path_is_clear(from, to, board) {
            return Err(MoveError::Blocked);
        }
        Ok(())
    }

    fn reaches(&self, from: Position, to: Position, board: &Board) -> bool {
        let (rows, cols) = deltas(from, to);
        match self.kind {
            PieceType::King => distance(from, to) <= 1,
            PieceType::Queen => is_in_straight_line(from, to) || is_in_diagonal_line(from, to),
            PieceType::Rook => is_in_straight_line(from, to),
            PieceType::Bishop => is_in_diagonal_line(from, to),
            PieceType::Knight => matches!((rows, cols), (2, 1) | (1, 2)),
            PieceType::Pawn => self.pawn_reaches(from, to, board),
        }
    }

    fn pawn_reaches(&self, from: Position, to: Position, board: &Board) -> bool {
        let step = self.color.pawn_direction();
        let target = board.get(to);
        if from.0 + step == to.0 {
            if from.1 == to.1 {
                return target.is_none();
            }
            if from.1.abs_diff(to.1) == 1 {
                return target.is_some_and(|piece| piece.color != self.color);
            }
            return false;
        }
        from.0 == self.color.pawn_rank()
            && from.0 + 2 * step == to.0
            && from.1 == to.1
            && target.is_none()
    }

    // Only called on moves that already passed `reaches`, so every mover is on a line here.
    fn path_is_clear(&self, from: Position, to: Position, board: &Board) -> bool {
        match self.kind {
            PieceType::King | PieceType::Knight => true,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Pawn => {
                between(from, to).all(|pos| board.get(pos).is_none())
            }
        }
    }
}

/** 8x8 grid, row 0 is Black's back rank. */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    rules: Rules,
}

impl Board {
    pub fn new() -> Board {
        Board::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Board {
        let mut board = Board::empty(rules);
        board.initialize();
        board
    }

    /** A board without any piece on it, for building positions by hand. */
    pub fn empty(rules: Rules) -> Board {
        Board {
            cells: [[None; 8]; 8],
            rules,
        }
    }

    /** Reset to the standard starting position. */
    pub fn initialize(&mut self) {
        self.cells = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            for (col, kind) in PieceType::BACK_RANK.into_iter().enumerate() {
                self.cells[color.back_rank() as usize][col] = Some(Piece::new(kind, color));
                self.cells[color.pawn_rank() as usize][col] =
                    Some(Piece::new(PieceType::Pawn, color));
            }
        }
        trace!("Board set up with {} pieces", self.iter_pieces().count());
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        if is_valid_coord(pos) {
            self.cells[pos.0 as usize][pos.1 as usize]
        } else {
            None
        }
    }

    /** Put a piece on a cell, handing back whatever stood there. */
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<Option<Piece>, MoveError> {
        if !is_valid_coord(pos) {
            return Err(MoveError::OutOfBounds);
        }
        Ok(self.cells[pos.0 as usize][pos.1 as usize].replace(piece))
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        if is_valid_coord(pos) {
            self.cells[pos.0 as usize][pos.1 as usize].take()
        } else {
            None
        }
    }

    /** Every check of `move_piece`, without touching the board. */
    pub fn validate(&self, from: Position, to: Position, mover: Color) -> Result<Piece, MoveError> {
        if !is_valid_coord(from) || !is_valid_coord(to) {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self.get(from).ok_or(MoveError::EmptySource)?;
        if piece.color != mover {
            return Err(MoveError::NotYourPiece);
        }
        piece.check_move(from, to, self)?;
        if self.get(to).is_some_and(|target| target.color == mover) {
            return Err(MoveError::FriendlyFire);
        }
        Ok(piece)
    }

    /**
     * Move the piece on `from` to `to` for the `mover` side.
     *
     * On success the captured piece, if any, is returned. On failure nothing changes.
     */
    pub fn move_piece(
        &mut self,
        from: Position,
        to: Position,
        mover: Color,
    ) -> Result<Option<Piece>, MoveError> {
        trace!("{mover} tries {from:?} -> {to:?}");
        let piece = self.validate(from, to, mover).map_err(|err| {
            debug!("Rejected {from:?} -> {to:?} for {mover}: {err}");
            err
        })?;
        let captured = self.cells[to.0 as usize][to.1 as usize].replace(piece);
        self.cells[from.0 as usize][from.1 as usize] = None;
        if let Some(victim) = captured {
            debug!("{:?} on {to:?} captured by {:?}", victim, piece);
        }
        Ok(captured)
    }

    pub fn attempt_move(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        is_white_turn: bool,
    ) -> bool {
        self.move_piece((x1, y1), (x2, y2), Color::from_turn(is_white_turn))
            .is_ok()
    }

    /** All cells the piece on `from` may go to when `mover` is to play. */
    pub fn destinations(&self, from: Position, mover: Color) -> Vec<Position> {
        all_cells()
            .filter(|to| self.validate(from, *to, mover).is_ok())
            .collect()
    }

    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(piece) => Cell::Figure(Figure {
                            kind: piece.kind,
                            color: piece.color,
                        }),
                        None => Cell::Empty,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        all_cells().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn count(&self, kind: PieceType, color: Color) -> usize {
        self.iter_pieces()
            .filter(|(_, piece)| piece.kind == kind && piece.color == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.snapshot()))
    }
}
