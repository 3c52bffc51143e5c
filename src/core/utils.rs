use crate::core::definitions::Position;

pub const BOARD_SIZE: i32 = 8;

/// Walks the cells strictly between two points of one line, exclusive on both ends.
#[derive(Debug)]
pub struct BetweenIterator {
    current: Position,
    target: Position,
    step: Position,
}

impl Iterator for BetweenIterator {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current = (self.current.0 + self.step.0, self.current.1 + self.step.1);
        if self.current == self.target || !is_valid_coord(self.current) {
            None
        } else {
            Some(self.current)
        }
    }
}

pub fn between(from: Position, to: Position) -> BetweenIterator {
    #[cfg(debug_assertions)]
    if !is_in_diagonal_line(from, to) && !is_in_straight_line(from, to) {
        panic!("Points can't form line to search between them!")
    }
    BetweenIterator {
        current: from,
        target: to,
        step: ((to.0 - from.0).signum(), (to.1 - from.1).signum()),
    }
}

/// Absolute row and column offsets between two cells.
#[inline]
pub fn deltas(from: Position, to: Position) -> (u32, u32) {
    (from.0.abs_diff(to.0), from.1.abs_diff(to.1))
}

/// King-step distance: the larger of the two offsets.
pub fn distance(from: Position, to: Position) -> u32 {
    let (rows, cols) = deltas(from, to);
    rows.max(cols)
}

pub fn is_in_straight_line(a: Position, b: Position) -> bool {
    a.0 == b.0 || a.1 == b.1
}

pub fn is_in_diagonal_line(a: Position, b: Position) -> bool {
    let (rows, cols) = deltas(a, b);
    rows == cols
}

#[inline]
pub fn is_valid_coord(pos: Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.0) && (0..BOARD_SIZE).contains(&pos.1)
}

/// Every cell of the board, row by row.
pub fn all_cells() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}
