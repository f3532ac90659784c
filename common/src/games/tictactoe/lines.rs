use super::board::{Board, Cell};
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// `(0,0)` to `(N-1,N-1)`.
    Diagonal,
    /// `(N-1,0)` to `(0,N-1)`.
    AntiDiagonal,
}

/// A full row, column or diagonal of the board, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    positions: Vec<Position>,
}

impl Line {
    fn new(kind: LineKind, positions: Vec<Position>) -> Self {
        Self { kind, positions }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn cells<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a Cell> + 'a {
        self.positions.iter().filter_map(move |&pos| board.get(pos))
    }

    /// The mark shared by every cell, if the line is complete and uniform.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let first = board.mark_at(*self.positions.first()?);
        if first.is_empty() {
            return None;
        }
        self.cells(board)
            .all(|cell| cell.value == first)
            .then_some(first)
    }

    /// Returns `(player_one_count, player_two_count)` for the line.
    pub fn occupancy(&self, board: &Board) -> (usize, usize) {
        self.cells(board)
            .fold((0, 0), |(one, two), cell| match cell.value {
                Mark::PlayerOne => (one + 1, two),
                Mark::PlayerTwo => (one, two + 1),
                Mark::Empty => (one, two),
            })
    }
}

/// Every line of an N×N board: N rows, N columns, then both diagonals.
pub fn all_lines(board: &Board) -> Vec<Line> {
    let size = board.size();
    let mut lines = Vec::with_capacity(2 * size + 2);

    for y in 0..size {
        lines.push(Line::new(
            LineKind::Row(y),
            (0..size).map(|x| Position::new(x, y)).collect(),
        ));
    }
    for x in 0..size {
        lines.push(Line::new(
            LineKind::Column(x),
            (0..size).map(|y| Position::new(x, y)).collect(),
        ));
    }
    lines.push(Line::new(
        LineKind::Diagonal,
        (0..size).map(|i| Position::new(i, i)).collect(),
    ));
    lines.push(Line::new(
        LineKind::AntiDiagonal,
        (0..size).map(|i| Position::new(size - 1 - i, i)).collect(),
    ));

    lines
}
