use crate::error::MoveError;
use super::lines::Line;
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: Mark,
    pub x: usize,
    pub y: usize,
    pub in_winning_line: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self {
            value: Mark::Empty,
            x,
            y,
            in_winning_line: false,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Square grid stored row-major: `rows[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let rows = (0..size)
            .map(|y| (0..size).map(|x| Cell::new(x, y)).collect())
            .collect();
        Self { size, rows }
    }

    /// Builds a board from rows of marks. Rows are padded or truncated to a
    /// square of `marks.len()`.
    pub fn from_marks(marks: &[Vec<Mark>]) -> Self {
        let mut board = Self::new(marks.len());
        for (y, row) in marks.iter().enumerate() {
            for (x, &mark) in row.iter().take(board.size).enumerate() {
                board.rows[y][x].value = mark;
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.y).and_then(|row| row.get(pos.x))
    }

    pub fn mark_at(&self, pos: Position) -> Mark {
        self.get(pos).map(|cell| cell.value).unwrap_or_default()
    }

    pub fn marks(&self) -> Vec<Vec<Mark>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.value).collect())
            .collect()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    pub fn is_valid_move(&self, pos: Position) -> Result<(), MoveError> {
        match self.get(pos) {
            None => Err(MoveError::OutOfBounds {
                position: pos,
                size: self.size,
            }),
            Some(cell) if !cell.is_empty() => Err(MoveError::OccupiedCell(pos)),
            Some(_) => Ok(()),
        }
    }

    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        self.is_valid_move(pos)?;
        self.rows[pos.y][pos.x].value = mark;
        Ok(())
    }

    pub(crate) fn mark_winning(&mut self, line: &Line) {
        for pos in line.positions() {
            if let Some(cell) = self.rows.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
                cell.in_winning_line = true;
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        for cell in self.rows.iter_mut().flatten() {
            cell.value = Mark::Empty;
            cell.in_winning_line = false;
        }
    }
}
