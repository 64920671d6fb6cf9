//! Playfield grid and row bookkeeping

use crate::tetromino::{Shape, TetrominoType};

/// Standard board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board - either empty or holding the piece that filled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col], row 0 is the top
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Get the cell at (x, y). Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Set the cell at (x, y). Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return false;
        }
        self.cells[y][x] = cell;
        true
    }

    /// Whether (x, y) is blocked. Anything off the board counts as blocked
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_none_or(|cell| cell.is_filled())
    }

    /// Write a shape into the grid with its top-left corner at (x, y).
    /// No validation happens here; callers check with `collision::is_valid` first.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32, kind: TetrominoType) {
        for (dx, dy) in shape.blocks() {
            self.set(x + dx, y + dy, Cell::Filled(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT && self.cells[y].iter().all(|cell| cell.is_filled())
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..BOARD_HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Delete row y and push an empty row in at the top.
    /// Rows above y move down one; rows below y stay where they are.
    pub fn remove_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT {
            return;
        }
        self.cells.copy_within(0..y, 1);
        self.cells[0] = [Cell::Empty; BOARD_WIDTH];
    }

    /// Remove several rows in one collapse.
    /// Surviving rows keep their order and drop by the number of removed rows beneath them.
    pub fn remove_rows(&mut self, rows: &[usize]) -> usize {
        let mut rows: Vec<usize> = rows.iter().copied().filter(|&y| y < BOARD_HEIGHT).collect();
        rows.sort_unstable();
        rows.dedup();

        // Top-down order: removing a row only moves rows above it, so the
        // remaining (lower) indices still point at the right rows
        for &y in &rows {
            self.remove_row(y);
        }

        rows.len()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, kind: TetrominoType) {
        for x in 0..BOARD_WIDTH as i32 {
            board.set(x, y, Cell::Filled(kind));
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(board.full_rows().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        assert!(board.set(5, 5, Cell::Filled(TetrominoType::Z)));
        assert_eq!(board.get(5, 5), Some(Cell::Filled(TetrominoType::Z)));
        assert!(board.occupied(5, 5));
        assert!(!board.occupied(4, 5));
    }

    #[test]
    fn test_out_of_bounds_is_occupied() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
        assert!(board.occupied(-1, 0));
        assert!(board.occupied(BOARD_WIDTH as i32, 0));
        assert!(board.occupied(0, -1));
        assert!(board.occupied(0, BOARD_HEIGHT as i32));
    }

    #[test]
    fn test_place_writes_shape_cells() {
        let mut board = Board::new();
        board.place(&TetrominoType::T.shape(), 3, 10, TetrominoType::T);
        assert!(board.occupied(4, 10));
        assert!(board.occupied(3, 11));
        assert!(board.occupied(4, 11));
        assert!(board.occupied(5, 11));
        assert!(!board.occupied(3, 10));
        assert!(!board.occupied(5, 10));
    }

    #[test]
    fn test_row_full_detection() {
        let mut board = Board::new();
        fill_row(&mut board, 19, TetrominoType::I);
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));

        board.set(7, 19, Cell::Empty);
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new();
        fill_row(&mut board, 19, TetrominoType::I);
        board.set(2, 18, Cell::Filled(TetrominoType::S));
        board.set(6, 17, Cell::Filled(TetrominoType::L));

        board.remove_row(19);

        assert!(!board.is_row_full(19));
        assert_eq!(board.get(2, 19), Some(Cell::Filled(TetrominoType::S)));
        assert_eq!(board.get(6, 18), Some(Cell::Filled(TetrominoType::L)));
        assert!(board.get(2, 18).is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn test_remove_row_keeps_rows_below() {
        let mut board = Board::new();
        board.set(0, 19, Cell::Filled(TetrominoType::J));
        fill_row(&mut board, 10, TetrominoType::O);
        board.set(3, 9, Cell::Filled(TetrominoType::T));

        board.remove_row(10);

        assert_eq!(board.get(0, 19), Some(Cell::Filled(TetrominoType::J)));
        assert_eq!(board.get(3, 10), Some(Cell::Filled(TetrominoType::T)));
        assert!(board.rows()[0].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_remove_rows_is_one_collapse() {
        let mut board = Board::new();
        // Interleave full rows with marker rows so every shift distance differs
        fill_row(&mut board, 19, TetrominoType::I);
        board.set(0, 18, Cell::Filled(TetrominoType::J));
        fill_row(&mut board, 17, TetrominoType::I);
        board.set(1, 16, Cell::Filled(TetrominoType::L));
        fill_row(&mut board, 15, TetrominoType::I);
        board.set(2, 14, Cell::Filled(TetrominoType::S));

        let full = board.full_rows();
        assert_eq!(full, vec![15, 17, 19]);
        assert_eq!(board.remove_rows(&full), 3);

        assert_eq!(board.get(0, 19), Some(Cell::Filled(TetrominoType::J)));
        assert_eq!(board.get(1, 18), Some(Cell::Filled(TetrominoType::L)));
        assert_eq!(board.get(2, 17), Some(Cell::Filled(TetrominoType::S)));
        for y in 0..17 {
            assert!(board.rows()[y].iter().all(|c| c.is_empty()), "row {y}");
        }
        assert!(board.full_rows().is_empty());
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::new();
        fill_row(&mut board, 3, TetrominoType::Z);
        board.clear();
        assert!(board.is_empty());
    }
}
