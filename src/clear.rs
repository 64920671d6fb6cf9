//! Line clear detection and the flash animation that precedes the collapse

use crate::board::Board;
use std::time::Duration;

/// How long full rows flash and how fast they alternate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTiming {
    pub duration: Duration,
    pub flash_period: Duration,
}

impl Default for ClearTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(200),
            flash_period: Duration::from_millis(100),
        }
    }
}

/// Rows waiting to be removed and how long they have been flashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearState {
    rows: Vec<usize>,
    elapsed: Duration,
}

impl ClearState {
    /// Scan the board top to bottom. Returns None when no row is full
    pub fn scan(board: &Board) -> Option<Self> {
        let rows = board.full_rows();
        if rows.is_empty() {
            None
        } else {
            Some(Self {
                rows,
                elapsed: Duration::ZERO,
            })
        }
    }

    /// Rows marked for removal, top to bottom
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Advance the animation, returns true once it has run its full duration
    pub fn advance(&mut self, dt: Duration, timing: &ClearTiming) -> bool {
        self.elapsed += dt;
        self.elapsed >= timing.duration
    }

    /// Which of the two flash colors is showing.
    /// false for the first period (rows keep their own color), then alternates.
    pub fn flash_on(&self, timing: &ClearTiming) -> bool {
        if timing.flash_period.is_zero() {
            return false;
        }
        (self.elapsed.as_nanos() / timing.flash_period.as_nanos()) % 2 == 1
    }

    /// Remove every marked row in one step, returns how many went
    pub fn collapse(self, board: &mut Board) -> u32 {
        board.remove_rows(&self.rows) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, BOARD_WIDTH};
    use crate::tetromino::TetrominoType;

    fn fill_row(board: &mut Board, y: i32) {
        for x in 0..BOARD_WIDTH as i32 {
            board.set(x, y, Cell::Filled(TetrominoType::T));
        }
    }

    #[test]
    fn test_scan_without_full_rows() {
        let mut board = Board::new();
        board.set(0, 19, Cell::Filled(TetrominoType::I));
        assert!(ClearState::scan(&board).is_none());
    }

    #[test]
    fn test_scan_marks_rows_top_to_bottom() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 12);
        let state = ClearState::scan(&board).unwrap();
        assert_eq!(state.rows(), &[12, 19]);
    }

    #[test]
    fn test_animation_runs_for_duration() {
        let timing = ClearTiming::default();
        let mut board = Board::new();
        fill_row(&mut board, 19);
        let mut state = ClearState::scan(&board).unwrap();

        assert!(!state.advance(Duration::from_millis(100), &timing));
        assert!(!state.advance(Duration::from_millis(99), &timing));
        assert!(state.advance(Duration::from_millis(1), &timing));
    }

    #[test]
    fn test_flash_alternates() {
        let timing = ClearTiming {
            duration: Duration::from_millis(1000),
            flash_period: Duration::from_millis(100),
        };
        let mut board = Board::new();
        fill_row(&mut board, 19);
        let mut state = ClearState::scan(&board).unwrap();

        assert!(!state.flash_on(&timing));
        state.advance(Duration::from_millis(150), &timing);
        assert!(state.flash_on(&timing));
        state.advance(Duration::from_millis(100), &timing);
        assert!(!state.flash_on(&timing));
    }

    #[test]
    fn test_collapse_removes_exactly_marked_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 18);
        board.set(5, 17, Cell::Filled(TetrominoType::Z));

        let state = ClearState::scan(&board).unwrap();
        assert_eq!(state.collapse(&mut board), 2);
        assert_eq!(board.get(5, 19), Some(Cell::Filled(TetrominoType::Z)));
        assert!(board.full_rows().is_empty());
    }
}
