//! Read-only view of the playfield handed to the renderer each frame

use crate::board::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::GameState;
use crate::piece::Piece;
use crate::tetromino::{Shape, TetrominoType};

/// Player-facing counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub score: u64,
    pub lines: u32,
    pub level: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Locked cells, row 0 at the top
    pub cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    /// Falling piece, absent while rows are clearing and after game over
    pub active: Option<Piece>,
    pub next: TetrominoType,
    pub next_shape: Shape,
    pub progress: Progress,
    /// Rows currently flashing before removal
    pub clearing_rows: Vec<usize>,
    /// Which half of the flash cycle the clearing rows are in
    pub flash_on: bool,
    pub state: GameState,
}

impl Snapshot {
    /// Whether the active piece covers (x, y)
    pub fn active_at(&self, x: i32, y: i32) -> Option<TetrominoType> {
        self.active.as_ref().and_then(|piece| {
            piece
                .block_positions()
                .any(|pos| pos == (x, y))
                .then_some(piece.piece_type)
        })
    }

    pub fn is_clearing(&self, y: usize) -> bool {
        self.clearing_rows.contains(&y)
    }
}
