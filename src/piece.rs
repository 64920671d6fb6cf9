//! Active falling piece logic

use crate::board::{Board, BOARD_WIDTH};
use crate::collision::is_valid;
use crate::tetromino::{Shape, TetrominoType};

/// An active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// The type of tetromino
    pub piece_type: TetrominoType,
    /// Current orientation
    pub shape: Shape,
    /// Top-left corner of the shape matrix on the board
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a new piece at spawn position: horizontally centered, top row
    pub fn new(piece_type: TetrominoType) -> Self {
        let shape = piece_type.shape();
        Self {
            piece_type,
            shape,
            x: (BOARD_WIDTH / 2 - shape.cols() / 2) as i32,
            y: 0,
        }
    }

    /// Absolute (x, y) board positions of all 4 blocks
    pub fn block_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .blocks()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether the piece fits where it currently is
    pub fn fits(&self, board: &Board) -> bool {
        is_valid(&self.shape, self.x, self.y, board)
    }

    /// Try to shift by (dx, dy), returns true if successful
    fn shift(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if is_valid(&self.shape, self.x + dx, self.y + dy, board) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Try to move left, returns true if successful
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(-1, 0, board)
    }

    /// Try to move right, returns true if successful
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(1, 0, board)
    }

    /// Try to move down, returns true if successful
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.shift(0, 1, board)
    }

    /// Try to rotate clockwise in place. There are no wall kicks: if the
    /// rotated shape does not fit at the same corner the rotation is dropped.
    pub fn rotate_cw(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        if is_valid(&rotated, self.x, self.y, board) {
            self.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Write this piece into the board
    pub fn lock(&self, board: &mut Board) {
        board.place(&self.shape, self.x, self.y, self.piece_type);
    }
}
