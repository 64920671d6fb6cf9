//! Tetromino catalog and shape matrices
//!
//! Every piece has a single canonical matrix. Other orientations are derived
//! by rotating that matrix, so there is no per-rotation lookup table.

use ratatui::style::Color;

/// Largest matrix a tetromino can occupy (the I piece stood upright)
pub const MAX_SHAPE: usize = 4;

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    J, // Blue
    L, // Orange
    O, // Yellow - square
    S, // Green
    T, // Purple
    Z, // Red
}

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Rgb(0, 255, 255),
            TetrominoType::J => Color::Rgb(0, 0, 255),
            TetrominoType::L => Color::Rgb(255, 128, 0),
            TetrominoType::O => Color::Rgb(255, 255, 0),
            TetrominoType::S => Color::Rgb(0, 255, 0),
            TetrominoType::T => Color::Rgb(128, 0, 128),
            TetrominoType::Z => Color::Rgb(255, 0, 0),
        }
    }

    /// All tetromino types in catalog order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ]
    }

    /// Canonical (spawn) orientation of this tetromino
    pub fn shape(&self) -> Shape {
        match self {
            TetrominoType::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            // X..
            // XXX
            TetrominoType::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            // ..X
            // XXX
            TetrominoType::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            TetrominoType::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            // .XX
            // XX.
            TetrominoType::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            // .X.
            // XXX
            TetrominoType::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            // XX.
            // .XX
            TetrominoType::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }
}

/// A boolean occupancy matrix, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    /// Anything beyond 4x4 is ignored.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        let height = rows.len().min(MAX_SHAPE);
        let mut width = 0;
        for (r, row) in rows.iter().take(height).enumerate() {
            width = width.max(row.len().min(MAX_SHAPE));
            for (c, &value) in row.iter().take(MAX_SHAPE).enumerate() {
                cells[r][c] = value != 0;
            }
        }
        Self {
            rows: height,
            cols: width,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether sub-cell (row, col) is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Rotate 90 degrees clockwise: reverse the row order, then transpose.
    /// A rows x cols matrix becomes cols x rows.
    pub fn rotated_cw(&self) -> Shape {
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for r in 0..self.cols {
            for c in 0..self.rows {
                cells[r][c] = self.cells[self.rows - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets (dx, dy) of every filled sub-cell, row-major
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i32, r as i32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_blocks() {
        for kind in TetrominoType::all() {
            assert_eq!(kind.shape().blocks().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let shape = TetrominoType::I.shape();
        assert_eq!((shape.rows(), shape.cols()), (1, 4));
        let upright = shape.rotated_cw();
        assert_eq!((upright.rows(), upright.cols()), (4, 1));
        assert_eq!(upright.blocks().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .X.      X.
        // XXX  ->  XX
        //          X.
        let rotated = TetrominoType::T.shape().rotated_cw();
        let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in TetrominoType::all() {
            let shape = kind.shape();
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let o = TetrominoType::O.shape();
        assert_eq!(o.rotated_cw(), o);
    }
}
