//! Placement legality checks

use crate::board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
use crate::tetromino::Shape;

/// Check whether `shape` with its top-left corner at (x, y) fits on the board.
///
/// Every filled sub-cell must land inside the board on an empty cell.
/// Stops at the first sub-cell that fails.
pub fn is_valid(shape: &Shape, x: i32, y: i32, board: &Board) -> bool {
    shape.blocks().all(|(dx, dy)| {
        let (col, row) = (x + dx, y + dy);
        (0..BOARD_WIDTH as i32).contains(&col)
            && (0..BOARD_HEIGHT as i32).contains(&row)
            && !board.occupied(col, row)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::tetromino::TetrominoType;
    use proptest::prelude::*;

    #[test]
    fn test_fits_on_empty_board() {
        let board = Board::new();
        assert!(is_valid(&TetrominoType::I.shape(), 3, 0, &board));
        assert!(is_valid(&TetrominoType::I.shape(), 6, 19, &board));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let board = Board::new();
        let i = TetrominoType::I.shape();
        assert!(!is_valid(&i, -1, 0, &board));
        assert!(!is_valid(&i, 7, 0, &board));
        assert!(!is_valid(&i, 0, -1, &board));
        assert!(!is_valid(&i, 0, 20, &board));
    }

    #[test]
    fn test_empty_subcells_ignore_occupancy() {
        let mut board = Board::new();
        // .X.
        // XXX
        board.set(3, 10, Cell::Filled(TetrominoType::O));
        board.set(5, 10, Cell::Filled(TetrominoType::O));
        assert!(is_valid(&TetrominoType::T.shape(), 3, 10, &board));
        assert!(!is_valid(&TetrominoType::T.shape(), 2, 10, &board));
    }

    #[test]
    fn test_rejects_overlap() {
        let mut board = Board::new();
        board.set(4, 1, Cell::Filled(TetrominoType::O));
        let t = TetrominoType::T.shape();
        assert!(!is_valid(&t, 3, 0, &board));
        assert!(is_valid(&t, 5, 0, &board));
    }

    fn any_kind() -> impl Strategy<Value = TetrominoType> {
        prop::sample::select(TetrominoType::all().to_vec())
    }

    proptest! {
        #[test]
        fn valid_placement_never_overlaps_or_leaves_board(
            kind in any_kind(),
            turns in 0usize..4,
            x in -4i32..14,
            y in -4i32..24,
            filled in prop::collection::vec((0i32..10, 0i32..20), 0..60),
        ) {
            let mut board = Board::new();
            for (cx, cy) in filled {
                board.set(cx, cy, Cell::Filled(TetrominoType::Z));
            }
            let mut shape = kind.shape();
            for _ in 0..turns {
                shape = shape.rotated_cw();
            }

            if is_valid(&shape, x, y, &board) {
                let before = board.clone();
                for (dx, dy) in shape.blocks() {
                    prop_assert!(before.get(x + dx, y + dy).is_some_and(|c| c.is_empty()));
                }
                board.place(&shape, x, y, kind);
                let filled_before = before.rows().iter().flatten().filter(|c| c.is_filled()).count();
                let filled_after = board.rows().iter().flatten().filter(|c| c.is_filled()).count();
                prop_assert_eq!(filled_after, filled_before + 4);
            }
        }
    }
}
