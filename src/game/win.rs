//! Four-in-a-row detection over a whole board.
//!
//! The scan order is fixed: every horizontal candidate, then vertical, then
//! the down-right diagonal, then the up-right diagonal. Inside a category
//! starting cells are visited top to bottom, left to right. The first run
//! found ends the scan.

use super::board::{Board, Cell, COLS, ROWS};

const RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalUpRight,
}

impl Direction {
    /// Row and column step between consecutive cells of a run
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalUpRight => (-1, 1),
        }
    }

    /// Starting rows and columns that keep a whole run on the board
    fn starts(self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - (RUN - 1)),
            Direction::Vertical => (0..ROWS - (RUN - 1), 0..COLS),
            Direction::DiagonalDownRight => (0..ROWS - (RUN - 1), 0..COLS - (RUN - 1)),
            Direction::DiagonalUpRight => (RUN - 1..ROWS, 0..COLS - (RUN - 1)),
        }
    }
}

const SCAN_ORDER: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDownRight,
    Direction::DiagonalUpRight,
];

/// Four connected cells holding the same token, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: [(usize, usize); RUN],
}

impl WinningLine {
    pub fn start(&self) -> (usize, usize) {
        self.cells[0]
    }
}

/// Find the first winning run without touching the board.
pub fn find_win(board: &Board) -> Option<WinningLine> {
    SCAN_ORDER.into_iter().find_map(|direction| {
        let (rows, cols) = direction.starts();
        rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
            .find_map(|(row, col)| check_line(board, row, col, direction))
    })
}

/// Find the first winning run and record it in the board's win mask.
pub fn scan_for_win(board: &mut Board) -> Option<WinningLine> {
    let line = find_win(board)?;
    board.mark_winning_line(&line.cells);
    Some(line)
}

/// Test the run starting at `(row, col)`. The caller's loop bounds keep every
/// cell of the run in range.
fn check_line(board: &Board, row: usize, col: usize, direction: Direction) -> Option<WinningLine> {
    let first = board.get(row, col);
    if first == Cell::Empty {
        return None;
    }

    let (dr, dc) = direction.delta();
    let mut cells = [(row, col); RUN];
    for (step, cell) in cells.iter_mut().enumerate().skip(1) {
        let r = (row as isize + dr * step as isize) as usize;
        let c = (col as isize + dc * step as isize) as usize;
        if board.get(r, c) != first {
            return None;
        }
        *cell = (r, c);
    }

    Some(WinningLine { direction, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;

    /// Build a board by dropping each token into its column in order.
    fn board_from(drops: &[(usize, Token)]) -> Board {
        let mut board = Board::new();
        for &(col, token) in drops {
            board.place(col, token).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        let mut board = board_from(&[
            (0, Token::Red),
            (1, Token::Red),
            (2, Token::Red),
            (3, Token::Red),
        ]);
        let line = scan_for_win(&mut board).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
        for col in 0..4 {
            assert!(board.is_winning_cell(5, col));
        }
        assert!(!board.is_winning_cell(5, 4));
    }

    #[test]
    fn test_vertical_win_is_reported_from_the_top() {
        let mut board = board_from(&[(3, Token::Red); 4]);
        let line = scan_for_win(&mut board).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        // The scan walks downwards from the topmost token.
        assert_eq!(line.start(), (2, 3));
        assert_eq!(line.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
        for row in 2..6 {
            assert!(board.is_winning_cell(row, 3));
        }
    }

    #[test]
    fn test_diagonal_up_right_win() {
        // Red at (5,0), (4,1), (3,2), (2,3) with yellow filler underneath.
        let mut board = board_from(&[
            (0, Token::Red),
            (1, Token::Yellow),
            (1, Token::Red),
            (2, Token::Yellow),
            (2, Token::Yellow),
            (2, Token::Red),
            (3, Token::Yellow),
            (3, Token::Yellow),
            (3, Token::Yellow),
            (3, Token::Red),
        ]);
        let line = scan_for_win(&mut board).unwrap();
        assert_eq!(line.direction, Direction::DiagonalUpRight);
        assert_eq!(line.cells, [(5, 0), (4, 1), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // Red at (2,3), (3,4), (4,5), (5,6).
        let mut board = board_from(&[
            (6, Token::Red),
            (5, Token::Yellow),
            (5, Token::Red),
            (4, Token::Yellow),
            (4, Token::Yellow),
            (4, Token::Red),
            (3, Token::Yellow),
            (3, Token::Yellow),
            (3, Token::Yellow),
            (3, Token::Red),
        ]);
        let line = scan_for_win(&mut board).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownRight);
        assert_eq!(line.cells, [(2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = board_from(&[
            (0, Token::Red),
            (1, Token::Red),
            (2, Token::Red),
            (4, Token::Red),
            (6, Token::Yellow),
            (6, Token::Yellow),
            (6, Token::Yellow),
        ]);
        assert_eq!(scan_for_win(&mut board), None);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(!board.is_winning_cell(row, col));
            }
        }
    }

    #[test]
    fn test_mixed_tokens_do_not_win() {
        let board = board_from(&[
            (0, Token::Red),
            (1, Token::Red),
            (2, Token::Yellow),
            (3, Token::Red),
        ]);
        assert_eq!(find_win(&board), None);
    }

    #[test]
    fn test_horizontal_beats_vertical() {
        // Yellow has a vertical run in column 6 and red a horizontal run on
        // row 5; horizontal candidates are scanned first.
        let board = board_from(&[
            (6, Token::Yellow),
            (6, Token::Yellow),
            (6, Token::Yellow),
            (6, Token::Yellow),
            (0, Token::Red),
            (1, Token::Red),
            (2, Token::Red),
            (3, Token::Red),
        ]);
        let line = find_win(&board).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start(), (5, 0));
    }

    #[test]
    fn test_upper_row_scanned_before_lower_row() {
        // Two horizontal runs: row 4 is reached before row 5.
        let mut drops = Vec::new();
        for col in 0..4 {
            drops.push((col, Token::Yellow));
        }
        for col in 0..4 {
            drops.push((col, Token::Red));
        }
        let board = board_from(&drops);
        let line = find_win(&board).unwrap();
        assert_eq!(line.cells, [(4, 0), (4, 1), (4, 2), (4, 3)]);
    }

    #[test]
    fn test_five_in_a_row_reports_leftmost_four() {
        let board = board_from(&[
            (2, Token::Red),
            (3, Token::Red),
            (4, Token::Red),
            (5, Token::Red),
            (6, Token::Red),
        ]);
        let line = find_win(&board).unwrap();
        assert_eq!(line.cells, [(5, 2), (5, 3), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_find_win_is_pure() {
        let board = board_from(&[(0, Token::Red); 4]);
        let before = board.clone();
        assert!(find_win(&board).is_some());
        assert_eq!(board, before);
    }
}
