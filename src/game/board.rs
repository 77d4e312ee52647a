use std::fmt;

use super::player::Token;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The token occupying this cell, if any
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Token::Red),
            Cell::Yellow => Some(Token::Yellow),
        }
    }

    pub fn symbol(self) -> char {
        match self.token() {
            Some(token) => token.symbol(),
            None => '.',
        }
    }
}

/// The grid plus the mask of cells that belong to a confirmed winning line.
///
/// Row 0 is the top, row `ROWS - 1` is the bottom. Tokens only ever enter
/// through [`Board::place`], so every column stays bottom-contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    win_mask: [[bool; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            win_mask: [[false; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position, `None` outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Whether the cell is part of the confirmed winning line
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        self.win_mask
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a token in a column, returns the row where it landed.
    ///
    /// The board is left untouched on error.
    pub fn place(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = token.to_cell();
        Ok(row)
    }

    /// Flag the given coordinates in the win mask.
    pub(crate) fn mark_winning_line(&mut self, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            self.win_mask[row][col] = true;
        }
    }

    /// Raw cell read for callers that already hold in-range indices.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        writeln!(f, " {} ", "-".repeat(2 * COLS + 1))?;
        for row in &self.cells {
            write!(f, "| ")?;
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, " {} ", "-".repeat(2 * COLS + 1))
    }
}
