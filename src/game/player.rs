use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Red,
    Yellow,
}

impl Token {
    /// Get the other token
    pub fn other(self) -> Token {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }

    /// Convert token to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Token::Red => Cell::Red,
            Token::Yellow => Cell::Yellow,
        }
    }

    /// Character drawn on the plain-text board
    pub fn symbol(self) -> char {
        match self {
            Token::Red => 'X',
            Token::Yellow => 'O',
        }
    }

    /// Colour name for display
    pub fn name(self) -> &'static str {
        match self {
            Token::Red => "Red",
            Token::Yellow => "Yellow",
        }
    }
}

/// A named participant. Everything else about a player is derivable from
/// the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }
}
