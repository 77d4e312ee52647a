//! Core Connect Four logic: the board with its gravity rule, four-in-a-row
//! detection, and the turn controller that runs one match.

mod board;
mod player;
mod turn;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Player, Token};
pub use turn::{ColumnSource, Match, MatchResult, MatchState, Renderer, Rules, TurnReport};
pub use win::{find_win, scan_for_win, Direction, WinningLine};
