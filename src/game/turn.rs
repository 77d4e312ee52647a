use std::io;

use tracing::{debug, info, warn};

use super::board::Board;
use super::player::{Player, Token};
use super::win::{scan_for_win, WinningLine};
use crate::error::{InputError, MatchError, MoveError};

/// Where the match stands. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingPlayer(usize),
    Won(usize),
    Draw,
}

/// The externally observable outcome of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Winner(Player),
    Draw,
}

/// What a single successful placement led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// The token landed and play passes to `next`.
    Placed { row: usize, column: usize, next: usize },
    Won { row: usize, column: usize, line: WinningLine },
    Draw { row: usize, column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// End the match as a draw once the board fills up without a winner.
    pub detect_draw: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules { detect_draw: true }
    }
}

/// Supplies the column a player wants to drop into.
///
/// Implementations re-prompt on malformed input themselves and only return
/// columns in `0..COLS`.
pub trait ColumnSource {
    fn request_column(&mut self, player: &Player) -> Result<usize, InputError>;
}

impl<F> ColumnSource for F
where
    F: FnMut(&Player) -> Result<usize, InputError>,
{
    fn request_column(&mut self, player: &Player) -> Result<usize, InputError> {
        self(player)
    }
}

/// Observer that displays the board. It never changes match state.
pub trait Renderer {
    /// Draw the board, including its winning-line mask.
    fn render(&mut self, board: &Board, players: &[Player; 2]) -> io::Result<()>;

    /// Tell the current player the column they chose cannot take a token.
    fn column_full(&mut self, _player: &Player, _column: usize) -> io::Result<()> {
        Ok(())
    }

    /// Announce the end of the match.
    fn finished(&mut self, _result: &MatchResult) -> io::Result<()> {
        Ok(())
    }
}

/// Turn controller: owns the board for one match and alternates players.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    players: [Player; 2],
    state: MatchState,
    rules: Rules,
}

impl Match {
    pub fn new(players: [Player; 2], rules: Rules) -> Self {
        Match {
            board: Board::new(),
            players,
            state: MatchState::AwaitingPlayer(0),
            rules,
        }
    }

    /// Two players named `first` and `second`, holding red and yellow.
    pub fn with_names(first: impl Into<String>, second: impl Into<String>, rules: Rules) -> Self {
        Self::new(
            [Player::new(first, Token::Red), Player::new(second, Token::Yellow)],
            rules,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.state, MatchState::AwaitingPlayer(_))
    }

    /// The player whose turn it is, `None` once the match is over
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            MatchState::AwaitingPlayer(idx) => Some(&self.players[idx]),
            _ => None,
        }
    }

    /// Get match outcome if the match is over
    pub fn result(&self) -> Option<MatchResult> {
        match self.state {
            MatchState::AwaitingPlayer(_) => None,
            MatchState::Won(idx) => Some(MatchResult::Winner(self.players[idx].clone())),
            MatchState::Draw => Some(MatchResult::Draw),
        }
    }

    /// Drop the current player's token into `column` and advance the state.
    ///
    /// On error nothing changes and the same player is still to move.
    pub fn play(&mut self, column: usize) -> Result<TurnReport, MoveError> {
        let MatchState::AwaitingPlayer(idx) = self.state else {
            return Err(MoveError::MatchOver);
        };

        let player = &self.players[idx];
        let row = self.board.place(column, player.token)?;
        debug!(player = %player.name, column, row, "token placed");

        if let Some(line) = scan_for_win(&mut self.board) {
            info!(winner = %player.name, direction = ?line.direction, start = ?line.start(), "match won");
            self.state = MatchState::Won(idx);
            return Ok(TurnReport::Won { row, column, line });
        }

        if self.rules.detect_draw && self.board.is_full() {
            info!("match drawn");
            self.state = MatchState::Draw;
            return Ok(TurnReport::Draw { row, column });
        }

        let next = 1 - idx;
        self.state = MatchState::AwaitingPlayer(next);
        Ok(TurnReport::Placed { row, column, next })
    }

    /// Play the match to completion against the given collaborators.
    pub fn run<S, R>(&mut self, source: &mut S, renderer: &mut R) -> Result<MatchResult, MatchError>
    where
        S: ColumnSource + ?Sized,
        R: Renderer + ?Sized,
    {
        renderer
            .render(&self.board, &self.players)
            .map_err(MatchError::Render)?;

        while let MatchState::AwaitingPlayer(idx) = self.state {
            if self.board.is_full() {
                return Err(MatchError::NoLegalMove);
            }

            let column = source.request_column(&self.players[idx])?;
            match self.play(column) {
                Ok(_) => renderer
                    .render(&self.board, &self.players)
                    .map_err(MatchError::Render)?,
                Err(MoveError::ColumnFull(col)) => {
                    debug!(player = %self.players[idx].name, column = col, "column full");
                    renderer
                        .column_full(&self.players[idx], col)
                        .map_err(MatchError::Render)?;
                }
                Err(err) => {
                    warn!(%err, "column source broke its contract");
                    return Err(err.into());
                }
            }
        }

        let result = self.result().ok_or(MatchError::Move(MoveError::MatchOver))?;
        renderer.finished(&result).map_err(MatchError::Render)?;
        Ok(result)
    }
}
