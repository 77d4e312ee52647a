//! Line-oriented front end: prompts on a reader/writer pair and prints the
//! board with ANSI colours.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};

use crate::config::{DisplayConfig, HighlightColor, PlayersConfig};
use crate::error::InputError;
use crate::game::{Board, Cell, ColumnSource, MatchResult, Player, Renderer, Token, COLS, ROWS};

fn highlight(color: HighlightColor) -> Color {
    match color {
        HighlightColor::Magenta => Color::Magenta,
        HighlightColor::Cyan => Color::Cyan,
        HighlightColor::Green => Color::Green,
        HighlightColor::Blue => Color::Blue,
        HighlightColor::White => Color::White,
    }
}

fn token_color(token: Token) -> Color {
    match token {
        Token::Red => Color::Red,
        Token::Yellow => Color::Yellow,
    }
}

/// Reads whitespace-separated column numbers, re-prompting until one is in
/// range.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Print the banner, ask for both names and announce the pairing.
    /// Blank answers fall back to the configured names.
    pub fn read_players(&mut self, defaults: &PlayersConfig) -> Result<[Player; 2], InputError> {
        writeln!(self.writer, "\n--- Welcome to Connect 4 ---")?;
        let first = self.read_name("Enter Player 1 Name: ", &defaults.player_one)?;
        let second = self.read_name("Enter Player 2 Name: ", &defaults.player_two)?;
        writeln!(
            self.writer,
            "\nMatch Started: {first} ({}) vs {second} ({})",
            Token::Red.name(),
            Token::Yellow.name()
        )?;
        Ok([Player::new(first, Token::Red), Player::new(second, Token::Yellow)])
    }

    fn read_name(&mut self, prompt: &str, default: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        let name = line.trim();
        Ok(if name.is_empty() { default } else { name }.to_string())
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead, W: Write> ColumnSource for ConsoleInput<R, W> {
    fn request_column(&mut self, player: &Player) -> Result<usize, InputError> {
        loop {
            write!(
                self.writer,
                "\n{}'s turn, enter column (0-{}): ",
                player.name,
                COLS - 1
            )?;
            self.writer.flush()?;

            let token = self.next_token()?;
            match token.parse::<i64>() {
                Ok(col) if (0..COLS as i64).contains(&col) => return Ok(col as usize),
                Ok(_) => writeln!(
                    self.writer,
                    "Invalid column. Please enter a number between 0 and {}.",
                    COLS - 1
                )?,
                Err(_) => writeln!(
                    self.writer,
                    "Invalid input '{token}'. Please enter a number."
                )?,
            }
        }
    }
}

/// Prints the board after every move, colouring tokens per player and the
/// winning line in the highlight colour.
pub struct AnsiRenderer<W> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        AnsiRenderer { out, display }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_cell(&mut self, board: &Board, row: usize, col: usize) -> io::Result<()> {
        let cell = board.cell_at(row, col).unwrap_or(Cell::Empty);
        let symbol = cell.symbol();
        match cell.token() {
            Some(_) if board.is_winning_cell(row, col) => {
                write!(self.out, "{} ", symbol.with(highlight(self.display.win_highlight)))
            }
            Some(token) => write!(self.out, "{} ", symbol.with(token_color(token))),
            None => write!(self.out, "{symbol} "),
        }
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, board: &Board, _players: &[Player; 2]) -> io::Result<()> {
        if !self.display.color {
            write!(self.out, "\n{board}")?;
            return self.out.flush();
        }

        writeln!(self.out)?;
        write!(self.out, " ")?;
        for col in 0..COLS {
            write!(self.out, " {col}")?;
        }
        writeln!(self.out)?;
        let rule = "-".repeat(2 * COLS + 1);
        writeln!(self.out, " {rule} ")?;
        for row in 0..ROWS {
            write!(self.out, "| ")?;
            for col in 0..COLS {
                self.write_cell(board, row, col)?;
            }
            writeln!(self.out, "|")?;
        }
        writeln!(self.out, " {rule} ")?;
        self.out.flush()
    }

    fn column_full(&mut self, _player: &Player, column: usize) -> io::Result<()> {
        writeln!(self.out, "Column {column} is full. Please choose another.")
    }

    fn finished(&mut self, result: &MatchResult) -> io::Result<()> {
        let message = match result {
            MatchResult::Winner(player) => format!("GAME OVER: {} Wins!", player.name),
            MatchResult::Draw => "GAME OVER: It's a draw!".to_string(),
        };
        if self.display.color {
            writeln!(self.out, "\n{}", message.with(highlight(self.display.win_highlight)))?;
        } else {
            writeln!(self.out, "\n{message}")?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Match, Rules};
    use std::io::Cursor;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            color: false,
            ..DisplayConfig::default()
        }
    }

    fn input(text: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: &ConsoleInput<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.writer.clone()).unwrap()
    }

    #[test]
    fn test_request_column_skips_bad_tokens() {
        let mut console = input("abc 9\n-1 4\n");
        let player = Player::new("Ada", Token::Red);
        assert_eq!(console.request_column(&player).unwrap(), 4);

        let out = written(&console);
        assert!(out.contains("Ada's turn, enter column (0-6): "));
        assert!(out.contains("Invalid input 'abc'. Please enter a number."));
        assert_eq!(
            out.matches("Invalid column. Please enter a number between 0 and 6.")
                .count(),
            2
        );
    }

    #[test]
    fn test_request_column_keeps_remaining_tokens() {
        let mut console = input("1 2\n");
        let player = Player::new("Ada", Token::Red);
        assert_eq!(console.request_column(&player).unwrap(), 1);
        assert_eq!(console.request_column(&player).unwrap(), 2);
        assert!(matches!(
            console.request_column(&player),
            Err(InputError::Eof)
        ));
    }

    #[test]
    fn test_read_players_uses_defaults_for_blank_names() {
        let mut console = input("Ada\n\n");
        let players = console.read_players(&PlayersConfig::default()).unwrap();
        assert_eq!(players[0], Player::new("Ada", Token::Red));
        assert_eq!(players[1], Player::new("Player 2", Token::Yellow));
        assert!(written(&console).contains("Match Started: Ada (Red) vs Player 2 (Yellow)"));
    }

    #[test]
    fn test_read_players_eof() {
        let mut console = input("");
        assert!(matches!(
            console.read_players(&PlayersConfig::default()),
            Err(InputError::Eof)
        ));
    }

    #[test]
    fn test_plain_render_matches_board_display() {
        let mut board = Board::new();
        board.place(2, Token::Yellow).unwrap();
        let players = [Player::new("A", Token::Red), Player::new("B", Token::Yellow)];
        let mut renderer = AnsiRenderer::new(Vec::new(), plain());
        renderer.render(&board, &players).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, format!("\n{board}"));
    }

    #[test]
    fn test_colored_render_highlights_winning_cells() {
        let mut m = Match::with_names("A", "B", Rules::default());
        for col in [0, 0, 1, 1, 2, 2, 3] {
            m.play(col).unwrap();
        }
        let mut renderer = AnsiRenderer::new(Vec::new(), DisplayConfig::default());
        renderer.render(m.board(), m.players()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        let magenta_x = format!("{}", 'X'.with(Color::Magenta));
        let yellow_o = format!("{}", 'O'.with(Color::Yellow));
        assert_eq!(out.matches(&magenta_x).count(), 4);
        assert_eq!(out.matches(&yellow_o).count(), 3);
    }

    #[test]
    fn test_full_console_match() {
        let mut console = input("Ada\nBob\n0 0 1 1 2 2 x\n3\n");
        let players = console.read_players(&PlayersConfig::default()).unwrap();
        let mut m = Match::new(players, Rules::default());
        let mut renderer = AnsiRenderer::new(Vec::new(), plain());

        let result = m.run(&mut console, &mut renderer).unwrap();
        assert_eq!(result, MatchResult::Winner(Player::new("Ada", Token::Red)));

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.ends_with("\nGAME OVER: Ada Wins!\n"));
        assert!(written(&console).contains("Invalid input 'x'. Please enter a number."));
    }

    #[test]
    fn test_column_full_message() {
        let mut renderer = AnsiRenderer::new(Vec::new(), plain());
        renderer
            .column_full(&Player::new("A", Token::Red), 5)
            .unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "Column 5 is full. Please choose another.\n");
    }
}
