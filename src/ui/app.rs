use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Match, MatchResult, TurnReport, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    game: Match,
    config: AppConfig,
    players: [String; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, players: [String; 2]) -> Self {
        let [first, second] = players.clone();
        App {
            game: Match::with_names(first, second, config.rules()),
            config,
            players,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let col = c as usize - '0' as usize;
                if col < COLS {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                let [first, second] = self.players.clone();
                self.game = Match::with_names(first, second, self.config.rules());
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.play(self.selected_column) {
            Ok(TurnReport::Placed { .. }) => {}
            Ok(TurnReport::Won { .. }) | Ok(TurnReport::Draw { .. }) => {
                self.message = self.game.result().map(|result| match result {
                    MatchResult::Winner(player) => format!("{} wins!", player.name),
                    MatchResult::Draw => "It's a draw!".to_string(),
                });
            }
            Err(MoveError::ColumnFull(col)) => {
                debug!(column = col, "column full");
                self.message = Some(format!("Column {col} is full!"));
            }
            Err(MoveError::InvalidColumn(col)) => {
                self.message = Some(format!("Invalid column {col}!"));
            }
            Err(MoveError::MatchOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.message,
            &self.config.display,
        );
    }
}
