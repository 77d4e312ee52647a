use crate::config::{DisplayConfig, HighlightColor};
use crate::game::{Board, Match, MatchResult, Token, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

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

pub fn render(
    frame: &mut Frame,
    game: &Match,
    selected_column: usize,
    message: &Option<String>,
    display: &DisplayConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, display, chunks[0]);
    render_board(frame, game.board(), selected_column, display, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Match, display: &DisplayConfig, area: Rect) {
    let (status, color) = match (game.current_player(), game.result()) {
        (Some(player), _) => (
            format!("{}'s turn ({})", player.name, player.token.name()),
            token_color(player.token),
        ),
        (None, Some(MatchResult::Winner(player))) => (
            format!("Game Over  |  {} wins", player.name),
            highlight(display.win_highlight),
        ),
        (None, _) => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    display: &DisplayConfig,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {col} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {col} ")));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let border = "═".repeat(3 * COLS + 1);
    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let cell = board.cell_at(row, col).and_then(|c| c.token());
            let span = match cell {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(_) if board.is_winning_cell(row, col) => Span::styled(
                    " ● ",
                    Style::default()
                        .fg(highlight(display.win_highlight))
                        .add_modifier(Modifier::BOLD),
                ),
                Some(token) => Span::styled(" ● ", Style::default().fg(token_color(token))),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 0-6: Select  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
