use super::App;
use crate::game::{Cell, GameController, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let game = app.game();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Min(game.rows() as u16 + 4), // Board
            Constraint::Length(3),                   // Message
            Constraint::Length(3),                   // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, app.selected_column(), chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &GameController, area: Rect) {
    let color = match game.status() {
        GameStatus::Tied => Color::White,
        _ => player_color(game.current_player()),
    };

    let header = Paragraph::new(game.status_message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Let's play Connect 4!"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &GameController, selected_column: usize, area: Rect) {
    let columns = game.columns();
    let mut lines = Vec::new();

    // Column numbers; full columns are dimmed, the selected one underlined
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{col:^3}");
        let style = if game.is_terminal() || game.is_column_full(col) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let style = if col == selected_column {
            style
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..game.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..columns {
            let (symbol, color) = match game.cell_state(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Player1 => (" ● ", player_color(Player::One)),
                Cell::Player2 => (" ● ", player_color(Player::Two)),
            };
            let style = if game.is_winning_cell(row, col) {
                Style::default()
                    .fg(color)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column && !game.is_terminal() {
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

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter: Drop  |  0-9: Drop in column (10+: use ←/→)  |  R: New game  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
