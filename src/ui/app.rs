use crate::config::BoardConfig;
use crate::game::{GameController, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    game: GameController,
    board_config: BoardConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board_config: BoardConfig) -> Self {
        App {
            game: GameController::with_dimensions(board_config.rows, board_config.columns),
            board_config,
            selected_column: board_config.columns / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameController {
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
            terminal.draw(|f| super::game_view::render(f, self))?;

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
                if self.selected_column + 1 < self.game.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char(c @ '0'..='9') => {
                let column = c as usize - '0' as usize;
                if column < self.game.columns() {
                    self.selected_column = column;
                    self.drop_token();
                }
            }
            KeyCode::Char('r') => {
                self.game = GameController::with_dimensions(
                    self.board_config.rows,
                    self.board_config.columns,
                );
                self.selected_column = self.board_config.columns / 2;
                self.message = Some("New game started!".to_string());
                info!("new game started");
            }
            _ => {}
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        match self.game.apply_move(self.selected_column) {
            Ok(result) if result.status == GameStatus::InProgress => {}
            Ok(_) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(capitalize(&err.to_string()));
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
