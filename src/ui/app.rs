use crate::config::UiConfig;
use crate::game::{GameState, MoveError, MoveOutcome, COLS};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, GameView};
use super::input::{self, Command};
use super::notice::end_notice;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was last drawn, for mouse clicks.
    board_area: Rect,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            game_state: GameState::new(),
            selected_column: config.initial_column.min(COLS - 1),
            should_quit: false,
            message: None,
            board_area: Rect::default(),
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
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
        tracing::info!("starting interactive game");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        tracing::info!(moves = self.game_state.moves_played(), "quit");
        Ok(())
    }

    /// Poll for one terminal event and apply it
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            let command = match event::read()? {
                Event::Key(key) => input::from_key(key),
                Event::Mouse(mouse) => input::from_mouse(mouse, self.board_area),
                _ => None,
            };
            if let Some(command) = command {
                self.apply(command);
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, command: Command) {
        // Clear message on any command
        self.message = None;

        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::MoveLeft => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            Command::MoveRight => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            Command::Drop => {
                self.drop_piece(self.selected_column);
            }
            Command::DropAt(column) => {
                self.selected_column = column;
                self.drop_piece(column);
            }
            Command::Restart => {
                self.game_state.reset();
                self.selected_column = self.config.initial_column.min(COLS - 1);
                self.message = Some("New game started!".to_string());
                tracing::info!("game restarted");
            }
        }
    }

    /// Drop a piece for the current player in `column`
    fn drop_piece(&mut self, column: usize) {
        let player = self.game_state.current_player();

        match self.game_state.play(column) {
            Ok(MoveOutcome::Placed { row, column, status }) => {
                tracing::info!(player = player.number(), row, column, "piece placed");
                if let Some(notice) = end_notice(status) {
                    tracing::info!(moves = self.game_state.moves_played(), "{notice}");
                    self.message = Some(notice);
                }
            }
            Ok(MoveOutcome::ColumnFull { column }) => {
                tracing::debug!(column, "column full, input ignored");
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                tracing::error!(column, "rejected move: {err}");
                self.message = Some(format!("Rejected move: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let view = GameView {
            state: &self.game_state,
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            player_one_color: self.config.player_one_color,
            player_two_color: self.config.player_two_color,
        };
        self.board_area = game_view::render(frame, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
