use crate::config::UiConfig;
use crate::game::{GameEngine, GameStatus, MoveError, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    engine: GameEngine,
    config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    confirming_restart: bool,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            config,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            confirming_restart: false,
        }
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
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.confirming_restart {
            self.resolve_restart_confirmation(key);
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('u') => {
                self.undo();
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.selected_column = 3;
                self.message = Some(format!(
                    "Game {} — {} opens.",
                    self.engine.games_played(),
                    self.engine.current_player().name()
                ));
            }
            KeyCode::Char('r') => {
                self.request_restart();
            }
            KeyCode::Char('c') => {
                self.engine.reset_scores();
                self.message = Some("Scores reset.".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.make_move(self.selected_column) {
            Ok(_) => match self.engine.status() {
                GameStatus::Won => {
                    if let Some(winner) = self.engine.winner() {
                        self.message =
                            Some(format!("{} wins! Press 'n' for a new game.", winner.name()));
                    }
                }
                GameStatus::Draw => {
                    self.message = Some("It's a draw! Press 'n' for a new game.".to_string());
                }
                GameStatus::Playing => {}
            },
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'n' for a new game.".to_string());
            }
        }
    }

    /// Take back the last move, if the engine still allows it
    fn undo(&mut self) {
        if self.engine.undo_last_move() {
            self.message = Some(format!(
                "Move undone — {} to play.",
                self.engine.current_player().name()
            ));
        } else {
            self.message = Some("Nothing to undo.".to_string());
        }
    }

    /// Restart immediately for short games; ask first once enough moves
    /// have been played
    fn request_restart(&mut self) {
        if self.engine.move_history().len() >= self.config.restart_confirm_threshold {
            self.confirming_restart = true;
        } else {
            self.engine.restart_game();
            self.message = Some("Game restarted.".to_string());
        }
    }

    fn resolve_restart_confirmation(&mut self, key: KeyEvent) {
        self.confirming_restart = false;
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.engine.restart_game();
                self.message = Some("Game restarted.".to_string());
            }
            _ => {
                self.message = Some("Restart cancelled.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            self.confirming_restart,
            self.config.highlight_winning_cells,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = App::default();
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_digit_keys_jump_selection() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Char('7')));
        assert_eq!(app.selected_column, 6);
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_restart_below_threshold_skips_confirmation() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('r')));

        assert!(!app.confirming_restart);
        assert!(app.engine.move_history().is_empty());
    }

    #[test]
    fn test_restart_at_threshold_asks_and_cancels() {
        let mut app = App::default();
        for _ in 0..3 {
            app.handle_key(press(KeyCode::Enter));
            app.handle_key(press(KeyCode::Right));
        }
        assert_eq!(app.engine.move_history().len(), 3);

        app.handle_key(press(KeyCode::Char('r')));
        assert!(app.confirming_restart);

        // Any non-'y' key cancels and leaves the game alone.
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.confirming_restart);
        assert!(!app.should_quit);
        assert_eq!(app.engine.move_history().len(), 3);

        app.handle_key(press(KeyCode::Char('r')));
        app.handle_key(press(KeyCode::Char('y')));
        assert!(app.engine.move_history().is_empty());
    }

    #[test]
    fn test_undo_key_reports_when_nothing_to_undo() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Char('u')));
        assert_eq!(app.message.as_deref(), Some("Nothing to undo."));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Char('1')));
        for _ in 0..6 {
            app.handle_key(press(KeyCode::Enter));
        }
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }
}
