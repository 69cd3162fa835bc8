//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_timeline::{GameEvent, GameState, GameStore, Position};
use tracing::debug;

/// Which pane receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board cursor.
    Board,
    /// The history list.
    History,
}

/// Main application state.
pub struct App {
    store: GameStore,
    cursor: Position,
    focus: Focus,
    selected: usize,
    last_action: Rc<RefCell<Option<String>>>,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_cell_numbers: bool) -> Self {
        let mut store = GameStore::new();
        let last_action = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last_action);
        store.subscribe(Box::new(move |event: &GameEvent, state: &GameState| {
            *sink.borrow_mut() = Some(describe(event, state));
        }));

        Self {
            store,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            last_action,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Gives mutable access to the store so more observers can subscribe.
    pub fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Description of the last applied change, if any.
    pub fn last_action(&self) -> Option<String> {
        self.last_action.borrow().clone()
    }

    /// Whether empty cells show their key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('[') => {
                if let Some(target) = self.state().current_move().checked_sub(1) {
                    self.jump(target);
                }
            }
            KeyCode::Char(']') => self.jump(self.state().current_move() + 1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.state().history_len()),
            KeyCode::Char(' ') if self.focus == Focus::Board => self.play(self.cursor.index()),
            KeyCode::Char(c) => {
                if let Some(cell) = digit_cell(c) {
                    self.play(cell);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.play(self.cursor.index()),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.state().history_len());
            }
            KeyCode::Enter => self.jump(self.selected),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.state().current_move();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn play(&mut self, cell: usize) {
        if let Err(e) = self.store.play(cell) {
            debug!(cell, error = %e, "Move ignored");
        }
        self.selected = self.state().current_move();
    }

    fn jump(&mut self, move_number: usize) {
        match self.store.jump_to(move_number) {
            Ok(()) => self.selected = move_number,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }
}

fn describe(event: &GameEvent, state: &GameState) -> String {
    match event {
        GameEvent::Played { position, mv } => {
            format!("{} played {}", mv.player, position.label())
        }
        GameEvent::Jumped { to: 0, .. } => "Back to game start".to_string(),
        GameEvent::Jumped { to, .. } => {
            format!("Viewing move #{} of {}", to, state.history_len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_timeline::Mark;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.state().current_value(0), Some(Mark::X));
        assert_eq!(app.state().current_value(4), Some(Mark::O));
        assert_eq!(app.last_action().as_deref(), Some("O played Center"));
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.state().current_value(0), Some(Mark::X));
    }

    #[test]
    fn test_ignored_move_keeps_last_action() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.state().current_move(), 1);
        assert_eq!(app.last_action().as_deref(), Some("X played Center"));
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('[')]);
        assert_eq!(app.state().current_move(), 1);
        assert_eq!(app.last_action().as_deref(), Some("Viewing move #1 of 2"));

        press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(app.state().current_move(), 2);

        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.state().current_move(), 0);
        assert_eq!(app.last_action().as_deref(), Some("Back to game start"));

        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.state().current_move(), 0);
    }

    #[test]
    fn test_history_navigation_and_branch() {
        let mut app = App::new(true);
        press(&mut app, &[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('4'),
            KeyCode::Char('5'),
            KeyCode::Tab,
        ]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 4);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.state().current_move(), 2);
        assert_eq!(app.state().history_len(), 4);

        press(&mut app, &[KeyCode::Char('6')]);
        assert_eq!(app.state().history_len(), 3);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(true);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
