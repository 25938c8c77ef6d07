use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

use crate::games::breakout::{Breakout, Outcome};
use crate::games::Game;

// Only bounded so the name fits the prompt overlay.
const MAX_NAME_LEN: usize = 16;
const DEFAULT_NAME: &str = "Player";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen {
    NameEntry,
    Playing,
    Finished(Outcome),
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub breakout: Breakout,
    pub player_name: String,
    pub name_buffer: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::NameEntry,
            breakout: Breakout::new(),
            player_name: DEFAULT_NAME.to_string(),
            name_buffer: String::new(),
        }
    }

    pub fn on_tick(&mut self) {
        // The game only runs between the name prompt and the final dialog
        if self.screen != Screen::Playing {
            return;
        }

        self.breakout.update();
        if self.breakout.is_game_over() {
            if let Some(outcome) = self.breakout.outcome() {
                self.screen = Screen::Finished(outcome);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::NameEntry => self.handle_name_input(key),
            Screen::Playing => self.breakout.handle_input(key),
            Screen::Finished(_) => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') | KeyCode::Char('Q')
                ) {
                    self.should_quit = true;
                }
            }
        }
    }

    /// The message shown in the end-of-game dialog, once the session is over.
    pub fn final_message(&self) -> Option<String> {
        match self.screen {
            Screen::Finished(Outcome::Lost { score }) => {
                Some(format!("Game Over!\nYour score is: {}", score))
            }
            Screen::Finished(Outcome::Won { score }) => Some(format!(
                "Congratulations, {}! You won!\nYour score is: {}",
                self.player_name, score
            )),
            _ => None,
        }
    }

    fn handle_name_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let name = resolve_player_name(&self.name_buffer);
                self.start(name);
            }
            KeyCode::Esc => self.start(DEFAULT_NAME.to_string()),
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            KeyCode::Char(c) => {
                let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
                if plain && self.name_buffer.chars().count() < MAX_NAME_LEN && !c.is_control() {
                    self.name_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, name: String) {
        info!("session started for {:?}", name);
        self.player_name = name;
        self.name_buffer.clear();
        self.screen = Screen::Playing;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank names fall back to the default rather than being rejected.
pub fn resolve_player_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::breakout::Ball;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        app.on_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_resolve_player_name() {
        assert_eq!(resolve_player_name(""), "Player");
        assert_eq!(resolve_player_name("   "), "Player");
        assert_eq!(resolve_player_name("  Ada "), "Ada");
    }

    #[test]
    fn test_name_entry_starts_game() {
        let mut app = App::new();
        assert_eq!(app.screen, Screen::NameEntry);
        type_name(&mut app, "Ada");
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.player_name, "Ada");
        assert!(app.name_buffer.is_empty());
    }

    #[test]
    fn test_blank_name_defaults() {
        let mut app = App::new();
        type_name(&mut app, "  ");
        assert_eq!(app.player_name, "Player");

        let mut app = App::new();
        app.on_key(key(KeyCode::Char('x')));
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.player_name, "Player");
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn test_name_editing() {
        let mut app = App::new();
        for c in "Bobby".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        app.on_key(key(KeyCode::Backspace));
        app.on_key(key(KeyCode::Backspace));
        assert_eq!(app.name_buffer, "Bob");

        for _ in 0..40 {
            app.on_key(key(KeyCode::Char('z')));
        }
        assert_eq!(app.name_buffer.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_name_ignores_modified_keys() {
        let mut app = App::new();
        app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.on_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        app.on_key(key(KeyCode::Char('b')));
        assert_eq!(app.name_buffer, "Ab");
    }

    #[test]
    fn test_no_ticks_during_name_entry() {
        let mut app = App::new();
        let ball = app.breakout.ball;
        app.on_tick();
        assert_eq!(app.breakout.ball, ball);
        // Arrow keys belong to the prompt, not the paddle
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.breakout.paddle.x, 350);
    }

    #[test]
    fn test_ticks_move_ball_while_playing() {
        let mut app = App::new();
        type_name(&mut app, "Ada");
        app.on_tick();
        assert_eq!((app.breakout.ball.x, app.breakout.ball.y), (349, 478));
    }

    #[test]
    fn test_loss_shows_dialog_then_quits() {
        let mut app = App::new();
        type_name(&mut app, "Ada");
        app.breakout.run.lives = 1;
        app.breakout.ball = Ball { x: 700, y: 598, dx: 1, dy: 2 };
        app.on_tick();
        assert_eq!(app.screen, Screen::Finished(Outcome::Lost { score: 0 }));
        assert_eq!(app.final_message().unwrap(), "Game Over!\nYour score is: 0");
        assert!(!app.should_quit);

        app.on_key(key(KeyCode::Left));
        assert!(!app.should_quit);
        app.on_key(key(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn test_win_message_names_player() {
        let mut app = App::new();
        type_name(&mut app, "Ada");
        app.screen = Screen::Finished(Outcome::Won { score: 500 });
        assert_eq!(
            app.final_message().unwrap(),
            "Congratulations, Ada! You won!\nYour score is: 500"
        );
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_pause_button_toggles() {
        let mut app = App::new();
        type_name(&mut app, "Ada");
        app.on_key(key(KeyCode::Char('p')));
        assert!(app.breakout.is_paused());
        app.on_tick();
        assert_eq!(app.breakout.ball, Ball::initial());
        app.on_key(key(KeyCode::Char('p')));
        assert!(!app.breakout.is_paused());
    }
}
