//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Apply one key press. Release and repeat events are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => {
                if let Err(e) = self.open_selected() {
                    tracing::warn!("Failed to open selected page: {}", e);
                }
            }
            KeyCode::Left | KeyCode::Char('b') => {
                self.back();
            }
            KeyCode::Right | KeyCode::Char('f') => {
                self.forward();
            }
            KeyCode::Char('d') => {
                let dark = self.toggle_dark();
                tracing::debug!("Key: d - dark mode {}", if dark { "on" } else { "off" });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockColorScheme, MockViewport};
    use crate::config::SiteConfig;
    use crate::router::Page;
    use std::rc::Rc;

    fn app() -> App {
        App::new(
            SiteConfig::default(),
            MockViewport::shared(1024),
            Rc::new(MockColorScheme::new(true)),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(!a.is_running());

        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!a.is_running());
    }

    #[test]
    fn test_navigation_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('j'));
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Char('k'));
        press(&mut a, KeyCode::Enter);
        assert_eq!(a.current_page(), Page::GettingStarted);

        press(&mut a, KeyCode::Char('b'));
        assert_eq!(a.current_page(), Page::Home);
        press(&mut a, KeyCode::Right);
        assert_eq!(a.current_page(), Page::GettingStarted);
    }

    #[test]
    fn test_dark_toggle_key() {
        let mut a = app();
        assert!(a.dark_mode().is_dark());
        press(&mut a, KeyCode::Char('d'));
        assert!(!a.dark_mode().is_dark());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut a = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        a.handle_key(key);
        assert!(a.is_running());
    }
}
