use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{app::App, error::Error, settings::Mode};

impl App {
    pub fn handle_main_normal(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('i') | KeyCode::Char('e') => self.set_mode(Mode::Input),
            KeyCode::Char(' ') | KeyCode::Char('s') => self.start_timer(),
            KeyCode::Char('x') => self.breaklock_mut().stop(),
            _ => {}
        }
    }
    pub fn handle_main_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.set_mode(Mode::Normal),
            KeyCode::Enter => {
                self.set_mode(Mode::Normal);
                self.start_timer();
            }
            KeyCode::Backspace => self.breaklock_mut().pop_input(),
            KeyCode::Char(c)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.breaklock_mut().push_input(c)
            }
            _ => {}
        }
    }
    fn start_timer(&mut self) {
        let popup = Error::handle_error_and_consume_data(self.breaklock_mut().start());
        self.set_popup_opt(popup);
    }
}
