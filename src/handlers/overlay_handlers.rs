use crossterm::event::{KeyCode, KeyEvent};

use crate::{app::App, error::Error};

impl App {
    /// While locked only unlock and stop get through.
    pub fn handle_overlay(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('u') | KeyCode::Enter => {
                let popup = Error::handle_error_and_consume_data(self.breaklock_mut().dismiss());
                self.set_popup_opt(popup);
            }
            KeyCode::Char('x') => self.breaklock_mut().stop(),
            _ => {}
        }
    }
}
