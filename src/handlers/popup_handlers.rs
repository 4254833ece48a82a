use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    app::App,
    popup::{Popup, PopupKind},
};

impl App {
    pub fn handle_popups(&mut self, key_event: KeyEvent, popup: Popup) {
        match popup.kind {
            PopupKind::YesNoPopup(callback) => match key_event.code {
                KeyCode::Char('y') => {
                    self.clear_popup();
                    callback(self);
                }
                KeyCode::Char('n') | KeyCode::Esc => self.clear_popup(),
                _ => self.set_popup(Popup {
                    message: popup.message,
                    kind: PopupKind::YesNoPopup(callback),
                }),
            },
            PopupKind::ErrorPopup(_) => self.clear_popup(),
        }
    }
}
