use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::{
    app::{App, Event},
    popup::Popup,
    settings::Mode,
    timers::helper_structs::TimerState,
};

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::KeyPress(key) => self.handle_key_event(key),
            Event::Counter(counter_event) => {
                if let Err(e) = self.breaklock_mut().handle_counter_event(counter_event) {
                    warn!(error = %e, "counter event failed");
                    self.set_popup(e.into());
                }
                if self.breaklock().state() == TimerState::Locked {
                    self.set_mode(Mode::Normal);
                }
            }
            Event::TerminalEvent => {}
            Event::InputClosed => {
                warn!("terminal input closed");
                self.exit();
            }
        }
    }
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // global
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.exit();
            return;
        }
        if let Some(popup) = self.take_popup() {
            self.handle_popups(key_event, popup);
            return;
        }
        let locked = self.breaklock().state() == TimerState::Locked;
        if key_event.code == KeyCode::Char('Q') && (locked || self.mode() == Mode::Normal) {
            self.ask_quit();
            return;
        }
        if locked {
            self.handle_overlay(key_event);
            return;
        }
        match self.mode() {
            Mode::Normal => self.handle_main_normal(key_event),
            Mode::Input => self.handle_main_input(key_event),
        }
    }
    fn ask_quit(&mut self) {
        if self.breaklock().is_active() {
            self.set_popup(Popup::yes_no(
                "The break timer is still running. Quit anyway?".to_string(),
                Box::new(App::exit),
            ));
        } else {
            self.exit();
        }
    }
}
