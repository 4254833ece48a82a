use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
    Frame,
};

use super::{
    main_tab::MainTab,
    overlay::LockScreen,
    ui_utils::{render_footer, HintProvider},
};
use crate::app::App;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(overlay) = self.breaklock().overlay() {
            LockScreen::new(overlay).render(area, buf);
        } else {
            let [main_area, footer_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
            let tab = MainTab::new(self.breaklock(), self.settings(), self.mode());
            let hints = tab.provide_hints();
            tab.render(main_area, buf);
            render_footer(&hints, footer_area, buf);
        }
        if let Some(popup) = self.popup() {
            popup.render(area, buf);
        }
    }
}
impl App {
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use crate::{
        app::{App, Event},
        breaklock::Breaklock,
        settings::Settings,
        timers::helper_structs::{CountdownKind, CounterEvent},
    };

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(settings: Settings) -> (App, mpsc::Receiver<CounterEvent>) {
        let (counter_tx, counter_rx) = mpsc::channel(32);
        let breaklock = Breaklock::new(counter_tx, &settings);
        (App::new(breaklock, settings), counter_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn idle_main_screen() {
        let (app, _rx) = app(Settings::default());
        let text = screen(&app, 80, 24);
        assert!(text.contains("Break Lock"));
        assert!(text.contains("Status: not started"));
        assert!(text.contains("Remaining: --"));
        assert!(text.contains("How to use"));
        assert!(text.contains("30"));
    }

    #[tokio::test(start_paused = true)]
    async fn running_main_screen_without_instructions() {
        let mut settings = Settings::default();
        settings.ui.show_instructions = false;
        let (mut app, _rx) = app(settings);
        app.handle_event(Event::KeyPress(KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
        )));
        let text = screen(&app, 80, 24);
        assert!(text.contains("Status: counting"));
        assert!(text.contains("Remaining: 30:00"));
        assert!(!text.contains("How to use"));
    }

    #[tokio::test(start_paused = true)]
    async fn overlay_covers_the_screen() {
        let mut settings = Settings::default();
        settings.ui.lock_message = "Go stretch".to_string();
        let (mut app, mut rx) = app(settings);
        app.breaklock_mut().set_duration_input("1");
        app.handle_event(Event::KeyPress(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
        )));
        while let Some(event) = rx.recv().await {
            app.handle_event(Event::Counter(event));
            if matches!(event, CounterEvent::Finished { kind: CountdownKind::Work, .. }) {
                break;
            }
        }

        // too small for the block font, the plain text is used
        let text = screen(&app, 40, 10);
        assert!(text.contains("Go stretch"));
        assert!(text.contains("5:00"));
        assert!(!text.contains("Status:"));

        let text = screen(&app, 80, 24);
        assert!(text.contains("Go stretch"));
        assert!(text.contains("█"));
        assert!(text.contains("Unlock now"));
    }

    #[tokio::test(start_paused = true)]
    async fn error_popup_is_drawn_over_main_screen() {
        let (mut app, _rx) = app(Settings::default());
        app.breaklock_mut().set_duration_input("abc");
        app.handle_event(Event::KeyPress(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
        )));
        let text = screen(&app, 100, 30);
        assert!(text.contains("Error"));
        assert!(text.contains("Press any key to continue"));
    }
}
