use crate::breaklock::Breaklock;
use crate::error::Result;
use crate::popup::Popup;
use crate::settings::{Mode, Settings};
use crate::timers::helper_structs::CounterEvent;
use crossterm::event::{self, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Debug)]
pub struct App {
    exit: bool,
    breaklock: Breaklock,
    settings: Settings,
    mode: Mode,
    popup: Option<Popup>,
}
#[derive(Debug)]
pub enum Event {
    KeyPress(KeyEvent),
    TerminalEvent,
    Counter(CounterEvent),
    InputClosed,
}
impl App {
    pub fn new(breaklock: Breaklock, settings: Settings) -> Self {
        App {
            exit: false,
            breaklock,
            settings,
            mode: Mode::Normal,
            popup: None,
        }
    }
    /// Main loop. `event_tx` is handed to the input and counter tasks only, so
    /// `rx` closes once both of them are gone.
    pub async fn run(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_tx: Sender<Event>,
        mut rx: Receiver<Event>,
        mut counter_rx: Receiver<CounterEvent>,
    ) -> Result<()> {
        let tx_inputs = event_tx.clone();
        let tx_counter = event_tx;

        let cancelation_token = CancellationToken::new();
        let input_cancel = cancelation_token.clone();
        let counter_cancel = cancelation_token.clone();

        let input_task = tokio::spawn(async move {
            if let Err(e) = App::handle_inputs(tx_inputs.clone(), input_cancel).await {
                error!(error = %e, "terminal input reader failed");
            }
            // No more keys will arrive, the main loop has to end on its own.
            let _ = tx_inputs.send(Event::InputClosed).await;
        });
        let counter_task = tokio::spawn(async move {
            Breaklock::forward_counter_events(&mut counter_rx, tx_counter, counter_cancel).await;
        });

        terminal.draw(|frame| self.draw(frame))?;
        while !self.exit {
            match rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
            terminal.draw(|frame| self.draw(frame))?;
        }
        info!("shutting down");
        self.breaklock.stop();
        cancelation_token.cancel();
        drop(rx);
        counter_task.await?;
        input_task.await?;
        Ok(())
    }

    async fn handle_inputs(
        tx: Sender<Event>,
        cancel_token: CancellationToken,
    ) -> std::io::Result<()> {
        let mut reader = EventStream::new();
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => return Ok(()),
                next = reader.next() => {
                    let forwarded = match next {
                        Some(Ok(event::Event::Key(key_event)))
                            if key_event.kind == KeyEventKind::Press =>
                        {
                            Event::KeyPress(key_event)
                        }
                        Some(Ok(event::Event::Resize(_, _))) => Event::TerminalEvent,
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => return Err(e),
                        None => return Ok(()),
                    };
                    if tx.send(forwarded).await.is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn breaklock(&self) -> &Breaklock {
        &self.breaklock
    }
    pub fn breaklock_mut(&mut self) -> &mut Breaklock {
        &mut self.breaklock
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn exit(&mut self) {
        self.exit = true;
    }
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
    pub fn take_popup(&mut self) -> Option<Popup> {
        self.popup.take()
    }
    pub fn clear_popup(&mut self) {
        self.popup = None;
    }
    pub fn set_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
    }
    pub fn set_popup_opt(&mut self, popup: Option<Popup>) {
        if popup.is_some() {
            self.popup = popup;
        }
    }
}
