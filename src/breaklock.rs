use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{info, trace, warn};

use crate::{
    app::Event,
    error::Result,
    lock::{LockController, LockOverlay},
    settings::Settings,
    timers::{
        countdown::Countdown,
        helper_structs::{ActiveCountdown, CountdownId, CountdownKind, CounterEvent, TimerState},
        work_timer::WorkTimer,
    },
    MAX_INPUT_LEN,
};

/// Owns the timer state machine. Lives on the UI task; countdowns only talk
/// to it through `CounterEvent`s.
#[derive(Debug)]
pub struct Breaklock {
    state: TimerState,
    duration_input: String,
    pub work_timer: WorkTimer,
    pub lock: LockController,
    session: Option<CancellationToken>,
    countdown: Option<ActiveCountdown>,
    next_countdown_id: u64,
    counter_tx: Sender<CounterEvent>,
}
impl Breaklock {
    pub fn new(counter_tx: Sender<CounterEvent>, settings: &Settings) -> Self {
        Breaklock {
            state: TimerState::Idle,
            duration_input: settings.timer.default_work_minutes.to_string(),
            work_timer: WorkTimer::default(),
            lock: LockController::new(settings.ui.lock_message.clone()),
            session: None,
            countdown: None,
            next_countdown_id: 0,
            counter_tx,
        }
    }

    /// Cancels whatever is running and goes back to idle. Safe in any state.
    pub fn stop(&mut self) {
        if self.state == TimerState::Idle && self.session.is_none() {
            return;
        }
        if let Some(session) = self.session.take() {
            session.cancel();
        }
        self.cancel_countdown();
        if self.lock.close_overlay() {
            info!("overlay closed by stop");
        }
        self.work_timer.clear();
        self.state = TimerState::Idle;
        info!("timer stopped");
    }

    pub fn handle_counter_event(&mut self, event: CounterEvent) -> Result<()> {
        let active = self.countdown.as_ref().map(ActiveCountdown::id);
        if active != Some(event.id()) {
            trace!(?event, ?active, "dropping stale counter event");
            return Ok(());
        }
        match event {
            CounterEvent::Tick {
                kind: CountdownKind::Work,
                remaining,
                ..
            } => self.work_timer.tick(remaining),
            CounterEvent::Tick {
                kind: CountdownKind::Lock,
                remaining,
                ..
            } => self.lock.tick(remaining),
            CounterEvent::Finished {
                kind: CountdownKind::Work,
                ..
            } => {
                self.countdown = None;
                self.engage();
            }
            CounterEvent::Finished {
                kind: CountdownKind::Lock,
                ..
            } => {
                self.countdown = None;
                self.lock.record_break();
                info!(breaks = self.lock.breaks_taken(), "rest period over");
                return self.disengage();
            }
        }
        Ok(())
    }

    /// Relays countdown output into the app's event queue until cancelled.
    pub async fn forward_counter_events(
        counter_rx: &mut Receiver<CounterEvent>,
        tx: Sender<Event>,
        cancel_token: CancellationToken,
    ) {
        loop {
            tokio::select! {
                event = counter_rx.recv() => {
                    match event {
                        Some(event) => {
                            if tx.send(Event::Counter(event)).await.is_err() {
                                break;
                            }
                        },
                        None => break,
                    }
                }
                _ = cancel_token.cancelled() => {
                    break
                }
            }
        }
    }

    pub(crate) fn open_session(&mut self) {
        if let Some(old) = self.session.replace(CancellationToken::new()) {
            old.cancel();
        }
    }

    /// Starts a countdown, cancelling any previous one first so only one is
    /// ever alive.
    pub(crate) fn spawn_countdown(&mut self, kind: CountdownKind, seconds: u64) {
        self.cancel_countdown();
        let Some(session) = self.session.as_ref() else {
            warn!(%kind, "no active session, countdown not started");
            return;
        };
        let close = session.child_token();
        self.next_countdown_id += 1;
        let id = CountdownId(self.next_countdown_id);
        Countdown::new(id, kind, seconds).spawn(self.counter_tx.clone(), close.clone());
        self.countdown = Some(ActiveCountdown::new(id, kind, close));
    }

    pub(crate) fn cancel_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }
    }

    /// Whether the break cycle is switched on (started and not stopped).
    pub fn is_active(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| !session.is_cancelled())
    }

    pub fn state(&self) -> TimerState {
        self.state
    }
    pub(crate) fn set_state(&mut self, state: TimerState) {
        self.state = state;
    }
    pub fn active_countdown(&self) -> Option<&ActiveCountdown> {
        self.countdown.as_ref()
    }
    pub fn overlay(&self) -> Option<&LockOverlay> {
        self.lock.overlay()
    }

    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }
    pub fn set_duration_input(&mut self, input: impl Into<String>) {
        self.duration_input = input.into();
    }
    /// Appends to the duration field, which holds at most `MAX_INPUT_LEN` chars.
    pub fn push_input(&mut self, c: char) {
        if self.duration_input.chars().count() < MAX_INPUT_LEN {
            self.duration_input.push(c);
        }
    }
    pub fn pop_input(&mut self) {
        self.duration_input.pop();
    }
}
