use tracing::{debug, info, warn};

use crate::{
    breaklock::Breaklock,
    error::Result,
    timers::{
        helper_structs::{CountdownKind, TimerState},
        timer_traits::format_lock_time,
        work_timer::WorkDuration,
    },
    LOCK_DURATION,
};

/// What the full screen overlay shows while the user is resting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOverlay {
    remaining: u64,
    message: String,
}
impl LockOverlay {
    pub fn remaining_text(&self) -> String {
        format_lock_time(self.remaining)
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone)]
pub struct LockController {
    overlay: Option<LockOverlay>,
    message: String,
    breaks_taken: u32,
}
impl LockController {
    pub fn new(message: String) -> Self {
        Self {
            overlay: None,
            message,
            breaks_taken: 0,
        }
    }
    fn open_overlay(&mut self) {
        self.overlay = Some(LockOverlay {
            remaining: LOCK_DURATION,
            message: self.message.clone(),
        });
    }
    /// Returns whether an overlay was actually open.
    pub(crate) fn close_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }
    pub(crate) fn tick(&mut self, remaining: u64) {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.remaining = remaining,
            None => debug!(remaining, "lock tick without an overlay"),
        }
    }
    pub fn overlay(&self) -> Option<&LockOverlay> {
        self.overlay.as_ref()
    }
    /// Breaks that ran their full length. Early unlocks are not counted.
    pub fn breaks_taken(&self) -> u32 {
        self.breaks_taken
    }
    pub(crate) fn record_break(&mut self) {
        self.breaks_taken += 1;
    }
}

impl Breaklock {
    /// Work period is over: show the overlay and start the rest countdown.
    pub(crate) fn engage(&mut self) {
        if self.state() != TimerState::Running {
            debug!(state = %self.state(), "engage ignored");
            return;
        }
        self.work_timer.expire();
        self.set_state(TimerState::Locked);
        self.lock.open_overlay();
        self.spawn_countdown(CountdownKind::Lock, LOCK_DURATION);
        info!(seconds = LOCK_DURATION, "screen locked");
    }

    /// Manual unlock from the overlay. No-op unless locked.
    pub fn dismiss(&mut self) -> Result<()> {
        if self.state() != TimerState::Locked {
            return Ok(());
        }
        info!("lock dismissed early");
        self.disengage()
    }

    /// Tears the overlay down and, while the session is still on, starts the
    /// next work period from whatever the duration field holds now.
    pub(crate) fn disengage(&mut self) -> Result<()> {
        if self.state() != TimerState::Locked {
            return Ok(());
        }
        self.cancel_countdown();
        self.lock.close_overlay();
        match self.duration_input().parse::<WorkDuration>() {
            Ok(duration) => {
                self.start_work(duration);
                info!(minutes = duration.minutes(), "work timer restarted");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "cannot restart work timer, stopping");
                self.stop();
                Err(e.into())
            }
        }
    }
}
