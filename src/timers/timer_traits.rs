use std::fmt::Display;

use super::helper_structs::{CountdownKind, CounterEvent, TimerState};

impl Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerState::Idle => write!(f, "not started"),
            TimerState::Running => write!(f, "counting"),
            TimerState::Locked => write!(f, "locked"),
        }
    }
}

impl Display for CountdownKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownKind::Work => write!(f, "work"),
            CountdownKind::Lock => write!(f, "lock"),
        }
    }
}

impl CounterEvent {
    pub fn id(&self) -> super::helper_structs::CountdownId {
        match self {
            CounterEvent::Tick { id, .. } | CounterEvent::Finished { id, .. } => *id,
        }
    }
}

/// `MM:SS` with zero padded minutes, used on the main screen.
pub fn format_work_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `M:SS`, used on the lock overlay.
pub fn format_lock_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_time_pads_minutes() {
        assert_eq!(format_work_time(1800), "30:00");
        assert_eq!(format_work_time(61), "01:01");
        assert_eq!(format_work_time(6000), "100:00");
    }

    #[test]
    fn lock_time_does_not_pad_minutes() {
        assert_eq!(format_lock_time(300), "5:00");
        assert_eq!(format_lock_time(9), "0:09");
    }

    #[test]
    fn status_text() {
        assert_eq!(TimerState::Idle.to_string(), "not started");
        assert_eq!(TimerState::Running.to_string(), "counting");
        assert_eq!(TimerState::Locked.to_string(), "locked");
    }
}
