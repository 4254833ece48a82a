use std::str::FromStr;

use tracing::{debug, info};

use crate::{
    breaklock::Breaklock,
    error::{DurationError, Result},
};

use super::{
    helper_structs::{CountdownKind, TimerState},
    timer_traits::format_work_time,
};

/// Length of a work period in whole minutes, always positive.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WorkDuration(u32);

impl WorkDuration {
    pub fn new(minutes: u32) -> std::result::Result<Self, DurationError> {
        if minutes == 0 {
            return Err(DurationError::NotPositive(0));
        }
        Ok(Self(minutes))
    }
    pub fn minutes(&self) -> u32 {
        self.0
    }
    pub fn seconds(&self) -> u64 {
        u64::from(self.0) * 60
    }
}

impl FromStr for WorkDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let minutes: i64 = trimmed
            .parse()
            .map_err(|_| DurationError::NotANumber(trimmed.to_string()))?;
        if minutes <= 0 {
            return Err(DurationError::NotPositive(minutes));
        }
        u32::try_from(minutes)
            .map(WorkDuration)
            .map_err(|_| DurationError::TooLarge(minutes))
    }
}

/// Display side of the work countdown.
#[derive(Debug, Clone, Default)]
pub struct WorkTimer {
    duration: Option<WorkDuration>,
    remaining: Option<u64>,
}
impl WorkTimer {
    pub fn arm(&mut self, duration: WorkDuration) {
        self.duration = Some(duration);
        self.remaining = Some(duration.seconds());
    }
    pub fn tick(&mut self, remaining: u64) {
        self.remaining = Some(remaining);
    }
    pub fn expire(&mut self) {
        self.remaining = Some(0);
    }
    pub fn clear(&mut self) {
        self.remaining = None;
    }
    pub fn duration(&self) -> Option<WorkDuration> {
        self.duration
    }
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }
    pub fn remaining_text(&self) -> String {
        self.remaining
            .map(format_work_time)
            .unwrap_or_else(|| "--".to_string())
    }
}

impl Breaklock {
    /// Reads the duration field and begins a work countdown.
    /// Does nothing unless the timer is idle.
    pub fn start(&mut self) -> Result<()> {
        if self.state() != TimerState::Idle {
            debug!(state = %self.state(), "start ignored, timer already active");
            return Ok(());
        }
        let duration: WorkDuration = self.duration_input().parse()?;
        self.open_session();
        self.start_work(duration);
        info!(minutes = duration.minutes(), "work timer started");
        Ok(())
    }

    pub(crate) fn start_work(&mut self, duration: WorkDuration) {
        self.work_timer.arm(duration);
        self.set_state(TimerState::Running);
        self.spawn_countdown(CountdownKind::Work, duration.seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_minutes() {
        assert_eq!("30".parse::<WorkDuration>().unwrap().minutes(), 30);
        assert_eq!(" 5 ".parse::<WorkDuration>().unwrap().seconds(), 300);
        assert_eq!("+2".parse::<WorkDuration>().unwrap().minutes(), 2);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "0".parse::<WorkDuration>(),
            Err(DurationError::NotPositive(0))
        );
        assert_eq!(
            "-5".parse::<WorkDuration>(),
            Err(DurationError::NotPositive(-5))
        );
        assert_eq!(
            "abc".parse::<WorkDuration>(),
            Err(DurationError::NotANumber("abc".into()))
        );
        assert_eq!(
            "".parse::<WorkDuration>(),
            Err(DurationError::NotANumber(String::new()))
        );
        assert_eq!(
            "1.5".parse::<WorkDuration>(),
            Err(DurationError::NotANumber("1.5".into()))
        );
        assert_eq!(
            "5000000000".parse::<WorkDuration>(),
            Err(DurationError::TooLarge(5_000_000_000))
        );
    }

    #[test]
    fn work_timer_display() {
        let mut timer = WorkTimer::default();
        assert_eq!(timer.remaining_text(), "--");
        timer.arm(WorkDuration::new(25).unwrap());
        assert_eq!(timer.remaining_text(), "25:00");
        timer.tick(59);
        assert_eq!(timer.remaining_text(), "00:59");
        timer.clear();
        assert_eq!(timer.remaining(), None);
        assert!(WorkDuration::new(0).is_err());
    }
}
