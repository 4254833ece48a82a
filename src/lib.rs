pub mod app;
pub mod breaklock;
pub mod error;
pub mod handlers;
pub mod lock;
pub mod logging;
pub mod popup;
pub mod settings;
pub mod timers;
pub mod ui;

/// Rest period enforced by the lock overlay, in seconds.
pub const LOCK_DURATION: u64 = 5 * 60;
/// Initial value of the duration field when no config says otherwise (minutes).
pub const DEFAULT_WORK_MINUTES: u32 = 30;
pub const DEFAULT_LOCK_MESSAGE: &str = "Time's up! Take a 5 minute break";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const MAX_INPUT_LEN: usize = 10;
pub const APP_NAME: &str = "breaklock";
