use fb_core::{Color, DEFAULT_INTERVAL_MS, Millis, Pattern};

/// How often the feedback task polls the scheduler.
pub const FB_POLL_PERIOD_MS: u64 = 10;
/// Half-cycle length used for every feedback pattern.
pub const FB_INTERVAL_MS: Millis = DEFAULT_INTERVAL_MS;
/// Ignore further presses for this long after one is accepted.
pub const FB_BUTTON_HOLDOFF_MS: u64 = 250;
pub const FB_HEARTBEAT_SECS: u64 = 60;

pub static FB_STARTUP_PATTERN: Pattern = Pattern::new(1, Color::GREEN).interval(FB_INTERVAL_MS);
pub static FB_BUTTON_PATTERN: Pattern = Pattern::new(2, Color::BLUE);
pub static FB_HEARTBEAT_COLOR: Color = Color::GREEN;
