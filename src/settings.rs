use crate::Balance;
use crate::game::GameState;
use chrono::NaiveTime;

/// Embed accent for replies.
pub const BLUE: u32 = 0x5865f2;
/// Embed accent for dealer announcements.
pub const RED: u32 = 0xff5001;

/// Wall-clock times, in the daemon's local zone, at which each street is
/// revealed every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub flop: NaiveTime,
    pub turn: NaiveTime,
    pub river: NaiveTime,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            flop: NaiveTime::MIN,
            turn: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN),
            river: NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Game tunables shared by command handlers and scheduled jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub starting_balance: Balance,
    /// seeded into an empty database at startup
    pub initial: GameState,
    pub dealer_channel: Option<String>,
    pub schedule: Schedule,
}
