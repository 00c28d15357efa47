use crate::Balance;
use crate::Day;
use crate::game::GameState;
use crate::game::Phase;
use crate::settings::Schedule;
use crate::settings::Settings;
use chrono::NaiveTime;
use clap::Parser;

/// Process configuration, read from flags or the environment.
///
/// Binaries load `.env` with [`dotenvy`] before parsing, so every field
/// can live there instead of on the command line.
#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
    /// bot token; unused by the core but required so a misconfigured
    /// deployment fails at startup rather than at first message
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub discord_token: String,
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: String,
    /// channel that receives flop/turn/river announcements
    #[arg(long, env = "DEALER_CHANNEL")]
    pub dealer_channel: Option<String>,
    #[arg(long, env = "STARTING_BALANCE", default_value_t = 0)]
    pub starting_balance: Balance,
    #[arg(long, env = "POOL_SIZE", default_value_t = 8)]
    pub pool_size: usize,
    #[arg(long, env = "INITIAL_DAY", default_value_t = 0)]
    pub initial_day: Day,
    #[arg(long, env = "INITIAL_PHASE", default_value = "0", value_parser = phase)]
    pub initial_phase: Phase,
    #[arg(long, env = "FLOP_AT", default_value = "00:00", value_parser = clock)]
    pub flop_at: NaiveTime,
    #[arg(long, env = "TURN_AT", default_value = "12:00", value_parser = clock)]
    pub turn_at: NaiveTime,
    #[arg(long, env = "RIVER_AT", default_value = "23:00", value_parser = clock)]
    pub river_at: NaiveTime,
}

impl Config {
    /// Loads `.env` if present, then parses flags and environment.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("no .env loaded: {}", e);
        }
        Self::parse()
    }
    pub fn settings(&self) -> Settings {
        Settings {
            starting_balance: self.starting_balance,
            initial: GameState::new(self.initial_day, self.initial_phase),
            dealer_channel: self.dealer_channel.clone(),
            schedule: Schedule {
                flop: self.flop_at,
                turn: self.turn_at,
                river: self.river_at,
            },
        }
    }
}

fn phase(s: &str) -> Result<Phase, String> {
    s.trim()
        .parse::<i16>()
        .map_err(|e| e.to_string())
        .and_then(|n| Phase::try_from(n).map_err(|e| e.to_string()))
}

/// `HH:MM` or `HH:MM:SS`
fn clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M"))
        .map_err(|e| format!("invalid time of day {:?}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "ayup",
        "--database-url",
        "postgres://localhost/ayup",
        "--discord-token",
        "token",
        "--client-id",
        "1245583548258451516",
    ];

    #[test]
    fn clock_accepts_minutes_and_seconds() {
        assert_eq!(clock("12:00"), Ok(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
        assert_eq!(clock("23:30:15"), Ok(NaiveTime::from_hms_opt(23, 30, 15).unwrap()));
        assert!(clock("25:00").is_err());
        assert!(clock("noon").is_err());
    }

    #[test]
    fn phase_accepts_persisted_integers() {
        assert_eq!(phase("2"), Ok(Phase::TurnShown));
        assert!(phase("3").is_err());
        assert!(phase("flop").is_err());
    }

    #[test]
    fn defaults_match_daily_schedule() {
        let config = Config::try_parse_from(REQUIRED).unwrap();
        let settings = config.settings();
        assert_eq!(config.pool_size, 8);
        assert_eq!(settings.starting_balance, 0);
        assert_eq!(settings.initial, GameState::default());
        assert_eq!(settings.schedule, Schedule::default());
    }

    #[test]
    fn overrides_reach_settings() {
        let args = REQUIRED.into_iter().chain([
            "--initial-day",
            "41",
            "--initial-phase",
            "1",
            "--river-at",
            "22:45",
            "--dealer-channel",
            "1395227013765267566",
        ]);
        let settings = Config::try_parse_from(args).unwrap().settings();
        assert_eq!(settings.initial, GameState::new(41, Phase::FlopShown));
        assert_eq!(settings.schedule.river, NaiveTime::from_hms_opt(22, 45, 0).unwrap());
        assert_eq!(settings.dealer_channel.as_deref(), Some("1395227013765267566"));
    }
}
