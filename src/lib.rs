//! Ayup Hold 'Em: a daily, phase-based Hold 'Em mini-game.
//!
//! Users draw hole cards, a shared board advances through flop, turn and
//! river on a wall-clock schedule, and users view their hand against
//! whatever part of the board has been revealed.
//!
//! ## Modules
//!
//! - [`cards`]: card and tarot registries
//! - [`game`]: the day/phase state machine and hand assembly
//! - [`save`]: the [`Store`](save::Store) contract and its backends
//! - [`dealer`]: the scheduled flop/turn/river jobs
//! - [`commands`]: `/ping`, `/start`, `/draw`, `/hand`
pub mod cards;
pub mod commands;
pub mod dealer;
pub mod game;
pub mod save;

mod embed;
mod error;
mod service;
mod settings;

pub use embed::*;
pub use error::*;
pub use service::*;
pub use settings::*;

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
pub use config::*;

/// Game day counter. Starts at the configured initial day, +1 per flop.
pub type Day = i32;
/// Chip balance held by a user.
pub type Balance = i32;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Err(e) => log::error!("failed to listen for interrupt: {}", e),
            Ok(()) => {
                println!();
                log::warn!("interrupt received, exiting immediately");
                std::process::exit(0);
            }
        }
    });
}
