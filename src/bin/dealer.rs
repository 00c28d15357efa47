//! Dealer Binary
//!
//! Long-running daemon that reveals the flop, turn and river at their
//! daily wall-clock times.

use ayup_holdem::dealer::Dealer;
use ayup_holdem::dealer::announce::Logger;
use ayup_holdem::save::Postgres;
use ayup_holdem::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    log()?;
    kys();
    let store = Postgres::connect(&config.database_url, config.pool_size)?;
    store.migrate().await?;
    let service = Service::new(Arc::new(store), config.settings());
    let state = service.seed_game_state().await?;
    log::info!("dealer starting at {}", state);
    let announcer = Logger::from(service.settings());
    Dealer::new(service, Arc::new(announcer)).serve().await;
    Ok(())
}
