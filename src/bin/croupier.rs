//! Croupier Binary
//!
//! One-shot operator commands: inspect or correct the game state, run a
//! street by hand, or invoke a player command on someone's behalf.
//!
//! Examples: `croupier state`, `croupier set-state 12 0`,
//! `croupier deal turn`, `croupier hand 1234 someone`

use ayup_holdem::commands::Caller;
use ayup_holdem::commands::Command;
use ayup_holdem::dealer::Dealer;
use ayup_holdem::dealer::announce::Logger;
use ayup_holdem::game::GameState;
use ayup_holdem::game::Phase;
use ayup_holdem::game::Street;
use ayup_holdem::save::Memory;
use ayup_holdem::save::Postgres;
use ayup_holdem::save::Store;
use ayup_holdem::*;
use clap::Parser;
use clap::Subcommand;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Croupier {
    #[command(flatten)]
    config: Config,
    /// run against a throwaway in-memory store seeded with the initial state
    #[arg(long, global = true)]
    dry_run: bool,
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    #[command(about = "Print the current game state as JSON")]
    State,
    #[command(about = "Overwrite the game state", alias = "set")]
    SetState {
        #[arg(required = true)]
        day: Day,
        #[arg(required = true, help = "0 awaiting flop, 1 flop shown, 2 turn shown")]
        phase: i16,
    },
    #[command(about = "Run one street's job now")]
    Deal {
        #[arg(required = true, help = "flop, turn or river")]
        street: String,
    },
    #[command(about = "List every user as JSON")]
    Users,
    #[command(about = "Invoke a player command on behalf of a user", alias = "as")]
    Invoke {
        #[arg(required = true, help = "ping, start, draw or hand")]
        command: String,
        #[arg(required = true)]
        uid: String,
        #[arg(help = "display name, defaults to the uid")]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("no .env loaded: {}", e);
    }
    let croupier = Croupier::parse();
    log()?;
    let settings = croupier.config.settings();
    let store: Arc<dyn Store> = match croupier.dry_run {
        true => Arc::new(Memory::new()),
        false => {
            let store = Postgres::connect(&croupier.config.database_url, croupier.config.pool_size)?;
            store.migrate().await?;
            Arc::new(store)
        }
    };
    let service = Service::new(store, settings);
    service.seed_game_state().await?;
    match croupier.action {
        Action::State => {
            let state = service.get_game_state().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Action::SetState { day, phase } => {
            let state = GameState::new(day, Phase::try_from(phase)?);
            service.update_game_state(state).await?;
            log::warn!("game state manually set to {}", state);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Action::Deal { street } => {
            let street = Street::try_from(street.as_str()).map_err(anyhow::Error::msg)?;
            let announcer = Logger::from(service.settings());
            let state = Dealer::new(service, Arc::new(announcer)).run(street).await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Action::Users => {
            let users = service.store().get_users().await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        Action::Invoke { command, uid, name } => {
            let command = Command::try_from(command.as_str()).map_err(anyhow::Error::msg)?;
            let name = name.unwrap_or_else(|| uid.clone());
            let reply = command.execute(&service, &Caller::new(uid, name)).await;
            print!("{}", reply);
        }
    }
    Ok(())
}
