//! The slash-command surface: `/ping`, `/start`, `/draw`, `/hand`.
//!
//! Handlers take a [`Service`] and the [`Caller`] and answer with a
//! [`Reply`]; delivering it is the transport's business.
pub mod draw;
pub mod hand;
pub mod ping;
pub mod start;

use crate::embed::Embed;
use crate::embed::Reply;
use crate::service::Service;
use crate::settings::RED;

/// Whoever invoked a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub uid: String,
    /// display name used in replies
    pub name: String,
}

impl Caller {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// Every registered command.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    Ping,
    Start,
    Draw,
    Hand,
}

impl Command {
    pub const fn all() -> &'static [Self] {
        &[Self::Ping, Self::Start, Self::Draw, Self::Hand]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Start => "start",
            Self::Draw => "draw",
            Self::Hand => "hand",
        }
    }
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ping => "Replies with Pong!",
            Self::Start => "Creates a profile for you and/or starts a tutorial.",
            Self::Draw => "Draws your daily hole cards.",
            Self::Hand => "Displays your daily hole cards and tarot card arrangement.",
        }
    }

    /// Runs the command. Unexpected failures are logged and answered
    /// with a generic, private apology.
    pub async fn execute(&self, service: &Service, caller: &Caller) -> Reply {
        let result = match self {
            Self::Ping => Ok(ping::execute()),
            Self::Start => start::execute(service, caller).await,
            Self::Draw => draw::execute(service, caller).await,
            Self::Hand => hand::execute(service, caller).await,
        };
        match result {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("/{} failed for {}: {}", self, caller.uid, e);
                Reply::text("There was an error while executing this command!").ephemeral()
            }
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let name = s.trim().trim_start_matches('/');
        Self::all()
            .iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| format!("unknown command: {}", s))
    }
}

/// A private, red-accented refusal.
fn refuse(message: impl Into<String>) -> Reply {
    Reply::embed(Embed::new(RED).description(message)).ephemeral()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;
    use crate::settings::Settings;
    use std::sync::Arc;

    #[test]
    fn names_resolve_with_or_without_slash() {
        for command in Command::all() {
            assert_eq!(Command::try_from(command.name()), Ok(*command));
            assert_eq!(Command::try_from(format!("/{}", command).as_str()), Ok(*command));
        }
        assert!(Command::try_from("/fold").is_err());
    }

    #[tokio::test]
    async fn store_failures_become_generic_error() {
        // an unseeded store cannot answer for the game state
        let service = Service::new(Arc::new(Memory::new()), Settings::default());
        let caller = Caller::new("1", "ayup");
        let reply = Command::Hand.execute(&service, &caller).await;
        assert_eq!(
            reply.content.as_deref(),
            Some("There was an error while executing this command!")
        );
        assert!(reply.ephemeral);
    }

    #[tokio::test]
    async fn ping_never_touches_the_store() {
        let service = Service::new(Arc::new(Memory::new()), Settings::default());
        let reply = Command::Ping.execute(&service, &Caller::new("1", "ayup")).await;
        assert_eq!(reply.content.as_deref(), Some("Pong!"));
    }
}
