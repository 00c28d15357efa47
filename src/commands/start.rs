use super::Caller;
use crate::Result;
use crate::embed::Embed;
use crate::embed::Reply;
use crate::service::Service;
use crate::settings::BLUE;

/// Creates the caller's profile if it is missing, then walks them
/// through the tutorial.
pub async fn execute(service: &Service, caller: &Caller) -> Result<Reply> {
    if service.get_user(&caller.uid).await?.is_none() {
        if let Err(e) = service.init_user(&caller.uid).await {
            log::error!("could not set up account for {}: {}", caller.uid, e);
            let embed = Embed::new(BLUE).description("Your account could not be set up.");
            return Ok(Reply::embed(embed).ephemeral());
        }
    }
    Ok(Reply::pages(tutorial()).ephemeral())
}

const PAGES: [(&str, &str); 4] = [
    (
        "Welcome",
        "Welcome to Ayup Hold 'Em! Every day a new board is dealt and every player holds two hole cards. Your profile is ready.",
    ),
    (
        "The Daily Board",
        "The dealer reveals the flop at midnight, the turn at noon and the river at 11 PM. Announcements land in the dealer channel.",
    ),
    (
        "Your Hole Cards",
        "Use /draw to see your hole cards for today. Everyone with a profile is dealt fresh cards when the flop comes out.",
    ),
    (
        "Your Hand",
        "Use /hand once the flop is out to see your hole cards, the revealed community cards and any tarot cards you hold.",
    ),
];

fn tutorial() -> Vec<Embed> {
    PAGES
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            Embed::new(BLUE)
                .title(format!("Tutorial: {}", title))
                .description(*description)
                .footer(format!("Page {}/{}", i + 1, PAGES.len()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::save::Memory;
    use crate::settings::Settings;
    use std::sync::Arc;

    fn service() -> Service {
        let settings = Settings {
            starting_balance: 100,
            ..Settings::default()
        };
        Service::new(Arc::new(Memory::seeded(GameState::default())), settings)
    }

    #[tokio::test]
    async fn creates_profile_once() {
        let service = service();
        let caller = Caller::new("9", "ayup");
        let first = execute(&service, &caller).await.unwrap();
        let again = execute(&service, &caller).await.unwrap();
        assert_eq!(first, again);
        assert_eq!(service.get_user("9").await.unwrap().unwrap().balance, 100);
    }

    #[tokio::test]
    async fn tutorial_is_private_and_paged() {
        let reply = execute(&service(), &Caller::new("9", "ayup")).await.unwrap();
        assert!(reply.ephemeral);
        assert_eq!(reply.embeds.len(), PAGES.len());
        assert_eq!(reply.embeds[0].footer.as_deref(), Some("Page 1/4"));
        assert!(reply.embeds.iter().all(|e| e.color == BLUE));
    }
}
