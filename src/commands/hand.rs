use super::Caller;
use super::refuse;
use crate::Result;
use crate::cards::Card;
use crate::embed::Embed;
use crate::embed::Reply;
use crate::game::Phase;
use crate::service::Service;
use crate::settings::BLUE;

/// Shows the caller's hole cards against the revealed part of today's
/// board. Only meaningful once the flop is out.
pub async fn execute(service: &Service, caller: &Caller) -> Result<Reply> {
    let state = service.get_game_state().await?;
    if state.phase == Phase::AwaitingFlop {
        return Ok(refuse("The next game day hasn't started yet."));
    }
    if service.get_user(&caller.uid).await?.is_none() {
        return Ok(refuse(format!(
            "User {}'s profile does not exist. Use /start to get started.",
            caller.name
        )));
    }
    let Some(hand) = service.get_user_hand_on_day(&caller.uid, state.day).await? else {
        return Ok(refuse(
            "You don't have a hand for today. This is a bug, so please ask staff for help.",
        ));
    };
    let hole = hand.hole();
    let community = hand.showable(state.phase);
    let mut embed = Embed::new(BLUE)
        .title(format!("{}'s Hand for Day {}", caller.name, state.day))
        .field("Hole Cards", Card::join(&hole))
        .field("Community Cards", Card::join(community))
        .cards(&[&hole[..], community].concat());
    let tarots = hand.tarots();
    if !tarots.is_empty() {
        let names = tarots.iter().map(|t| t.name()).collect::<Vec<_>>();
        embed = embed.field("Tarot Cards", names.join(" | "));
    }
    Ok(Reply::embed(embed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;
    use crate::game::*;
    use crate::save::Memory;
    use crate::save::Store;
    use crate::settings::Settings;
    use crate::settings::RED;
    use std::sync::Arc;

    fn cards<const N: usize>(codes: [&str; N]) -> [Card; N] {
        codes.map(|c| Card::try_from(c).unwrap())
    }

    async fn service(phase: Phase) -> Service {
        let store = Memory::seeded(GameState::new(8, phase));
        store.create_user(&User::new("5", 0)).await.unwrap();
        store
            .create_board(&Board::new(8, cards(["2c", "3d", "4h", "5s", "6c"])))
            .await
            .unwrap();
        Service::new(Arc::new(store), Settings::default())
    }

    async fn seat(service: &Service) {
        let seat = UserBoard::new("5", 8, cards(["Ac", "Ad"])).with_tarots([
            Some(Arcana::Sun),
            None,
            None,
        ]);
        service.store().create_user_board(&seat).await.unwrap();
    }

    fn description(reply: &Reply) -> Option<&str> {
        reply.embeds.first()?.description.as_deref()
    }

    #[tokio::test]
    async fn refused_before_the_flop() {
        let service = service(Phase::AwaitingFlop).await;
        seat(&service).await;
        let reply = execute(&service, &Caller::new("5", "ayup")).await.unwrap();
        assert_eq!(description(&reply), Some("The next game day hasn't started yet."));
        assert!(reply.ephemeral);
        assert_eq!(reply.embeds[0].color, RED);
    }

    #[tokio::test]
    async fn requires_profile() {
        let service = service(Phase::FlopShown).await;
        let reply = execute(&service, &Caller::new("6", "stranger")).await.unwrap();
        assert_eq!(
            description(&reply),
            Some("User stranger's profile does not exist. Use /start to get started.")
        );
    }

    #[tokio::test]
    async fn missing_hand_is_reported() {
        let service = service(Phase::FlopShown).await;
        let reply = execute(&service, &Caller::new("5", "ayup")).await.unwrap();
        assert!(description(&reply).unwrap().starts_with("You don't have a hand for today"));
    }

    #[tokio::test]
    async fn shows_flop_then_turn() {
        let service = service(Phase::FlopShown).await;
        seat(&service).await;
        let reply = execute(&service, &Caller::new("5", "ayup")).await.unwrap();
        let embed = &reply.embeds[0];
        assert!(!reply.ephemeral);
        assert_eq!(embed.title.as_deref(), Some("ayup's Hand for Day 8"));
        assert_eq!(
            embed.fields,
            vec![
                ("Hole Cards".to_string(), "A♣ | A♦".to_string()),
                ("Community Cards".to_string(), "2♣ | 3♦ | 4♥".to_string()),
                ("Tarot Cards".to_string(), Arcana::Sun.name().to_string()),
            ]
        );
        assert_eq!(embed.cards.len(), 5);

        service
            .update_game_state(GameState::new(8, Phase::TurnShown))
            .await
            .unwrap();
        let reply = execute(&service, &Caller::new("5", "ayup")).await.unwrap();
        assert_eq!(reply.embeds[0].fields[1].1, "2♣ | 3♦ | 4♥ | 5♠");
    }
}
