use super::Caller;
use crate::Result;
use crate::cards::Card;
use crate::embed::Reply;
use crate::game::Phase;
use crate::game::UserBoard;
use crate::service::Service;

pub async fn execute(service: &Service, caller: &Caller) -> Result<Reply> {
    if service.get_user(&caller.uid).await?.is_none() {
        return Ok(Reply::text(format!(
            "- LOOKUP FAILED -\nUser {}'s profile does not exist. Use /start to get started.",
            caller.name
        )));
    }
    let state = service.get_game_state().await?;
    let store = service.store();
    if let Some(seat) = store.get_user_board(&caller.uid, state.day).await? {
        return Ok(hole(seat.hole()));
    }
    if state.phase == Phase::TurnShown {
        return Ok(Reply::text("- DRAW FAILED -\nThe next day hasn't begun yet!"));
    }
    let previous = store.get_user_board(&caller.uid, state.day - 1).await?;
    let seat = UserBoard::carry(previous.as_ref(), &caller.uid, state.day, UserBoard::draw());
    if let Err(e) = store.create_user_board(&seat).await {
        log::error!("could not draw for {} on day {}: {}", caller.uid, state.day, e);
        return Ok(Reply::text(
            "- DRAW FAILED -\nAn error occurred while drawing your cards. Please try again later.",
        ));
    }
    log::info!(
        "{} has drawn their daily hole cards: {}",
        caller.name,
        Card::join(&seat.hole())
    );
    Ok(hole(seat.hole()))
}

fn hole(cards: [Card; 2]) -> Reply {
    Reply::text(format!("Your daily hole cards are: {}", Card::join(&cards)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;
    use crate::game::GameState;
    use crate::save::Memory;
    use crate::settings::Settings;
    use std::sync::Arc;

    fn service(state: GameState) -> Service {
        Service::new(Arc::new(Memory::seeded(state)), Settings::default())
    }

    fn caller() -> Caller {
        Caller::new("77", "ayup")
    }

    #[tokio::test]
    async fn requires_profile() {
        let reply = execute(&service(GameState::default()), &caller()).await.unwrap();
        let content = reply.content.unwrap();
        assert!(content.starts_with("- LOOKUP FAILED -"));
        assert!(content.contains("ayup"));
    }

    #[tokio::test]
    async fn draws_once_per_day() {
        let service = service(GameState::new(3, Phase::FlopShown));
        service.init_user("77").await.unwrap();
        let first = execute(&service, &caller()).await.unwrap();
        let again = execute(&service, &caller()).await.unwrap();
        assert_eq!(first, again);
        let seat = service.store().get_user_board("77", 3).await.unwrap().unwrap();
        assert_eq!(
            first.content.as_deref(),
            Some(format!("Your daily hole cards are: {}", Card::join(&seat.hole())).as_str())
        );
    }

    #[tokio::test]
    async fn keeps_yesterdays_tarots() {
        let service = service(GameState::new(6, Phase::AwaitingFlop));
        service.init_user("77").await.unwrap();
        let tarots = [Some(Arcana::Hermit), None, Some(Arcana::World)];
        service
            .store()
            .create_user_board(&UserBoard::new("77", 5, UserBoard::draw()).with_tarots(tarots))
            .await
            .unwrap();
        execute(&service, &caller()).await.unwrap();
        let seat = service.store().get_user_board("77", 6).await.unwrap().unwrap();
        assert_eq!(seat.tarots(), tarots);
    }

    #[tokio::test]
    async fn refused_after_the_turn() {
        let service = service(GameState::new(3, Phase::TurnShown));
        service.init_user("77").await.unwrap();
        let reply = execute(&service, &caller()).await.unwrap();
        assert_eq!(
            reply.content.as_deref(),
            Some("- DRAW FAILED -\nThe next day hasn't begun yet!")
        );
        assert!(service.store().get_user_board("77", 3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn existing_hand_is_shown_even_after_the_turn() {
        let service = service(GameState::new(3, Phase::TurnShown));
        service.init_user("77").await.unwrap();
        let hole = [Card::try_from("Ah").unwrap(), Card::try_from("Td").unwrap()];
        service
            .store()
            .create_user_board(&UserBoard::new("77", 3, hole))
            .await
            .unwrap();
        let reply = execute(&service, &caller()).await.unwrap();
        assert_eq!(
            reply.content.as_deref(),
            Some("Your daily hole cards are: A♥ | T♦")
        );
    }
}
