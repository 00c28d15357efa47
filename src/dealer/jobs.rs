use super::announce::Announcer;
use crate::Day;
use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::cards::Deck;
use crate::embed::Embed;
use crate::game::*;
use crate::service::Service;
use crate::settings::RED;
use std::sync::Arc;

/// Runs the three daily reveals against a [`Service`] and announces
/// each one.
///
/// Every job checks the phase it requires before touching anything, so
/// a job fired out of turn is a logged no-op. The new phase is written
/// before the announcement goes out; a failed announcement is logged
/// and the phase stands.
#[derive(Clone)]
pub struct Dealer {
    service: Service,
    announcer: Arc<dyn Announcer>,
}

impl Dealer {
    pub fn new(service: Service, announcer: Arc<dyn Announcer>) -> Self {
        Self { service, announcer }
    }
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Runs the job for `street`, returning the resulting state.
    pub async fn run(&self, street: Street) -> Result<GameState> {
        match street {
            Street::Flop => self.flop().await,
            Street::Turn => self.turn().await,
            Street::River => self.river().await,
        }
    }

    /// Scheduled entry point: runs the job and logs however it ends.
    pub async fn tick(&self, street: Street) {
        log::info!("drawing the {}", street);
        match self.run(street).await {
            Ok(state) => log::info!("{} drawn, now {}", street, state),
            Err(e @ Error::PhaseMismatch { .. }) => log::error!("skipping {}: {}", street, e),
            Err(e) => log::error!("could not draw the {}: {}", street, e),
        }
    }

    /// Opens the next day: deals its board, deals every user fresh hole
    /// cards and reveals the first three board cards.
    pub async fn flop(&self) -> Result<GameState> {
        let state = self.service.get_game_state().await?;
        state.advance(Street::Flop)?;
        let board = self
            .service
            .store()
            .create_board_increment_day(Deck::new().deal())
            .await?;
        log::info!("created board for day {}: {}", board.day(), board);
        self.deal_hole_cards(board.day()).await?;
        let next = GameState::new(board.day(), Street::Flop.reveals());
        self.service.update_game_state(next).await?;
        self.announce(Street::Flop, &board, format!("FLOP: {}", Card::join(&board.flop())))
            .await;
        Ok(next)
    }

    pub async fn turn(&self) -> Result<GameState> {
        let (next, board) = self.reveal(Street::Turn).await?;
        self.announce(Street::Turn, &board, format!("Turn: {}", board.turn().short()))
            .await;
        Ok(next)
    }

    pub async fn river(&self) -> Result<GameState> {
        let (next, board) = self.reveal(Street::River).await?;
        self.announce(Street::River, &board, format!("River: {}", board.river().short()))
            .await;
        Ok(next)
    }

    /// Turn and river share everything but the wording: both need the
    /// day's board and only move the phase along.
    async fn reveal(&self, street: Street) -> Result<(GameState, Board)> {
        let state = self.service.get_game_state().await?;
        let next = state.advance(street)?;
        let board = self
            .service
            .store()
            .get_board(state.day)
            .await?
            .ok_or_else(|| Error::NotFound(format!("board for day {}", state.day)))?;
        self.service.update_game_state(next).await?;
        Ok((next, board))
    }

    /// Every existing user gets two new hole cards for `day`, keeping
    /// whatever tarots they held the day before. One user failing does
    /// not stop the rest.
    async fn deal_hole_cards(&self, day: Day) -> Result<()> {
        let store = self.service.store();
        let users = store.get_users().await?;
        log::info!("drawing hole cards for {} users on day {}", users.len(), day);
        for user in users {
            let dealt = async {
                let previous = store.get_user_board(&user.uid, day - 1).await?;
                let seat = UserBoard::carry(previous.as_ref(), &user.uid, day, UserBoard::draw());
                store.create_user_board(&seat).await
            };
            if let Err(e) = dealt.await {
                log::error!("failed to draw hole cards for user {}: {}", user.uid, e);
            }
        }
        Ok(())
    }

    async fn announce(&self, street: Street, board: &Board, description: String) {
        let embed = Embed::new(RED)
            .title(format!("Day {} | {} Draw", board.day(), street.title()))
            .description(description)
            .cards(board.showable(street.reveals()));
        match self.announcer.announce(&embed).await {
            Ok(()) => log::info!("{} draw sent to dealer channel", street.title()),
            Err(e) => log::error!("could not send {} to dealer channel: {}", street, e),
        }
    }
}
