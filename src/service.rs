use crate::Day;
use crate::Result;
use crate::game::*;
use crate::save::Store;
use crate::settings::Settings;
use std::sync::Arc;

/// Shared handles passed explicitly to command handlers and jobs.
///
/// Cheap to clone; every clone talks to the same store.
#[derive(Clone)]
pub struct Service {
    store: Arc<dyn Store>,
    settings: Arc<Settings>,
}

impl Service {
    pub fn new(store: Arc<dyn Store>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn get_game_state(&self) -> Result<GameState> {
        self.store.get_game_state().await
    }
    pub async fn update_game_state(&self, state: GameState) -> Result<()> {
        self.store.update_game_state(state).await
    }
    /// Seeds the configured initial state unless one already exists, and
    /// returns whatever state is now current.
    pub async fn seed_game_state(&self) -> Result<GameState> {
        if self.store.create_game_state(self.settings.initial).await? {
            log::info!("seeded game state at {}", self.settings.initial);
        }
        self.store.get_game_state().await
    }

    pub async fn get_user(&self, uid: &str) -> Result<Option<User>> {
        self.store.get_user(uid).await
    }
    /// Creates a profile holding the configured starting balance.
    pub async fn init_user(&self, uid: &str) -> Result<User> {
        let user = User::new(uid, self.settings.starting_balance);
        self.store.init_user(&user).await?;
        log::info!("initialized user {}", uid);
        Ok(user)
    }

    pub async fn get_user_hand_on_day(&self, uid: &str, day: Day) -> Result<Option<UserHand>> {
        self.store.get_user_hand_on_day(uid, day).await
    }
    /// The hand for whatever day the game is currently on.
    pub async fn get_user_hand_today(&self, uid: &str) -> Result<Option<UserHand>> {
        let state = self.get_game_state().await?;
        self.get_user_hand_on_day(uid, state.day).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::save::Memory;

    fn service(state: GameState) -> Service {
        let settings = Settings {
            starting_balance: 250,
            initial: GameState::new(10, Phase::FlopShown),
            ..Settings::default()
        };
        Service::new(Arc::new(Memory::seeded(state)), settings)
    }

    #[tokio::test]
    async fn new_users_get_starting_balance() {
        let service = service(GameState::default());
        service.init_user("7").await.unwrap();
        let user = service.get_user("7").await.unwrap().unwrap();
        assert_eq!(user.balance, 250);
        assert!(service.init_user("7").await.is_err());
    }

    #[tokio::test]
    async fn seeding_keeps_existing_state() {
        let existing = GameState::new(3, Phase::TurnShown);
        assert_eq!(service(existing).seed_game_state().await.unwrap(), existing);
        let empty = Service::new(Arc::new(Memory::new()), Settings::default());
        assert_eq!(empty.seed_game_state().await.unwrap(), GameState::default());
    }

    #[tokio::test]
    async fn today_follows_game_day() {
        let service = service(GameState::new(0, Phase::AwaitingFlop));
        service.init_user("7").await.unwrap();
        let board = service
            .store()
            .create_board_increment_day(Board::deal(0).cards())
            .await
            .unwrap();
        let hole = [Card::try_from("Qs").unwrap(), Card::try_from("Jd").unwrap()];
        service
            .store()
            .create_user_board(&UserBoard::new("7", board.day(), hole))
            .await
            .unwrap();
        let hand = service.get_user_hand_today("7").await.unwrap().unwrap();
        assert_eq!(hand.day(), 1);
        assert_eq!(hand.hole(), hole);
        assert!(service.get_user_hand_on_day("7", 0).await.unwrap().is_none());
    }
}
