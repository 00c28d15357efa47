use super::store::Store;
use crate::Day;
use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::game::*;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, User>,
    boards: BTreeMap<Day, Board>,
    seats: BTreeMap<(String, Day), UserBoard>,
    state: Option<GameState>,
}

/// In-process [`Store`] with the same key constraints as the database.
///
/// Every call holds the table lock for its whole duration, which makes
/// the transactional units trivially atomic.
#[derive(Debug, Default)]
pub struct Memory(Mutex<Tables>);

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
    /// A store already seeded with `state`.
    pub fn seeded(state: GameState) -> Self {
        Self(Mutex::new(Tables {
            state: Some(state),
            ..Tables::default()
        }))
    }
}

fn unseeded() -> Error {
    Error::NotFound("game state".into())
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn get_user(&self, uid: &str) -> Result<Option<User>> {
        Ok(self.0.lock().await.users.get(uid).cloned())
    }
    async fn get_users(&self) -> Result<Vec<User>> {
        Ok(self.0.lock().await.users.values().cloned().collect())
    }
    async fn create_user(&self, user: &User) -> Result<()> {
        let mut tables = self.0.lock().await;
        if tables.users.contains_key(&user.uid) {
            return Err(Error::Duplicate(format!("user {}", user.uid)));
        }
        tables.users.insert(user.uid.clone(), user.clone());
        Ok(())
    }
    async fn update_user(&self, user: &User) -> Result<()> {
        if let Some(row) = self.0.lock().await.users.get_mut(&user.uid) {
            *row = user.clone();
        }
        Ok(())
    }
    async fn delete_user(&self, uid: &str) -> Result<()> {
        self.0.lock().await.users.remove(uid);
        Ok(())
    }

    async fn get_board(&self, day: Day) -> Result<Option<Board>> {
        Ok(self.0.lock().await.boards.get(&day).copied())
    }
    async fn create_board(&self, board: &Board) -> Result<()> {
        let mut tables = self.0.lock().await;
        if tables.boards.contains_key(&board.day()) {
            return Err(Error::Duplicate(format!("board for day {}", board.day())));
        }
        tables.boards.insert(board.day(), *board);
        Ok(())
    }
    async fn delete_board(&self, day: Day) -> Result<()> {
        self.0.lock().await.boards.remove(&day);
        Ok(())
    }

    async fn get_user_board(&self, uid: &str, day: Day) -> Result<Option<UserBoard>> {
        let key = (uid.to_string(), day);
        Ok(self.0.lock().await.seats.get(&key).cloned())
    }
    async fn create_user_board(&self, seat: &UserBoard) -> Result<()> {
        let mut tables = self.0.lock().await;
        let key = (seat.uid().to_string(), seat.day());
        if tables.seats.contains_key(&key) {
            return Err(Error::Duplicate(format!(
                "hand for user {} on day {}",
                seat.uid(),
                seat.day()
            )));
        }
        tables.seats.insert(key, seat.clone());
        Ok(())
    }
    async fn delete_user_board(&self, uid: &str, day: Day) -> Result<()> {
        self.0.lock().await.seats.remove(&(uid.to_string(), day));
        Ok(())
    }

    async fn get_game_state(&self) -> Result<GameState> {
        self.0.lock().await.state.ok_or_else(unseeded)
    }
    async fn create_game_state(&self, state: GameState) -> Result<bool> {
        let mut tables = self.0.lock().await;
        match tables.state {
            Some(_) => Ok(false),
            None => {
                tables.state = Some(state);
                Ok(true)
            }
        }
    }
    async fn update_game_state(&self, state: GameState) -> Result<()> {
        let mut tables = self.0.lock().await;
        let row = tables.state.as_mut().ok_or_else(unseeded)?;
        *row = state;
        Ok(())
    }

    async fn init_user(&self, user: &User) -> Result<()> {
        self.create_user(user).await
    }
    async fn create_board_increment_day(&self, cards: [Card; 5]) -> Result<Board> {
        let mut tables = self.0.lock().await;
        let state = tables.state.ok_or_else(unseeded)?;
        state.expect(Phase::AwaitingFlop)?;
        let day = state.day + 1;
        if tables.boards.contains_key(&day) {
            return Err(Error::Duplicate(format!("board for day {}", day)));
        }
        let board = Board::new(day, cards);
        tables.boards.insert(day, board);
        tables.state = Some(GameState::new(day, state.phase));
        Ok(board)
    }
}
