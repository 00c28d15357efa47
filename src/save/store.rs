use crate::Day;
use crate::Result;
use crate::cards::Card;
use crate::game::*;

/// Persistence contract for every record the game touches.
///
/// Each call borrows one connection for its duration. The two
/// multi-statement units, [`init_user`](Store::init_user) and
/// [`create_board_increment_day`](Store::create_board_increment_day),
/// are atomic: a failure leaves nothing behind and is returned as-is.
///
/// Inserting a row whose key already exists fails with
/// [`Error::Duplicate`](crate::Error::Duplicate); nothing is ever
/// silently overwritten.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn get_user(&self, uid: &str) -> Result<Option<User>>;
    async fn get_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, user: &User) -> Result<()>;
    async fn update_user(&self, user: &User) -> Result<()>;
    async fn delete_user(&self, uid: &str) -> Result<()>;

    async fn get_board(&self, day: Day) -> Result<Option<Board>>;
    async fn create_board(&self, board: &Board) -> Result<()>;
    async fn delete_board(&self, day: Day) -> Result<()>;

    async fn get_user_board(&self, uid: &str, day: Day) -> Result<Option<UserBoard>>;
    async fn create_user_board(&self, seat: &UserBoard) -> Result<()>;
    async fn delete_user_board(&self, uid: &str, day: Day) -> Result<()>;

    /// Fails with [`Error::NotFound`](crate::Error::NotFound) before the
    /// state has been seeded.
    async fn get_game_state(&self) -> Result<GameState>;
    /// Seeds the singleton. Returns `false` if it already existed.
    async fn create_game_state(&self, state: GameState) -> Result<bool>;
    async fn update_game_state(&self, state: GameState) -> Result<()>;

    /// Creates the profile row for a new player, atomically.
    async fn init_user(&self, user: &User) -> Result<()>;
    /// Atomically re-reads the game state, checks it still awaits the
    /// flop, opens the next day with `cards` as its board and persists
    /// both. Returns the new board.
    async fn create_board_increment_day(&self, cards: [Card; 5]) -> Result<Board>;

    /// Joins user, per-day assignment and board. `None` if any is missing.
    async fn get_user_hand_on_day(&self, uid: &str, day: Day) -> Result<Option<UserHand>> {
        let Some(user) = self.get_user(uid).await? else {
            return Ok(None);
        };
        let Some(seat) = self.get_user_board(uid, day).await? else {
            return Ok(None);
        };
        let Some(board) = self.get_board(day).await? else {
            return Ok(None);
        };
        Ok(Some(UserHand::new(user, seat, board)))
    }
}
