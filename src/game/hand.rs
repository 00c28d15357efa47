use super::board::Board;
use super::phase::Phase;
use super::seat::UserBoard;
use super::user::User;
use crate::Balance;
use crate::Day;
use crate::cards::Arcana;
use crate::cards::Card;

/// A user's resolved view of one day: profile, hole cards, tarots and
/// the shared board. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHand {
    user: User,
    seat: UserBoard,
    board: Board,
}

impl UserHand {
    pub fn new(user: User, seat: UserBoard, board: Board) -> Self {
        debug_assert_eq!(user.uid, seat.uid());
        debug_assert_eq!(seat.day(), board.day());
        Self { user, seat, board }
    }
    pub fn uid(&self) -> &str {
        &self.user.uid
    }
    pub fn balance(&self) -> Balance {
        self.user.balance
    }
    pub fn day(&self) -> Day {
        self.board.day()
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn hole(&self) -> [Card; 2] {
        self.seat.hole()
    }
    /// All five community cards, flop first, river last.
    pub fn community(&self) -> [Card; 5] {
        self.board.cards()
    }
    /// The community cards a player may see right now.
    pub fn showable(&self, phase: Phase) -> &[Card] {
        self.board.showable(phase)
    }
    /// Occupied tarot slots, in slot order.
    pub fn tarots(&self) -> Vec<Arcana> {
        self.seat.tarots().into_iter().flatten().collect()
    }
}
