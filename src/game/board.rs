use super::phase::Phase;
use crate::Day;
use crate::cards::Card;
use crate::cards::Deck;

/// The five shared community cards for one day.
///
/// Created once by the flop job and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    day: Day,
    cards: [Card; 5],
}

impl Board {
    /// `cards` are flop, flop, flop, turn, river in that order.
    pub fn new(day: Day, cards: [Card; 5]) -> Self {
        Self { day, cards }
    }
    /// Deals five distinct cards from a fresh deck.
    pub fn deal(day: Day) -> Self {
        Self::new(day, Deck::new().deal())
    }
    pub fn day(&self) -> Day {
        self.day
    }
    pub fn flop(&self) -> [Card; 3] {
        [self.cards[0], self.cards[1], self.cards[2]]
    }
    pub fn turn(&self) -> Card {
        self.cards[3]
    }
    pub fn river(&self) -> Card {
        self.cards[4]
    }
    /// All five cards in flop, turn, river order.
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }
    /// The prefix of the board that has been revealed in `phase`.
    pub fn showable(&self, phase: Phase) -> &[Card] {
        &self.cards[..phase.n_showable()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Card::join(&self.cards))
    }
}
