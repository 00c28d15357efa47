use super::card::Card;

/// A mutable deck of cards supporting random draws without replacement.
///
/// Remaining cards are a 52-bit mask, one bit per [`Card`]. Used to deal
/// the daily board so the five community cards never repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self((1 << Card::COUNT) - 1)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// Draws and removes a uniformly random card.
    ///
    /// Panics if the deck is empty.
    pub fn draw(&mut self) -> Card {
        assert!(self.size() > 0, "draw from an empty deck");
        let i = rand::random_range(0..self.size());
        let mut deck = self.0;
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck);
        self.remove(card);
        card
    }
    /// Draws `N` distinct cards.
    ///
    /// Panics if fewer than `N` cards remain.
    pub fn deal<const N: usize>(&mut self) -> [Card; N] {
        std::array::from_fn(|_| self.draw())
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_is_full() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert!(Card::all().all(|c| deck.contains(&c)));
    }

    #[test]
    fn draws_never_repeat() {
        let cards = Deck::new().collect::<Vec<_>>();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 52);
    }

    #[test]
    fn draw_removes() {
        let mut deck = Deck::new();
        let card = deck.draw();
        assert!(!deck.contains(&card));
        assert_eq!(deck.size(), 51);
    }

    #[test]
    fn deal_is_distinct() {
        let cards = Deck::new().deal::<5>();
        assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[test]
    #[should_panic]
    fn empty_deck_panics() {
        let mut deck = Deck::new();
        deck.by_ref().for_each(drop);
        deck.draw();
    }

    #[test]
    fn remove_specific() {
        let mut deck = Deck::new();
        let card = Card::try_from("As").unwrap();
        deck.remove(card);
        deck.remove(card);
        assert_eq!(deck.size(), 51);
        assert!(deck.all(|c| c != card));
    }
}
