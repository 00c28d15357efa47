use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. The persisted form is the two-character code
/// (`"Ah"`, `"Td"`), which is also the `Display` output.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub const COUNT: u8 = 52;

    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::all()[(self.0 / 4) as usize]
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::all()[(self.0 % 4) as usize]
    }
    pub fn value(&self) -> u8 {
        self.rank().value()
    }
    /// "Two of Hearts"
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
    /// "2♥"
    pub fn short(&self) -> String {
        format!("{}{}", self.rank(), self.suit().symbol())
    }
    /// The full registry, ordered by rank then suit.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }
    /// A uniformly random card. Independent of any previous draw.
    pub fn random() -> Self {
        Self(rand::random_range(0..Self::COUNT))
    }
    /// Draws `n` cards uniformly **with replacement**; duplicates are possible.
    pub fn sample(n: usize) -> Vec<Self> {
        (0..n).map(|_| Self::random()).collect()
    }
    /// Joins short names the way announcements and replies show them.
    pub fn join(cards: &[Self]) -> String {
        cards
            .iter()
            .map(Self::short)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n < Self::COUNT {
            true => Ok(Self(n)),
            false => Err(n),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on; only the lowest set bit is read.
/// panics on an empty mask, which holds no card
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        assert!(n != 0, "no card in an empty mask");
        Self(n.trailing_zeros() as u8)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// registry lookup by short code
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(code: &str) -> Result<Self, Self::Error> {
        let unknown = || Error::UnknownCard(code.to_string());
        match (code.get(0..1), code.get(1..2), code.len()) {
            (Some(rank), Some(suit), 2) => {
                let rank = Rank::try_from(rank).map_err(|_| unknown())?;
                let suit = Suit::try_from(suit).map_err(|_| unknown())?;
                Ok(Self::from((rank, suit)))
            }
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_52_unique_codes() {
        let codes = Card::all().map(|c| c.to_string()).collect::<HashSet<_>>();
        assert_eq!(codes.len(), 52);
    }

    #[test]
    fn bijective_code() {
        for card in Card::all() {
            assert_eq!(card, Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert_eq!(card, Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn metadata() {
        let card = Card::try_from("Qs").unwrap();
        assert_eq!(card.name(), "Queen of Spades");
        assert_eq!(card.short(), "Q♠");
        assert_eq!(card.value(), 10);
        let card = Card::try_from("2h").unwrap();
        assert_eq!(card.name(), "Two of Hearts");
        assert_eq!(card.short(), "2♥");
        assert_eq!(card.value(), 2);
    }

    #[test]
    fn unknown_codes() {
        for code in ["", "A", "Ahh", "1h", "Ax", "ah", "♥A"] {
            assert!(matches!(Card::try_from(code), Err(Error::UnknownCard(c)) if c == code));
        }
    }

    #[test]
    fn sample_with_replacement() {
        assert_eq!(Card::sample(0).len(), 0);
        assert_eq!(Card::sample(2).len(), 2);
        // more draws than the registry holds is only possible with replacement
        assert_eq!(Card::sample(60).len(), 60);
    }

    #[test]
    fn bit_isomorphism() {
        for card in Card::all() {
            assert_eq!(card, Card::from(u64::from(card)));
        }
        // lowest set bit wins: Ks (47) sits below Ah (50)
        let ah = Card::try_from("Ah").unwrap();
        let ks = Card::try_from("Ks").unwrap();
        assert_eq!(Card::from(u64::from(ah) | u64::from(ks)), ks);
    }

    #[test]
    #[should_panic]
    fn empty_mask_is_not_a_card() {
        Card::from(0u64);
    }

    #[test]
    fn joins_short_names() {
        let cards = [Card::try_from("Ah").unwrap(), Card::try_from("Td").unwrap()];
        assert_eq!(Card::join(&cards), "A♥ | T♦");
    }
}
