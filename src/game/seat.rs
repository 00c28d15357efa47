use crate::Day;
use crate::cards::Arcana;
use crate::cards::Card;

/// Number of tarot slots a player can hold on a given day.
pub const TAROT_SLOTS: usize = 3;

/// A user's private assignment for one day: two hole cards plus any
/// tarot modifiers. Keyed by `(uid, day)`; at most one per pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBoard {
    uid: String,
    day: Day,
    hole: [Card; 2],
    tarots: [Option<Arcana>; TAROT_SLOTS],
}

impl UserBoard {
    pub fn new(uid: impl Into<String>, day: Day, hole: [Card; 2]) -> Self {
        Self {
            uid: uid.into(),
            day,
            hole,
            tarots: [None; TAROT_SLOTS],
        }
    }
    pub fn with_tarots(mut self, tarots: [Option<Arcana>; TAROT_SLOTS]) -> Self {
        self.tarots = tarots;
        self
    }
    /// Two uniformly random hole cards, drawn with replacement.
    pub fn draw() -> [Card; 2] {
        let cards = Card::sample(2);
        [cards[0], cards[1]]
    }
    /// Fresh hole cards for `day`, keeping the tarot slots of `previous`.
    pub fn carry(previous: Option<&Self>, uid: &str, day: Day, hole: [Card; 2]) -> Self {
        let tarots = previous.map_or([None; TAROT_SLOTS], |p| p.tarots);
        Self::new(uid, day, hole).with_tarots(tarots)
    }
    pub fn uid(&self) -> &str {
        &self.uid
    }
    pub fn day(&self) -> Day {
        self.day
    }
    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }
    pub fn tarots(&self) -> [Option<Arcana>; TAROT_SLOTS] {
        self.tarots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole() -> [Card; 2] {
        [Card::try_from("9h").unwrap(), Card::try_from("9s").unwrap()]
    }

    #[test]
    fn carries_tarots_forward() {
        let yesterday = UserBoard::new("ayup", 3, hole()).with_tarots([
            Some(Arcana::Fool),
            None,
            Some(Arcana::Tower),
        ]);
        let today = UserBoard::carry(Some(&yesterday), "ayup", 4, hole());
        assert_eq!(today.day(), 4);
        assert_eq!(today.tarots(), yesterday.tarots());
    }

    #[test]
    fn nothing_to_carry() {
        let today = UserBoard::carry(None, "ayup", 1, hole());
        assert_eq!(today.tarots(), [None; TAROT_SLOTS]);
        assert_eq!(today.uid(), "ayup");
    }
}
