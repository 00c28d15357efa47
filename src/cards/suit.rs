#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self] {
        &[Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// plural display name, as in "Queen of Spades"
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Club => "Clubs",
            Self::Diamond => "Diamonds",
            Self::Heart => "Hearts",
            Self::Spade => "Spades",
        }
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Club => '♣',
            Self::Diamond => '♦',
            Self::Heart => '♥',
            Self::Spade => '♠',
        }
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Suit {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Club),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Heart),
            3 => Ok(Self::Spade),
            n => Err(n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" => Ok(Self::Club),
            "d" => Ok(Self::Diamond),
            "h" => Ok(Self::Heart),
            "s" => Ok(Self::Spade),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Club => "c",
                Self::Diamond => "d",
                Self::Heart => "h",
                Self::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(*suit, Suit::try_from(u8::from(*suit)).unwrap());
        }
    }

    #[test]
    fn bijective_str() {
        for suit in Suit::all() {
            assert_eq!(*suit, Suit::try_from(suit.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_uppercase() {
        assert!(Suit::try_from("H").is_err());
    }
}
