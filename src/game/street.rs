use super::phase::Phase;

/// One of the three daily reveals, each driven by its own scheduled job.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::River]
    }
    /// The phase the game must be in before this street can be revealed.
    pub const fn requires(&self) -> Phase {
        match self {
            Self::Flop => Phase::AwaitingFlop,
            Self::Turn => Phase::FlopShown,
            Self::River => Phase::TurnShown,
        }
    }
    /// The phase the game is in once this street has been revealed.
    pub const fn reveals(&self) -> Phase {
        self.requires().next()
    }
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::River),
            _ => Err(format!("invalid street: {}", s)),
        }
    }
}
