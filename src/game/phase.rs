use crate::Error;

/// How much of the day's board has been revealed.
///
/// Persisted as `0`, `1`, `2`. The cycle is
/// `AwaitingFlop -> FlopShown -> TurnShown -> AwaitingFlop`, and only the
/// scheduled jobs move along it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Phase {
    /// last night's river is still on the table
    #[default]
    AwaitingFlop = 0,
    FlopShown = 1,
    TurnShown = 2,
}

impl Phase {
    pub const fn all() -> &'static [Self] {
        &[Self::AwaitingFlop, Self::FlopShown, Self::TurnShown]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::AwaitingFlop => Self::FlopShown,
            Self::FlopShown => Self::TurnShown,
            Self::TurnShown => Self::AwaitingFlop,
        }
    }
    /// Number of community cards visible in this phase.
    pub const fn n_showable(&self) -> usize {
        match self {
            Self::AwaitingFlop => 5,
            Self::FlopShown => 3,
            Self::TurnShown => 4,
        }
    }
}

impl From<Phase> for i16 {
    fn from(phase: Phase) -> i16 {
        phase as i16
    }
}
impl TryFrom<i16> for Phase {
    type Error = Error;
    fn try_from(n: i16) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::AwaitingFlop),
            1 => Ok(Self::FlopShown),
            2 => Ok(Self::TurnShown),
            n => Err(Error::UnknownPhase(n)),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AwaitingFlop => write!(f, "awaiting flop"),
            Self::FlopShown => write!(f, "flop shown"),
            Self::TurnShown => write!(f, "turn shown"),
        }
    }
}
