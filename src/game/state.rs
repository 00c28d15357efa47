use super::phase::Phase;
use super::street::Street;
use crate::Day;
use crate::Error;
use crate::Result;

/// The singleton `{day, phase}` record every command reads and only the
/// scheduled jobs write.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameState {
    pub day: Day,
    pub phase: Phase,
}

impl GameState {
    pub fn new(day: Day, phase: Phase) -> Self {
        Self { day, phase }
    }
    /// Fails with [`Error::PhaseMismatch`] unless the game is in `phase`.
    pub fn expect(&self, phase: Phase) -> Result<()> {
        match self.phase == phase {
            true => Ok(()),
            false => Err(Error::PhaseMismatch {
                expected: phase,
                found: self.phase,
            }),
        }
    }
    /// The state after revealing `street`. Only the flop opens a new day.
    pub fn advance(self, street: Street) -> Result<Self> {
        self.expect(street.requires())?;
        Ok(match street {
            Street::Flop => Self::new(self.day + 1, street.reveals()),
            Street::Turn | Street::River => Self::new(self.day, street.reveals()),
        })
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "day {} ({})", self.day, self.phase)
    }
}
