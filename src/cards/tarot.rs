use crate::Error;

/// The 22 Major Arcana, persisted by slug (`"fool"`, `"high_priestess"`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Arcana {
    Fool,
    Magician,
    HighPriestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Strength,
    Hermit,
    WheelOfFortune,
    Justice,
    HangedMan,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
    World,
}

impl Arcana {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Fool,
            Self::Magician,
            Self::HighPriestess,
            Self::Empress,
            Self::Emperor,
            Self::Hierophant,
            Self::Lovers,
            Self::Chariot,
            Self::Strength,
            Self::Hermit,
            Self::WheelOfFortune,
            Self::Justice,
            Self::HangedMan,
            Self::Death,
            Self::Temperance,
            Self::Devil,
            Self::Tower,
            Self::Star,
            Self::Moon,
            Self::Sun,
            Self::Judgement,
            Self::World,
        ]
    }
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fool => "fool",
            Self::Magician => "magician",
            Self::HighPriestess => "high_priestess",
            Self::Empress => "empress",
            Self::Emperor => "emperor",
            Self::Hierophant => "hierophant",
            Self::Lovers => "lovers",
            Self::Chariot => "chariot",
            Self::Strength => "strength",
            Self::Hermit => "hermit",
            Self::WheelOfFortune => "wheel_of_fortune",
            Self::Justice => "justice",
            Self::HangedMan => "hanged_man",
            Self::Death => "death",
            Self::Temperance => "temperance",
            Self::Devil => "devil",
            Self::Tower => "tower",
            Self::Star => "star",
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::Judgement => "judgement",
            Self::World => "world",
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fool => "Fool",
            Self::Magician => "Magician",
            Self::HighPriestess => "High Priestess",
            Self::Empress => "Empress",
            Self::Emperor => "Emperor",
            Self::Hierophant => "Hierophant",
            Self::Lovers => "Lovers",
            Self::Chariot => "Chariot",
            Self::Strength => "Strength",
            Self::Hermit => "Hermit",
            Self::WheelOfFortune => "Wheel of Fortune",
            Self::Justice => "Justice",
            Self::HangedMan => "Hanged Man",
            Self::Death => "Death",
            Self::Temperance => "Temperance",
            Self::Devil => "Devil",
            Self::Tower => "Tower",
            Self::Star => "Star",
            Self::Moon => "Moon",
            Self::Sun => "Sun",
            Self::Judgement => "Judgement",
            Self::World => "World",
        }
    }
}

/// registry lookup by slug
impl TryFrom<&str> for Arcana {
    type Error = Error;
    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .find(|arcana| arcana.code() == code)
            .copied()
            .ok_or_else(|| Error::UnknownTarot(code.to_string()))
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_22_major_arcana() {
        assert_eq!(Arcana::all().len(), 22);
    }

    #[test]
    fn bijective_code() {
        for arcana in Arcana::all() {
            assert_eq!(*arcana, Arcana::try_from(arcana.code()).unwrap());
        }
    }

    #[test]
    fn names() {
        assert_eq!(Arcana::try_from("high_priestess").unwrap().name(), "High Priestess");
        assert_eq!(Arcana::try_from("wheel_of_fortune").unwrap().name(), "Wheel of Fortune");
    }

    #[test]
    fn unknown_slug() {
        assert!(matches!(Arcana::try_from("Fool"), Err(Error::UnknownTarot(_))));
        assert!(matches!(Arcana::try_from("joker"), Err(Error::UnknownTarot(_))));
    }
}
