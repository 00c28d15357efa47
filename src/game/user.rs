use crate::Balance;

/// A player profile, created once by `/start`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub uid: String,
    pub balance: Balance,
}

impl User {
    pub fn new(uid: impl Into<String>, balance: Balance) -> Self {
        Self {
            uid: uid.into(),
            balance,
        }
    }
}
