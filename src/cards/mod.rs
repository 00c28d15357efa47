//! Static card and tarot registries.
//!
//! - [`Card`]: one of 52 playing cards, addressed by two-character code
//! - [`Arcana`]: one of 22 Major Arcana, addressed by slug
//! - [`Deck`]: draws without replacement, used for the daily board
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod tarot;
pub use tarot::*;
