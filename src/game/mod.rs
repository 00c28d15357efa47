//! The day/phase state machine and the records it governs.
//!
//! - [`GameState`]: the singleton `{day, phase}` pair
//! - [`Phase`]: how much of today's board is revealed
//! - [`Street`]: the reveal each scheduled job performs
//! - [`Board`], [`User`], [`UserBoard`]: persisted rows
//! - [`UserHand`]: the joined, resolved view of all three
pub mod board;
pub use board::*;

pub mod hand;
pub use hand::*;

pub mod phase;
pub use phase::*;

pub mod seat;
pub use seat::*;

pub mod state;
pub use state::*;

pub mod street;
pub use street::*;

pub mod user;
pub use user::*;
