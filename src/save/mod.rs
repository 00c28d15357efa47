//! Persistence for users, boards, per-day assignments and the game state.
//!
//! [`Store`] is the contract; [`Memory`] backs tests and dry runs, and
//! [`Postgres`] is what the daemon and the admin CLI talk to.
pub mod memory;
pub mod store;

pub use memory::Memory;
pub use store::Store;

#[cfg(feature = "database")]
pub mod postgres;
#[cfg(feature = "database")]
pub mod schema;

#[cfg(feature = "database")]
pub use postgres::Postgres;
#[cfg(feature = "database")]
pub use schema::Schema;
