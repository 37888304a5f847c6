pub mod collection;
pub mod players;
pub mod teams;

pub use collection::{JsonCollection, Record, next_id};
pub use players::PlayerStore;
pub use teams::TeamStore;
