//! Store layer.
//!
//! [`GameStore`] defines the storage contract; each backend lives in its
//! own module and is used through a [`StoreHandle`](crate::StoreHandle).

pub mod game_store;
pub mod memory_game_store;
pub mod mongo_game_store;
pub mod unavailable_store;

pub use game_store::GameStore;
pub use memory_game_store::MemoryGameStore;
pub use mongo_game_store::MongoGameStore;
pub use unavailable_store::UnavailableStore;
