// tests/support/mocks/mod.rs
pub mod racing;
pub mod security;
pub mod store;
pub mod time;

pub use racing::RacingArticleWrite;
pub use security::{DummyPasswordHasher, DummyTokenManager, token_for};
pub use store::{InMemoryStore, QueryCounters};
pub use time::{TickingClock, fixed_now};
