// Adapters layer: concrete implementations of the domain ports.

pub mod fixtures;
pub mod observers;

pub use fixtures::{BuiltinFixtures, FileFixtureSource};
pub use observers::LogPageObserver;
