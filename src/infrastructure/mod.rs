pub mod persistence;
pub mod repositories;

pub use persistence::JsonRosterRepository;
pub use repositories::InMemoryRosterRepository;
