pub mod dto;
pub mod json_roster_store;

pub use json_roster_store::JsonRosterRepository;
