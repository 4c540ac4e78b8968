//! Repository Pattern Abstractions
//!
//! The roster is persisted as a whole: every save rewrites the full set of
//! athletes and every load replaces it.
//!
//! # Implementations
//!
//! - `JsonRosterRepository`: JSON file with atomic replace
//! - `InMemoryRosterRepository`: process-local, for tests and scratch sessions
//!
//! # Example
//!
//! ```rust,no_run
//! use fitness_tracker::domain::repositories::RosterRepository;
//! use fitness_tracker::infrastructure::InMemoryRosterRepository;
//!
//! # async {
//! let repo = InMemoryRosterRepository::new();
//! let athletes = repo.load().await?;
//! repo.save(&athletes).await?;
//! # anyhow::Ok(())
//! # };
//! ```

use crate::domain::fitness::Athlete;
use anyhow::Result;
use async_trait::async_trait;

/// Durable storage for the athlete roster
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the stored roster. A store with nothing in it yields an empty roster.
    async fn load(&self) -> Result<Vec<Athlete>>;

    /// Replace the stored roster with `athletes`
    async fn save(&self, athletes: &[Athlete]) -> Result<()>;
}
