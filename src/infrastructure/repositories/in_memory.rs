//! In-Memory Repository Implementation
//!
//! Thread-safe, in-memory implementation of `RosterRepository`.
//!
//! # Limitations
//!
//! - Data is lost on application restart
//! - No sharing across processes
//!
//! For durable storage use `JsonRosterRepository`.

use crate::domain::fitness::Athlete;
use crate::domain::repositories::RosterRepository;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of RosterRepository
/// Suitable for testing and scratch sessions
#[derive(Clone)]
pub struct InMemoryRosterRepository {
    athletes: Arc<RwLock<Vec<Athlete>>>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::with_roster(Vec::new())
    }

    /// Pre-populated store
    pub fn with_roster(athletes: Vec<Athlete>) -> Self {
        Self {
            athletes: Arc::new(RwLock::new(athletes)),
        }
    }

    /// Number of athletes currently stored
    pub async fn len(&self) -> usize {
        self.athletes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.athletes.read().await.is_empty()
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn load(&self) -> Result<Vec<Athlete>> {
        Ok(self.athletes.read().await.clone())
    }

    async fn save(&self, athletes: &[Athlete]) -> Result<()> {
        *self.athletes.write().await = athletes.to_vec();
        Ok(())
    }
}
