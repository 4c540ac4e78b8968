//! JSON file storage for the athlete roster.
//!
//! Saves write a sibling temp file and rename it over the target, so a
//! reader never sees a partial file and a failed write leaves the previous
//! one intact. Save and load on one instance are serialized by a lock.
//! Separate instances on the same path are not coordinated.

use super::dto::{decode_roster, encode_roster};
use crate::domain::fitness::Athlete;
use crate::domain::repositories::RosterRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct JsonRosterRepository {
    file_path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonRosterRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            file_lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

#[async_trait]
impl RosterRepository for JsonRosterRepository {
    async fn load(&self) -> Result<Vec<Athlete>> {
        let _guard = self.file_lock.lock().await;

        let content = match fs::read(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No roster file at {:?}, starting empty", self.file_path);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read roster file {:?}", self.file_path));
            }
        };

        match decode_roster(&content) {
            Ok(athletes) => {
                info!(
                    "Loaded {} athletes from {:?}",
                    athletes.len(),
                    self.file_path
                );
                Ok(athletes)
            }
            Err(e) => {
                // Unreadable content is treated as no data rather than an error
                warn!(
                    "Roster file {:?} is malformed ({}), continuing with an empty roster",
                    self.file_path, e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, athletes: &[Athlete]) -> Result<()> {
        let _guard = self.file_lock.lock().await;

        if let Some(dir) = self.file_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .await
                    .context("Failed to create roster directory")?;
            }
        }

        let content = encode_roster(athletes).context("Failed to serialize roster")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .context("Failed to create temp roster file")?;
        file.write_all(&content)
            .await
            .context("Failed to write temp roster file")?;
        file.sync_all()
            .await
            .context("Failed to flush temp roster file")?;
        drop(file);

        debug!("Wrote {} bytes to {:?}", content.len(), temp_path);

        fs::rename(&temp_path, &self.file_path)
            .await
            .context("Failed to replace roster file")?;

        info!("Saved {} athletes to {:?}", athletes.len(), self.file_path);
        Ok(())
    }
}
