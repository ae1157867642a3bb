use super::snapshot;
use super::types::Result;
use crate::config::StorageConfig;
use crate::core::{Roster, RosterStats, StudentRecord};
use std::path::PathBuf;
use tracing::{error, info};

/// Roster with snapshot persistence
///
/// Composition over a plain [`Roster`]: every mutation delegates to the
/// in-memory sequence, then rewrites the full snapshot file. Reads never
/// touch the disk.
///
/// A failed save is reported and does not roll back the in-memory
/// mutation, so memory and disk can diverge until the next successful
/// save.
pub struct PersistentRoster {
    roster: Roster,
    path: PathBuf,
}

impl PersistentRoster {
    /// Open the roster, loading prior state from the configured snapshot
    ///
    /// A missing file starts the roster empty. A file that cannot be
    /// parsed is reported and the roster also starts empty.
    pub fn open(config: &StorageConfig) -> Self {
        Self::with_path(config.path.clone())
    }

    pub fn with_path(path: PathBuf) -> Self {
        let mut roster = Roster::new();

        match snapshot::read_snapshot(&path) {
            Ok(Some(records)) => {
                info!("loaded {} student records from {:?}", records.len(), path);
                for record in records {
                    roster.add(record);
                }
            }
            Ok(None) => {
                info!("no roster file at {:?}, starting empty", path);
            }
            Err(e) => {
                error!("failed to load roster from {:?}: {}", path, e);
            }
        }

        Self { roster, path }
    }

    /// Append a record and rewrite the snapshot
    pub fn add(&mut self, record: StudentRecord) {
        self.roster.add(record);
        self.save_or_report();
    }

    /// Remove every record matching `id` and rewrite the snapshot
    ///
    /// Returns the number of records removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let removed = self.roster.remove(id);
        self.save_or_report();
        removed
    }

    /// Find the first record matching `id`. No persistence interaction.
    pub fn search(&mut self, id: &str) -> Option<&StudentRecord> {
        self.roster.search(id)
    }

    /// All records in current insertion order. No persistence interaction.
    pub fn records(&self) -> &[StudentRecord] {
        self.roster.records()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Get statistics
    pub fn stats(&self) -> RosterStats {
        self.roster.stats()
    }

    /// Rewrite the snapshot from the current in-memory sequence
    pub fn save(&self) -> Result<()> {
        snapshot::write_snapshot(&self.path, self.roster.records())
    }

    fn save_or_report(&self) {
        if let Err(e) = self.save() {
            error!("failed to persist roster to {:?}: {}", self.path, e);
        }
    }
}
