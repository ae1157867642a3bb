use super::types::{RosterStats, StudentRecord};
use tracing::debug;

/// In-memory roster holding student records in insertion order
///
/// Duplicate ids are permitted; remove and search match on exact,
/// case-sensitive id equality.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
    stats: RosterStats,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence. Always succeeds.
    pub fn add(&mut self, record: StudentRecord) {
        debug!("add id={}", record.id);

        self.records.push(record);
        self.stats.adds += 1;
    }

    /// Remove every record whose id matches exactly
    ///
    /// Returns the number of records removed; 0 when nothing matched.
    pub fn remove(&mut self, id: &str) -> usize {
        debug!("remove id={}", id);

        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = before - self.records.len();

        self.stats.removes += removed as u64;
        removed
    }

    /// Find the first record (in insertion order) whose id matches exactly
    pub fn search(&mut self, id: &str) -> Option<&StudentRecord> {
        debug!("search id={}", id);

        self.stats.searches += 1;
        let found = self.records.iter().find(|record| record.id == id);

        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }

        found
    }

    /// All records in current insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of records on the roster
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get statistics
    pub fn stats(&self) -> RosterStats {
        self.stats.clone()
    }
}
