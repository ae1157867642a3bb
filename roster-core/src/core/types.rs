use serde::{Deserialize, Serialize};
use std::fmt;

/// A single student record held by the roster
///
/// The `id` field is the lookup key for remove/search. Uniqueness is a
/// caller convention, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub id: String,
    /// Grade or class label
    pub grade: String,
    pub age: u32,
    pub address: String,
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Id: {}, Grade: {}, Age: {}, Address: {}",
            self.name, self.id, self.grade, self.age, self.address
        )
    }
}

/// Statistics for roster operations
#[derive(Debug, Default, Clone, Serialize)]
pub struct RosterStats {
    /// Records added
    pub adds: u64,
    /// Records removed
    pub removes: u64,
    /// Number of search operations
    pub searches: u64,
    /// Searches that found a record
    pub hits: u64,
    /// Searches that found nothing
    pub misses: u64,
}

impl RosterStats {
    /// Calculate search hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = StudentRecord {
            name: "Ann".to_string(),
            id: "R1".to_string(),
            grade: "A".to_string(),
            age: 20,
            address: "X".to_string(),
        };

        assert_eq!(
            record.to_string(),
            "Name: Ann, Id: R1, Grade: A, Age: 20, Address: X"
        );
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = RosterStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        stats.hits = 3;
        stats.misses = 1;
        assert_eq!(stats.hit_rate(), 0.75);
    }
}
