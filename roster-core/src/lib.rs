pub mod config;
pub mod core;
pub mod persistence;

// Re-export commonly used types
pub use config::{LoggingConfig, RosterConfig, StorageConfig};
pub use core::{Roster, RosterStats, StudentRecord};
pub use persistence::{PersistenceError, PersistentRoster};
