pub mod roster;
pub mod types;

pub use roster::Roster;
pub use types::{RosterStats, StudentRecord};
