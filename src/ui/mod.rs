//! Read-only presentation surface: the narrative log and session snapshots

pub mod snapshot;
pub mod state;

pub use snapshot::{EnemySnapshot, InteractionPrompts, PlayerSnapshot, SessionSnapshot};
pub use state::{LogCategory, LogEntry, NarrativeLog};
