//! # Storage Layer
//!
//! Persistence is abstracted behind the [`DirectoryStore`] trait so the
//! core can be exercised without a filesystem:
//!
//! - [`fs::FileStore`]: production storage, the whole directory as one
//!   pretty-printed JSON file (an array of records)
//! - [`memory::InMemoryStore`]: test storage, no persistence
//!
//! A store is touched exactly twice per session: one load at startup and
//! one save at shutdown. A store with no prior data loads as an empty
//! directory, which is a normal outcome, not an error; unreadable data is
//! reported as [`RoloError::Corrupt`](crate::error::RoloError::Corrupt)
//! and never yields a partially filled directory.

use crate::directory::Directory;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Result of [`DirectoryStore::load`].
#[derive(Debug)]
pub struct Loaded {
    pub directory: Directory,
    /// False when the store had no prior data and the directory above is
    /// a fresh empty one.
    pub existed: bool,
}

/// Abstract interface for directory persistence.
pub trait DirectoryStore {
    /// Load the saved directory, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Loaded>;

    /// Persist a full snapshot of the directory.
    fn save(&mut self, directory: &Directory) -> Result<()>;
}
