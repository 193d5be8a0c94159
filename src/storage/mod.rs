//! Persistence backends for the todo store.
//!
//! The store never touches storage directly; it serializes the whole todo
//! sequence and hands the bytes to an injected [`Storage`] implementation.
//! The slot is a single JSON array of todo records.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A single named storage slot.
pub trait Storage: Send + Sync {
    /// Read the slot contents. Returns `None` if the slot was never written.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Durably replace the slot contents.
    fn save(&self, bytes: &[u8]) -> Result<()>;
}
