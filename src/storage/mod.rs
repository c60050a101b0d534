//! Persistence for the transaction collection.
//!
//! The collection is persisted as a single JSON blob: an array of transaction
//! records written in store order. The [BlobStore] trait is the seam between
//! the repository and the bytes on disk, so tests can swap in
//! [MemoryBlobStore].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryBlobStore;

use crate::{Error, transaction::Transaction};

/// Reads and writes the transaction collection as a single blob.
pub trait BlobStore: Send {
    /// Load the persisted collection.
    ///
    /// Loading fails open: a missing or unreadable blob yields an empty
    /// collection so the application always starts.
    fn load(&self) -> Vec<Transaction>;

    /// Persist the full collection, replacing the previous blob.
    ///
    /// # Errors
    /// Returns [Error::SaveFailed] if the blob could not be written. The
    /// in-memory collection is unaffected.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error>;
}
