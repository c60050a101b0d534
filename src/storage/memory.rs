//! An in-memory [BlobStore] for tests.

use crate::{Error, storage::BlobStore, transaction::Transaction};

/// Holds the persisted collection in memory.
///
/// Useful in tests that need a preloaded collection or a simulated write
/// failure.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    transactions: Vec<Transaction>,
    fail_saves: bool,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose initial load returns `transactions`.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            fail_saves: false,
        }
    }

    /// Make every subsequent save fail with [Error::SaveFailed].
    pub fn fail_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        if self.fail_saves {
            return Err(Error::SaveFailed("simulated write failure".to_owned()));
        }

        self.transactions = transactions.to_vec();
        Ok(())
    }
}
