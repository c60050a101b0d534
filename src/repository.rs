//! Coordinates the in-memory transaction collection with its persistent blob.

use crate::{Error, storage::BlobStore, store::TransactionStore, transaction::Transaction};

/// Owns the transaction collection and writes it through to a [BlobStore]
/// after every mutation.
pub struct TransactionRepository {
    store: TransactionStore,
    blob_store: Box<dyn BlobStore>,
}

impl TransactionRepository {
    /// Create a repository by loading the collection from `blob_store`.
    pub fn load(blob_store: Box<dyn BlobStore>) -> Self {
        let store = TransactionStore::with_transactions(blob_store.load());
        tracing::info!("Loaded {} transaction(s).", store.len());

        Self { store, blob_store }
    }

    /// Insert `transaction` at the front of the collection and persist.
    ///
    /// # Errors
    /// Returns [Error::SaveFailed] if the collection could not be persisted.
    /// The transaction remains in the in-memory collection.
    pub fn insert(&mut self, transaction: Transaction) -> Result<(), Error> {
        self.store.insert(transaction);
        self.blob_store.save(self.store.all())
    }

    /// Remove the transaction with `id` and persist.
    ///
    /// Removing an id that is not in the collection is a no-op: the row may
    /// have already been deleted from another tab.
    ///
    /// # Errors
    /// Returns [Error::SaveFailed] if the collection could not be persisted.
    pub fn remove(&mut self, id: &str) -> Result<bool, Error> {
        if !self.store.remove(id) {
            tracing::warn!("Could not find transaction {id} to delete.");
            return Ok(false);
        }

        self.blob_store.save(self.store.all())?;
        Ok(true)
    }

    /// All transactions, newest first.
    pub fn all(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod transaction_repository_tests {
    use time::macros::date;

    use crate::{
        Error,
        storage::MemoryBlobStore,
        transaction::{Transaction, TransactionKind},
    };

    use super::TransactionRepository;

    fn sample_transaction(name: &str) -> Transaction {
        Transaction::create(
            name,
            12.5,
            "Other",
            date!(2024 - 01 - 01),
            TransactionKind::Expense,
        )
        .expect("Could not create test transaction")
    }

    #[test]
    fn load_reads_persisted_collection() {
        let coffee = sample_transaction("Coffee");
        let blob_store = MemoryBlobStore::with_transactions(vec![coffee.clone()]);

        let repository = TransactionRepository::load(Box::new(blob_store));

        assert_eq!(repository.all(), [coffee]);
    }

    #[test]
    fn insert_prepends_and_persists() {
        let mut repository = TransactionRepository::load(Box::new(MemoryBlobStore::new()));
        let coffee = sample_transaction("Coffee");
        let lunch = sample_transaction("Lunch");

        repository
            .insert(coffee.clone())
            .expect("Could not insert transaction");
        repository
            .insert(lunch.clone())
            .expect("Could not insert transaction");

        assert_eq!(repository.all(), [lunch, coffee]);
    }

    #[test]
    fn insert_keeps_transaction_when_save_fails() {
        let mut repository =
            TransactionRepository::load(Box::new(MemoryBlobStore::new().fail_saves()));
        let coffee = sample_transaction("Coffee");

        let result = repository.insert(coffee.clone());

        assert!(matches!(result, Err(Error::SaveFailed(_))));
        assert_eq!(repository.all(), [coffee]);
    }

    #[test]
    fn remove_deletes_and_persists() {
        let coffee = sample_transaction("Coffee");
        let lunch = sample_transaction("Lunch");
        let blob_store =
            MemoryBlobStore::with_transactions(vec![lunch.clone(), coffee.clone()]);
        let mut repository = TransactionRepository::load(Box::new(blob_store));

        let removed = repository
            .remove(&coffee.id)
            .expect("Could not remove transaction");

        assert!(removed);
        assert_eq!(repository.all(), [lunch]);
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let coffee = sample_transaction("Coffee");
        let blob_store = MemoryBlobStore::with_transactions(vec![coffee.clone()]);
        let mut repository = TransactionRepository::load(Box::new(blob_store));

        let removed = repository
            .remove("does-not-exist")
            .expect("Remove should not fail for unknown ids");

        assert!(!removed);
        assert_eq!(repository.all(), [coffee]);
    }
}
