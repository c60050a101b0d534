//! The in-memory transaction collection.
//!
//! The store owns ordering: new transactions are prepended so the collection
//! always reads newest first. Persistence lives behind the
//! [crate::storage::BlobStore] trait and is coordinated by
//! [crate::repository::TransactionRepository].

use crate::transaction::Transaction;

/// An ordered, in-memory collection of transactions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store holding `transactions` in the given order.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Insert `transaction` at the front of the collection.
    pub fn insert(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Remove the transaction with `id`, if present.
    ///
    /// Returns `true` if a transaction was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        self.transactions.len() != initial_len
    }

    /// All transactions, newest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod transaction_store_tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::TransactionStore;

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
    fn insert_prepends() {
        let mut store = TransactionStore::default();
        let coffee = sample_transaction("Coffee");
        let lunch = sample_transaction("Lunch");

        store.insert(coffee.clone());
        store.insert(lunch.clone());

        assert_eq!(store.all(), [lunch, coffee]);
    }

    #[test]
    fn remove_deletes_matching_transaction() {
        let mut store = TransactionStore::default();
        let coffee = sample_transaction("Coffee");
        let lunch = sample_transaction("Lunch");
        store.insert(coffee.clone());
        store.insert(lunch.clone());

        let removed = store.remove(&coffee.id);

        assert!(removed);
        assert_eq!(store.all(), [lunch]);
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let mut store = TransactionStore::default();
        let coffee = sample_transaction("Coffee");
        store.insert(coffee.clone());

        let removed = store.remove("does-not-exist");

        assert!(!removed);
        assert_eq!(store.all(), [coffee]);
    }
}
