//! The state shared between route handlers.

use std::sync::{Arc, Mutex};

use crate::{repository::TransactionRepository, storage::BlobStore};

/// The state of the application.
#[derive(Clone)]
pub struct AppState {
    /// The transaction collection and its backing store.
    pub repository: Arc<Mutex<TransactionRepository>>,
    /// The canonical name of the local timezone, e.g., "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Load the transactions from `blob_store` and wrap everything for
    /// sharing between route handlers.
    pub fn new(blob_store: Box<dyn BlobStore>, local_timezone: &str) -> Self {
        let repository = TransactionRepository::load(blob_store);

        Self {
            repository: Arc::new(Mutex::new(repository)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
