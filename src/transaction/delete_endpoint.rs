//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AppState, Error, alert::AlertView, html::render, repository::TransactionRepository,
};

/// The state needed to delete a transaction.
#[derive(Clone)]
pub struct DeleteTransactionState {
    pub repository: Arc<Mutex<TransactionRepository>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }
}

/// A route handler for deleting a transaction by its ID.
///
/// Deleting an ID that does not exist still returns OK so the client side
/// row swap proceeds.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<String>,
    State(state): State<DeleteTransactionState>,
) -> Response {
    let mut repository = match state.repository.lock() {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("could not acquire application state lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    match repository.remove(&transaction_id) {
        Ok(_) => render(
            StatusCode::OK,
            AlertView::success("Transaction deleted", ""),
        ),
        Err(error) => {
            tracing::error!("could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        repository::TransactionRepository,
        storage::MemoryBlobStore,
        transaction::{Transaction, TransactionKind},
    };

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn get_test_transaction() -> Transaction {
        Transaction::create(
            "test transaction",
            12.3,
            "Other",
            date!(2024 - 01 - 01),
            TransactionKind::Expense,
        )
        .unwrap()
    }

    fn get_test_state(blob_store: MemoryBlobStore) -> DeleteTransactionState {
        let repository = TransactionRepository::load(Box::new(blob_store));

        DeleteTransactionState {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    #[tokio::test]
    async fn can_delete_transaction() {
        let transaction = get_test_transaction();
        let transaction_id = transaction.id.clone();
        let state = get_test_state(MemoryBlobStore::with_transactions(vec![transaction]));

        let response =
            delete_transaction_endpoint(Path(transaction_id), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.repository.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_transaction_returns_ok() {
        let transaction = get_test_transaction();
        let state = get_test_state(MemoryBlobStore::with_transactions(vec![transaction]));

        let response =
            delete_transaction_endpoint(Path("no-such-id".to_string()), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.repository.lock().unwrap().all().len(), 1);
    }

    #[tokio::test]
    async fn delete_returns_error_when_save_fails() {
        let transaction = get_test_transaction();
        let transaction_id = transaction.id.clone();
        let state = get_test_state(
            MemoryBlobStore::with_transactions(vec![transaction]).fail_saves(),
        );

        let response = delete_transaction_endpoint(Path(transaction_id), State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
