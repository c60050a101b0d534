//! Spendbook is a small self-hosted web app for tracking household income
//! and expenses.
//!
//! This library provides a server that directly serves HTML pages: a
//! transactions table with a create form, a dashboard with category and
//! time-series charts, and a CSV export of the full collection. All data is
//! held in memory behind a repository and persisted as a single JSON blob.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{http::StatusCode, response::Response};
use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod alert;
mod app_state;
mod category;
mod charts;
mod dashboard;
mod endpoints;
mod export;
mod html;
mod logging;
mod navigation;
mod not_found;
mod repository;
mod routing;
mod storage;
mod store;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use storage::{BlobStore, JsonFileStore, MemoryBlobStore};
pub use transaction::{Transaction, TransactionKind};

use crate::{alert::AlertView, html::render};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a transaction name.
    #[error("transaction name cannot be empty")]
    EmptyName,

    /// A zero, negative, or non-finite amount was used to create a
    /// transaction. Amounts record how much money moved; the direction
    /// comes from the transaction kind, so the amount itself must be
    /// positive.
    #[error("{0} is not a valid amount: amounts must be greater than zero")]
    InvalidAmount(f64),

    /// The transaction collection could not be written to the persistent
    /// blob. The in-memory state is still valid, so callers should notify
    /// the user and carry on rather than abort.
    #[error("could not save transactions: {0}")]
    SaveFailed(String),

    /// Could not acquire the lock on the application state.
    #[error("could not acquire the application state lock")]
    StateLockError,
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyName => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid transaction name",
                    "The name cannot be empty. Describe what the transaction was for.",
                ),
            ),
            Error::InvalidAmount(amount) => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid amount",
                    &format!(
                        "{amount} is not a valid amount. Enter a number greater \
                        than zero and use the Expense or Income option to set \
                        the direction."
                    ),
                ),
            ),
            Error::SaveFailed(_) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertView::error(
                    "Could not save your changes",
                    "The transaction data file could not be written. \
                    Check the server logs and the data path permissions.",
                ),
            ),
            Error::StateLockError => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertView::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        }
    }
}
