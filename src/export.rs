//! The CSV export endpoint.
//!
//! Spreadsheet applications expect the UTF-8 byte order mark to detect the
//! encoding, so the file starts with one.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use maud::html;

use crate::{
    AppState, Error,
    category::category_label,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, link, render},
    navigation::NavBar,
    repository::TransactionRepository,
    transaction::Transaction,
};

const CSV_HEADER: &str = "Date,Type,Category,Name,Amount";
const EXPORT_FILE_NAME: &str = "budget_backup.csv";

/// The state needed to export transactions.
#[derive(Clone)]
pub struct ExportState {
    pub repository: Arc<Mutex<TransactionRepository>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }
}

/// A route handler that serves all transactions as a CSV download.
///
/// An empty collection renders a notice page instead of a file download.
pub async fn export_transactions_endpoint(State(state): State<ExportState>) -> Response {
    let repository = match state.repository.lock() {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("could not acquire application state lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    if repository.is_empty() {
        return render(StatusCode::OK, nothing_to_export_view());
    }

    let csv = transactions_to_csv(repository.all());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response()
}

/// The page shown when the export link is followed with no transactions
/// recorded.
fn nothing_to_export_view() -> maud::Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let transactions_link = link(endpoints::TRANSACTIONS_VIEW, "transactions page");

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
            {
                h1 class="text-xl font-bold" { "Nothing to export" }

                p
                {
                    "Record a transaction on the " (transactions_link)
                    " first, then come back for the CSV."
                }
            }
        }
    };

    base("Export", &[], &content)
}

/// Serializes transactions to CSV in store order.
///
/// Category and name are always quoted since they may contain commas or
/// quotes, the other fields never can.
fn transactions_to_csv(transactions: &[Transaction]) -> String {
    let mut csv = String::from("\u{FEFF}");
    csv.push_str(CSV_HEADER);

    for transaction in transactions {
        csv.push('\n');
        csv.push_str(&format!(
            "{},{},{},{},{}",
            transaction.date,
            transaction.kind,
            quote_field(&category_label(&transaction.category)),
            quote_field(&transaction.name),
            transaction.amount,
        ));
    }

    csv
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
