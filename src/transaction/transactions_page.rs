//! The page listing all recorded transactions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::{StatusCode, Uri},
    response::Response,
};
use maud::html;

use crate::{
    AppState, Error, endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_HEADER_STYLE, base, render,
    },
    navigation::NavBar,
    repository::TransactionRepository,
};

use super::view::{TransactionTableRow, empty_table_row, transaction_row_view};

/// The state needed to render the transactions page.
#[derive(Clone)]
pub struct TransactionsPageState {
    pub repository: Arc<Mutex<TransactionRepository>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }
}

/// Renders the page with a table of all transactions, newest first.
pub async fn get_transactions_page(State(state): State<TransactionsPageState>) -> Response {
    let repository = match state.repository.lock() {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("could not acquire application state lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let rows: Vec<TransactionTableRow> = repository
        .all()
        .iter()
        .map(TransactionTableRow::from)
        .collect();

    let create_transaction_route = Uri::from_static(endpoints::NEW_TRANSACTION_VIEW);
    let export_route = Uri::from_static(endpoints::EXPORT_API);
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    div class="flex gap-4"
                    {
                        a href=(export_route) class=(LINK_STYLE) download
                        {
                            "Export CSV"
                        }

                        a href=(create_transaction_route) class=(LINK_STYLE)
                        {
                            "Create Transaction"
                        }
                    }
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class="px-6 py-3" { "Name" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class="px-6 py-3" { "Category" }
                                th scope="col" class="px-6 py-3" { "Date" }
                                th scope="col" class="px-6 py-3" { "Actions" }
                            }
                        }

                        tbody
                        {
                            @if rows.is_empty() {
                                (empty_table_row())
                            } @else {
                                @for row in &rows {
                                    (transaction_row_view(row))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    render(StatusCode::OK, base("Transactions", &[], &content))
}
