//! The transaction data model, pages, and API endpoints.

mod categories_endpoint;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod form;
mod transactions_page;
mod view;

pub use categories_endpoint::get_category_options;
pub use core::{Transaction, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_new_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use transactions_page::get_transactions_page;
