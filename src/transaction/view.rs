//! HTML rendering for the transaction table.

use maud::{Markup, html};
use time::{Date, Month};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    category::category_label,
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_ROW_STYLE, format_currency},
    transaction::Transaction,
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_NAME_GRAPHEMES: usize = 32;

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// A transaction flattened into the strings the table needs.
pub(crate) struct TransactionTableRow {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: Date,
    pub delete_url: String,
}

impl From<&Transaction> for TransactionTableRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            name: transaction.name.clone(),
            amount: transaction.signed_amount(),
            category: category_label(&transaction.category),
            date: transaction.date,
            delete_url: format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id),
        }
    }
}

pub(crate) fn transaction_row_view(row: &TransactionTableRow) -> Markup {
    let amount_str = format_currency(row.amount);
    let amount_class = amount_class(row.amount);
    let (name, tooltip) = format_name(&row.name);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        row.name
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (name) }
            td class={ "px-6 py-4 text-right " (amount_class) } { (amount_str) }
            td class=(TABLE_CELL_STYLE) { (row.category) }
            td class=(TABLE_CELL_STYLE) { (format_day_label(row.date)) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    hx-delete=(row.delete_url)
                    hx-confirm=(confirm_message)
                    hx-target="closest tr"
                    hx-target-error="#alert-container"
                    hx-swap="delete"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

/// The placeholder row shown when there are no transactions yet.
pub(crate) fn empty_table_row() -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td colspan="5" class="px-6 py-8 text-center text-gray-500 dark:text-gray-400"
                data-empty-state="true"
            {
                "No transactions yet. Create one to get started."
            }
        }
    }
}

fn format_day_label(date: Date) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn format_name(name: &str) -> (String, Option<&str>) {
    let name_length = name.graphemes(true).count();

    if name_length <= MAX_NAME_GRAPHEMES {
        (name.to_owned(), None)
    } else {
        let truncated: String = name.graphemes(true).take(MAX_NAME_GRAPHEMES - 3).collect();
        let truncated = truncated + "...";
        (truncated, Some(name))
    }
}
