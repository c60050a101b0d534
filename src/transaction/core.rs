//! Defines the core data model for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::Error;

// Dates are stored as "2024-01-01" strings, matching older blobs.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Whether a transaction records money spent or money earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    ///
    /// The default so that blobs written before the income/expense split
    /// (which have no `type` field) deserialize as expenses.
    #[default]
    Expense,
    /// Money earned.
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Expense => write!(f, "Expense"),
            TransactionKind::Income => write!(f, "Income"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::create] which generates
/// the id and validates the fields. Deserialization is reserved for records
/// that have already been through the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// An opaque unique id, generated when the transaction is created and
    /// never changed afterwards.
    pub id: String,
    /// A text description of what the transaction was for.
    pub name: String,
    /// The amount of money that moved. Always positive; the direction is
    /// given by [Transaction::kind].
    pub amount: f64,
    /// The key of the category the transaction belongs to.
    ///
    /// Not validated against the category registry: unknown keys are kept
    /// and displayed as-is.
    pub category: String,
    /// The calendar date when the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Whether this is an expense or an income.
    ///
    /// Stored as `type` on the wire for compatibility with older blobs.
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id.
    ///
    /// Leading and trailing whitespace is trimmed from `name`.
    ///
    /// # Errors
    /// Returns [Error::EmptyName] if `name` is empty after trimming, or
    /// [Error::InvalidAmount] if `amount` is not a finite number greater
    /// than zero.
    pub fn create(
        name: &str,
        amount: f64,
        category: &str,
        date: Date,
        kind: TransactionKind,
    ) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            amount,
            category: category.to_owned(),
            date,
            kind,
        })
    }

    /// The amount with its sign derived from the transaction kind:
    /// positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Income => self.amount,
        }
    }
}
