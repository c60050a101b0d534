//! Transaction data aggregation for the dashboard charts.
//!
//! Produces chart-agnostic label/value structures. The translation into
//! chart configuration lives in [crate::charts].

use serde::Deserialize;
use time::Date;

use crate::{
    category::category_label,
    transaction::{Transaction, TransactionKind},
};

/// The trailing time window for the expense time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "180d")]
    HalfYear,
    #[serde(rename = "365d")]
    Year,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::Quarter,
        TimeWindow::HalfYear,
        TimeWindow::Year,
    ];

    /// The window length in days.
    pub fn days(self) -> i64 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::Quarter => 90,
            TimeWindow::HalfYear => 180,
            TimeWindow::Year => 365,
        }
    }

    /// The label shown on the window selector links.
    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Week => "Last 7 days",
            TimeWindow::Month => "Last 30 days",
            TimeWindow::Quarter => "Last 90 days",
            TimeWindow::HalfYear => "Last 180 days",
            TimeWindow::Year => "Last year",
        }
    }

    /// The value used in dashboard query strings, e.g. "30d".
    pub fn query_value(self) -> &'static str {
        match self {
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
            TimeWindow::Quarter => "90d",
            TimeWindow::HalfYear => "180d",
            TimeWindow::Year => "365d",
        }
    }
}

/// How the category breakdown labels its slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Label each slice with its share of the total.
    #[default]
    Percent,
    /// Label each slice with its currency total.
    Value,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub label: String,
    pub total: f64,
}

/// Expense totals grouped by category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    /// One slice per distinct category, in first-seen order.
    pub slices: Vec<BreakdownSlice>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One point of the expense time series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: Date,
    pub total: f64,
}

/// Expense totals grouped by date over a trailing window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSeries {
    /// One point per date with expenses, ascending. Dates without expenses
    /// are omitted rather than filled with zeroes.
    pub points: Vec<SeriesPoint>,
}

impl ExpenseSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Group expense totals by category.
///
/// Income transactions are excluded. Slices appear in the order their
/// category is first seen in `transactions`, labelled with the resolved
/// category label.
pub fn category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut slices: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        match slices
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total += transaction.amount,
            None => slices.push((transaction.category.clone(), transaction.amount)),
        }
    }

    CategoryBreakdown {
        slices: slices
            .into_iter()
            .map(|(category, total)| BreakdownSlice {
                label: category_label(&category),
                total,
            })
            .collect(),
    }
}

/// Group expense totals by date within the trailing `window` ending at
/// `today`.
///
/// A transaction is in the window when its date is on or after
/// `today - window`. Future-dated transactions are included. Points are
/// returned in ascending date order.
pub fn expense_series(
    transactions: &[Transaction],
    today: Date,
    window: TimeWindow,
) -> ExpenseSeries {
    let cutoff = today - time::Duration::days(window.days());

    let mut points: Vec<SeriesPoint> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense || transaction.date < cutoff {
            continue;
        }

        match points
            .iter_mut()
            .find(|point| point.date == transaction.date)
        {
            Some(point) => point.total += transaction.amount,
            None => points.push(SeriesPoint {
                date: transaction.date,
                total: transaction.amount,
            }),
        }
    }

    points.sort_by_key(|point| point.date);

    ExpenseSeries { points }
}
