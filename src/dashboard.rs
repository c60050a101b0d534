//! The dashboard page: chart views over the transaction collection.
//!
//! The dashboard offers two views, selected by query string: a donut chart
//! of expenses grouped by category, and a line chart of expenses over a
//! trailing time window. Switching views, windows, and label modes is done
//! with plain links so the browser URL always describes the current state.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::Response,
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    aggregation::{self, DisplayMode, TimeWindow},
    charts::{DashboardChart, breakdown_chart, chart_script, chart_view, series_chart},
    endpoints,
    html::{HeadElement, base, link, render},
    navigation::NavBar,
    repository::TransactionRepository,
    timezone::local_date_today,
};

/// The state needed for displaying the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    pub repository: Arc<Mutex<TransactionRepository>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Which chart the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartView {
    #[default]
    Pie,
    Line,
}

/// The dashboard's query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub view: ChartView,
    #[serde(default)]
    pub window: TimeWindow,
    #[serde(default)]
    pub mode: DisplayMode,
}

impl DashboardQuery {
    fn to_url(self) -> String {
        let view = match self.view {
            ChartView::Pie => "pie",
            ChartView::Line => "line",
        };
        let mode = match self.mode {
            DisplayMode::Percent => "percent",
            DisplayMode::Value => "value",
        };

        format!(
            "{}?view={view}&window={}&mode={mode}",
            endpoints::DASHBOARD_VIEW,
            self.window.query_value(),
        )
    }

    fn with_view(self, view: ChartView) -> Self {
        Self { view, ..self }
    }

    fn with_window(self, window: TimeWindow) -> Self {
        Self { window, ..self }
    }

    fn with_mode(self, mode: DisplayMode) -> Self {
        Self { mode, ..self }
    }
}

/// Display a page with charts summarising the user's transactions.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let repository = match state.repository.lock() {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("could not acquire application state lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let chart = match query.view {
        ChartView::Pie => {
            let breakdown = aggregation::category_breakdown(repository.all());

            if breakdown.is_empty() {
                None
            } else {
                Some(DashboardChart {
                    id: "category-breakdown-chart",
                    options: breakdown_chart(&breakdown, query.mode).to_string(),
                })
            }
        }
        ChartView::Line => {
            let today = local_date_today(&state.local_timezone);
            let series = aggregation::expense_series(repository.all(), today, query.window);

            if series.is_empty() {
                None
            } else {
                Some(DashboardChart {
                    id: "expense-series-chart",
                    options: series_chart(&series, query.window).to_string(),
                })
            }
        }
    };

    match chart {
        Some(chart) => render(StatusCode::OK, dashboard_view(query, &chart)),
        None => render(StatusCode::OK, dashboard_no_data_view(query)),
    }
}

/// Renders the dashboard page when no expense data matches the current view.
fn dashboard_no_data_view(query: DashboardQuery) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "add an expense");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            (dashboard_controls(query))

            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with the selected chart and its controls.
fn dashboard_view(query: DashboardQuery, chart: &DashboardChart) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (dashboard_controls(query))

            (chart_view(chart))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        chart_script(chart),
    ];

    base("Dashboard", &scripts, &content)
}

/// The view, window, and label mode selector links.
fn dashboard_controls(query: DashboardQuery) -> Markup {
    html!(
        div class="flex flex-wrap items-center gap-4 mb-4"
        {
            div class="flex gap-2" role="group" aria-label="Chart view"
            {
                (control_link(
                    "By category",
                    query.with_view(ChartView::Pie).to_url(),
                    query.view == ChartView::Pie,
                ))
                (control_link(
                    "Over time",
                    query.with_view(ChartView::Line).to_url(),
                    query.view == ChartView::Line,
                ))
            }

            @match query.view {
                ChartView::Pie => {
                    div class="flex gap-2" role="group" aria-label="Slice labels"
                    {
                        (control_link(
                            "Percent",
                            query.with_mode(DisplayMode::Percent).to_url(),
                            query.mode == DisplayMode::Percent,
                        ))
                        (control_link(
                            "Values",
                            query.with_mode(DisplayMode::Value).to_url(),
                            query.mode == DisplayMode::Value,
                        ))
                    }
                }
                ChartView::Line => {
                    div class="flex gap-2" role="group" aria-label="Time window"
                    {
                        @for window in TimeWindow::ALL {
                            (control_link(
                                window.label(),
                                query.with_window(window).to_url(),
                                query.window == window,
                            ))
                        }
                    }
                }
            }
        }
    )
}

fn control_link(text: &str, url: String, is_selected: bool) -> Markup {
    let style = if is_selected {
        "px-3 py-1.5 text-sm font-medium rounded bg-blue-600 text-white"
    } else {
        "px-3 py-1.5 text-sm font-medium rounded bg-white text-gray-700 \
        border border-gray-200 hover:bg-gray-100 hover:text-blue-700 \
        dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 \
        dark:hover:bg-gray-700 dark:hover:text-white"
    };

    html!( a href=(url) class=(style) { (text) } )
}
