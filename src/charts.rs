//! Chart generation and rendering for the dashboard.
//!
//! Translates the chart-agnostic aggregates from [crate::aggregation] into
//! ECharts configurations. Each chart is generated as a JSON configuration
//! string and rendered with a corresponding HTML container and JavaScript
//! initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AreaStyle, AxisLabel, AxisType, JsFunction, Label, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    aggregation::{CategoryBreakdown, DisplayMode, ExpenseSeries, TimeWindow},
    html::HeadElement,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a dashboard chart.
pub fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[380px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates JavaScript initialization code for a dashboard chart.
///
/// Creates a script that initializes an ECharts instance with dark mode
/// support and responsive resizing.
pub fn chart_script(chart: &DashboardChart) -> HeadElement {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        chart.id, chart.options
    );

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{script_content}\n}});",
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A donut chart of expense totals grouped by category.
///
/// `mode` selects the slice labels: percentage of the expense total, or the
/// raw currency total. The underlying data is the same either way.
pub fn breakdown_chart(breakdown: &CategoryBreakdown, mode: DisplayMode) -> Chart {
    let data: Vec<(f64, String)> = breakdown
        .slices
        .iter()
        .map(|slice| (slice.total, slice.label.clone()))
        .collect();

    let label = match mode {
        DisplayMode::Percent => Label::new().show(true).formatter("{b}: {d}%"),
        DisplayMode::Value => Label::new().show(true).formatter(JsFunction::new_with_args(
            "params",
            &format!(
                "{CURRENCY_FORMATTER}
                return params.name + ': ' + currencyFormatter.format(params.value);"
            ),
        )),
    };

    Chart::new()
        .title(Title::new().text("Expenses by category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["45%", "70%"])
                .avoid_label_overlap(true)
                .label(label)
                .data(data),
        )
}

/// A line chart of daily expense totals over the selected window.
pub fn series_chart(series: &ExpenseSeries, window: TimeWindow) -> Chart {
    let labels: Vec<String> = series
        .points
        .iter()
        .map(|point| format_date_label(point.date, window))
        .collect();
    let values: Vec<f64> = series.points.iter().map(|point| point.total).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expenses over time")
                .subtext(window.label()),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter()),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Expenses")
                .area_style(AreaStyle::new())
                .data(values),
        )
}

/// The x-axis label for a series point.
///
/// Short windows label points day/month. Windows longer than two months
/// label points month/year so the axis stays readable.
fn format_date_label(date: time::Date, window: TimeWindow) -> String {
    if window.days() > 60 {
        format!("{}/{}", date.month() as u8, date.year() % 100)
    } else {
        format!("{}/{}", date.day(), date.month() as u8)
    }
}

const CURRENCY_FORMATTER: &str = "const currencyFormatter = new Intl.NumberFormat('en-US', {
        style: 'currency',
        currency: 'USD'
    });";

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        &format!("{CURRENCY_FORMATTER}\nreturn (number) ? currencyFormatter.format(number) : \"-\";"),
    )
}
