//! Alert messages that endpoints return for htmx to swap into the
//! `#alert-container` element in the page footer.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy)]
enum AlertType {
    Success,
    Error,
}

/// Renders success and error messages with appropriate styling.
pub struct AlertView;

impl AlertView {
    /// Create a new success alert.
    pub fn success(message: &str, details: &str) -> Markup {
        alert(AlertType::Success, message, details)
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Markup {
        alert(AlertType::Error, message, details)
    }
}

fn alert(alert_type: AlertType, message: &str, details: &str) -> Markup {
    let container_style = match alert_type {
        AlertType::Success => {
            "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
            dark:bg-gray-800 dark:text-green-400 border border-green-300 \
            dark:border-green-800 shadow"
        }
        AlertType::Error => {
            "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
            dark:bg-gray-800 dark:text-red-400 border border-red-300 \
            dark:border-red-800 shadow"
        }
    };

    html! {
        div class=(container_style) role="alert"
        {
            div class="flex items-start justify-between gap-4"
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty()
                    {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="font-bold cursor-pointer bg-transparent border-none"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }
}
