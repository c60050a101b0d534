//! The fallback route handler for unknown URLs.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

pub async fn get_404_not_found() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Page not found.",
            "The page you are looking for does not exist. Check the URL for typos.",
        ),
    )
}
