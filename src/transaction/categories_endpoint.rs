//! The endpoint that re-renders the category dropdown for a transaction type.

use axum::{extract::Query, http::StatusCode, response::Response};
use serde::Deserialize;

use crate::{html::render, transaction::TransactionKind, transaction::form::category_select};

/// The query string sent by the transaction type radio buttons.
#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    #[serde(rename = "type_", default)]
    pub kind: TransactionKind,
}

/// A route handler returning the category dropdown partial for a
/// transaction type, swapped in by htmx when the type changes.
pub async fn get_category_options(Query(query): Query<CategoryOptionsQuery>) -> Response {
    render(StatusCode::OK, category_select(query.kind))
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::StatusCode};
    use scraper::{Html, Selector};

    use crate::transaction::TransactionKind;

    use super::{CategoryOptionsQuery, get_category_options};

    #[tokio::test]
    async fn returns_income_categories_for_income_type() {
        let query = CategoryOptionsQuery {
            kind: TransactionKind::Income,
        };

        let response = get_category_options(Query(query)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = Html::parse_fragment(&String::from_utf8_lossy(&body));

        let option_selector = Selector::parse("option").unwrap();
        let values: Vec<String> = html
            .select(&option_selector)
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect();

        assert!(values.contains(&"Salary".to_owned()));
        assert!(!values.contains(&"Fuel".to_owned()));
    }

    #[test]
    fn query_parses_form_field_name() {
        let query: CategoryOptionsQuery = serde_html_form::from_str("type_=income").unwrap();

        assert_eq!(query.kind, TransactionKind::Income);
    }
}
