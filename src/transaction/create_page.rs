//! The page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};
use maud::html;

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, render,
    },
    navigation::NavBar,
    timezone::local_date_today,
    transaction::{
        TransactionKind,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// The state needed for the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
pub async fn get_new_transaction_page(State(state): State<NewTransactionPageState>) -> Response {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let fields = transaction_form_fields(&TransactionFormDefaults {
        kind: TransactionKind::Expense,
        date: local_date_today(&state.local_timezone),
    });

    let content = html!(
        (nav_bar)

        main class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "New Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="space-y-4 w-full"
            {
                (fields)

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Create"
                }
            }
        }
    );

    render(
        StatusCode::OK,
        base("New Transaction", &[dollar_input_styles()], &content),
    )
}

#[cfg(test)]
mod view_tests {
    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{ElementRef, Html};
    use time::OffsetDateTime;

    use crate::endpoints;

    use super::{NewTransactionPageState, get_new_transaction_page};

    #[tokio::test]
    async fn new_transaction_returns_form() {
        let state = NewTransactionPageState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_new_transaction_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_correct_form(&document);
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_correct_form(document: &Html) {
        let form_selector = scraper::Selector::parse("form").unwrap();
        let forms = document.select(&form_selector).collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        let form = forms.first().unwrap();
        let hx_post = form.value().attr("hx-post");
        assert_eq!(
            hx_post,
            Some(endpoints::TRANSACTIONS_API),
            "want form with attribute hx-post=\"{}\", got {:?}",
            endpoints::TRANSACTIONS_API,
            hx_post
        );

        assert_correct_inputs(form);
        assert_category_select(form);
        assert_has_submit_button(form);
    }

    #[track_caller]
    fn assert_correct_inputs(form: &ElementRef) {
        let expected_input_types = vec![("amount", "number"), ("date", "date"), ("name", "text")];

        for (name, element_type) in expected_input_types {
            let selector_string = format!("input[type={element_type}]");
            let input_selector = scraper::Selector::parse(&selector_string).unwrap();
            let inputs = form.select(&input_selector).collect::<Vec<_>>();
            assert_eq!(
                inputs.len(),
                1,
                "want 1 {element_type} input, got {}",
                inputs.len()
            );

            let input = inputs.first().unwrap();

            let input_name = input.value().attr("name");
            assert_eq!(
                input_name,
                Some(name),
                "want {element_type} with name=\"{name}\", got {input_name:?}"
            );

            assert!(
                input.value().attr("required").is_some(),
                "want {name} input to be required"
            );

            if input_name == Some("date") {
                assert_eq!(
                    input.value().attr("value"),
                    Some(OffsetDateTime::now_utc().date().to_string().as_str()),
                    "want date input to default to today"
                );
            }
        }
    }

    #[track_caller]
    fn assert_category_select(form: &ElementRef) {
        let select_selector = scraper::Selector::parse("select[name=category]").unwrap();
        let selects = form.select(&select_selector).collect::<Vec<_>>();
        assert_eq!(selects.len(), 1, "want 1 category select");
        assert_eq!(
            selects[0].value().attr("id"),
            Some("category-select"),
            "category select needs a stable id for the htmx partial swap"
        );
    }

    #[track_caller]
    fn assert_has_submit_button(form: &ElementRef) {
        let button_selector = scraper::Selector::parse("button").unwrap();
        let buttons = form.select(&button_selector).collect::<Vec<_>>();
        assert_eq!(buttons.len(), 1, "want 1 button, got {}", buttons.len());
        let button_type = buttons.first().unwrap().value().attr("type");
        assert_eq!(
            button_type,
            Some("submit"),
            "want button with type=\"submit\", got {button_type:?}"
        );
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
