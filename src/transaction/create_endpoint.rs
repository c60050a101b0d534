//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    repository::TransactionRepository,
    transaction::{Transaction, TransactionKind},
};

/// The state needed to create a transaction.
#[derive(Clone)]
pub struct CreateTransactionState {
    pub repository: Arc<Mutex<TransactionRepository>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub name: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The key of the category the transaction belongs to.
    pub category: String,
    /// The date when the transaction occurred, as submitted by the date
    /// input ("2024-01-01").
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Whether the transaction is an expense or an income.
    pub type_: TransactionKind,
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = match Transaction::create(
        &form.name,
        form.amount,
        &form.category,
        form.date,
        form.type_,
    ) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            return error.into_alert_response();
        }
    };

    let mut repository = match state.repository.lock() {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("could not acquire application state lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    if let Err(error) = repository.insert(transaction) {
        tracing::error!("could not save transaction: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use time::OffsetDateTime;

    use crate::{
        repository::TransactionRepository,
        storage::MemoryBlobStore,
        transaction::TransactionKind,
    };

    use super::{CreateTransactionState, TransactionForm, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        let repository = TransactionRepository::load(Box::new(MemoryBlobStore::new()));

        CreateTransactionState {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();
        let form = TransactionForm {
            name: "test transaction".to_string(),
            amount: 12.3,
            category: "Other".to_string(),
            date: OffsetDateTime::now_utc().date(),
            type_: TransactionKind::Expense,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_transactions_view(response);

        let repository = state.repository.lock().unwrap();
        assert_eq!(repository.all().len(), 1);
        assert_eq!(repository.all()[0].name, "test transaction");
        assert_eq!(repository.all()[0].amount, 12.3);
    }

    #[tokio::test]
    async fn new_transactions_are_prepended() {
        let state = get_test_state();
        for name in ["first", "second"] {
            let form = TransactionForm {
                name: name.to_string(),
                amount: 1.0,
                category: "Other".to_string(),
                date: OffsetDateTime::now_utc().date(),
                type_: TransactionKind::Expense,
            };

            create_transaction_endpoint(State(state.clone()), Form(form)).await;
        }

        let repository = state.repository.lock().unwrap();
        let names: Vec<&str> = repository
            .all()
            .iter()
            .map(|transaction| transaction.name.as_str())
            .collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[tokio::test]
    async fn create_transaction_fails_on_empty_name() {
        let state = get_test_state();
        let form = TransactionForm {
            name: "   ".to_string(),
            amount: 12.3,
            category: "Other".to_string(),
            date: OffsetDateTime::now_utc().date(),
            type_: TransactionKind::Expense,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.repository.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_transaction_fails_on_non_positive_amount() {
        let state = get_test_state();
        let form = TransactionForm {
            name: "free coffee".to_string(),
            amount: 0.0,
            category: "Other".to_string(),
            date: OffsetDateTime::now_utc().date(),
            type_: TransactionKind::Expense,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.repository.lock().unwrap().is_empty());
    }

    #[test]
    fn form_parses_urlencoded_fields() {
        let form: TransactionForm = serde_html_form::from_str(
            "name=Coffee&amount=12.5&category=Other&date=2024-01-01&type_=expense",
        )
        .unwrap();

        assert_eq!(form.name, "Coffee");
        assert_eq!(form.amount, 12.5);
        assert_eq!(form.type_, TransactionKind::Expense);
    }

    #[track_caller]
    fn assert_redirects_to_transactions_view(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location, "/transactions",
            "got redirect to {location:?}, want redirect to /transactions"
        );
    }
}
